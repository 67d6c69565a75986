//! Golf handicap index under the World Handicap System.

use tracing::debug;

/// One posted round with the course's rating and slope.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub score: f64,
    pub rating: f64,
    pub slope: f64,
}

impl Round {
    /// Score differential, the slope-adjusted gap between score and rating.
    pub fn differential(&self) -> f64 {
        (self.score - self.rating) * 113.0 / self.slope
    }
}

/// How many lowest differentials count, and the flat adjustment, for a
/// given number of posted rounds.
fn selection_for(count: usize) -> (usize, f64) {
    match count {
        3 => (1, -2.0),
        4 => (1, -1.0),
        5 => (1, 0.0),
        6 => (2, 0.0),
        7 | 8 => (2, 0.0),
        9..=11 => (3, 0.0),
        12..=14 => (4, 0.0),
        15 | 16 => (5, 0.0),
        17 | 18 => (6, 0.0),
        19 => (7, 0.0),
        _ => (8, 0.0),
    }
}

/// Handicap index from a set of posted rounds.
///
/// Returns `None` when fewer than three usable rounds are available. Rounds
/// with non-finite fields or a non-positive slope are discarded. The index
/// is floored at -5.0 and rounded to one decimal.
pub fn handicap_index(rounds: &[Round]) -> Option<f64> {
    let mut differentials: Vec<f64> = rounds
        .iter()
        .filter(|r| {
            r.score.is_finite() && r.rating.is_finite() && r.slope.is_finite() && r.slope > 0.0
        })
        .map(Round::differential)
        .collect();
    if differentials.len() < 3 {
        return None;
    }
    differentials.sort_by(f64::total_cmp);

    let (take, adjustment) = selection_for(differentials.len());
    let sum: f64 = differentials[..take].iter().sum();
    let raw = sum / take as f64 + adjustment;
    let index = raw.max(-5.0);
    debug!(rounds = differentials.len(), take, index, "handicap computed");
    Some((index * 10.0).round() / 10.0)
}
