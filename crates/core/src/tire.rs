//! Tire size geometry: parsing metric size labels, deriving dimensions,
//! finding near-equivalent sizes, and comparing two sizes.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const MM_PER_INCH: f64 = 25.4;
const INCHES_PER_MILE: f64 = 63360.0;

static TIRE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d{3})\s*/\s*(\d{2})\s*R\s*(\d{2})\s*$").unwrap());

/// A tire size with all geometry derived from the three label numbers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TireSpec {
    pub width_mm: u32,
    pub aspect_percent: u32,
    pub rim_diameter_in: u32,
    pub sidewall_mm: f64,
    pub section_width_in: f64,
    pub diameter_mm: f64,
    pub diameter_in: f64,
    pub circumference_mm: f64,
    pub circumference_in: f64,
    pub revs_per_mile: f64,
}

impl TireSpec {
    /// Derive the full geometry from the three numbers on the sidewall.
    pub fn from_dimensions(width_mm: u32, aspect_percent: u32, rim_diameter_in: u32) -> Self {
        let sidewall_mm = f64::from(width_mm) * f64::from(aspect_percent) / 100.0;
        let diameter_mm = f64::from(rim_diameter_in) * MM_PER_INCH + 2.0 * sidewall_mm;
        let diameter_in = diameter_mm / MM_PER_INCH;
        let circumference_mm = diameter_mm * std::f64::consts::PI;
        let circumference_in = circumference_mm / MM_PER_INCH;
        Self {
            width_mm,
            aspect_percent,
            rim_diameter_in,
            sidewall_mm,
            section_width_in: f64::from(width_mm) / MM_PER_INCH,
            diameter_mm,
            diameter_in,
            circumference_mm,
            circumference_in,
            revs_per_mile: INCHES_PER_MILE / circumference_in,
        }
    }

    /// The metric label for this size, such as `205/55R16`.
    pub fn size_label(&self) -> String {
        format!("{}/{}R{}", self.width_mm, self.aspect_percent, self.rim_diameter_in)
    }
}

/// Parse a metric tire size label such as `205/55R16`.
///
/// A zero width or rim matches the digit pattern but describes no physical
/// tire (zero circumference, infinite revolutions per mile), so it is
/// rejected alongside malformed labels.
pub fn parse_tire_size(text: &str) -> Option<TireSpec> {
    let caps = TIRE_PATTERN.captures(text)?;
    let width: u32 = caps[1].parse().ok()?;
    let aspect: u32 = caps[2].parse().ok()?;
    let rim: u32 = caps[3].parse().ok()?;
    if width == 0 || rim == 0 {
        return None;
    }
    Some(TireSpec::from_dimensions(width, aspect, rim))
}

/// The effect of switching from one tire size to another.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TireComparison {
    pub diameter_delta_mm: f64,
    pub diameter_delta_percent: f64,
    pub revs_per_mile_delta: f64,
    /// True road speed when a speedometer calibrated for the original size
    /// indicates the reference speed with the replacement fitted.
    pub actual_speed_at_indicated: f64,
}

/// Compare a replacement size `b` against the original size `a`.
///
/// With the speedometer calibrated for `a`, an indicated `reference_speed`
/// on size `b` corresponds to a true speed of
/// `reference_speed * diameter_b / diameter_a`.
pub fn compare(a: &TireSpec, b: &TireSpec, reference_speed: f64) -> TireComparison {
    let delta_mm = b.diameter_mm - a.diameter_mm;
    TireComparison {
        diameter_delta_mm: delta_mm,
        diameter_delta_percent: delta_mm / a.diameter_mm * 100.0,
        revs_per_mile_delta: b.revs_per_mile - a.revs_per_mile,
        actual_speed_at_indicated: reference_speed * b.diameter_mm / a.diameter_mm,
    }
}

/// Suggest sizes whose overall diameter is within 3% of the given size.
///
/// The search sweeps a small grid of nearby widths, aspect ratios, and rim
/// diameters within production bounds, skips the original size, and returns
/// at most eight candidates in sweep order.
pub fn suggest_equivalents(original: &TireSpec) -> Vec<TireSpec> {
    let widths = candidate_steps(original.width_mm, &[-10, 0, 10, 20], 155, 355);
    let aspects = candidate_steps(original.aspect_percent, &[-5, 0, 5, 10], 25, 85);
    let rims = candidate_steps(original.rim_diameter_in, &[-1, 0, 1], 13, 24);

    let mut candidates: Vec<TireSpec> = Vec::new();
    for &width in &widths {
        for &aspect in &aspects {
            for &rim in &rims {
                if width == original.width_mm
                    && aspect == original.aspect_percent
                    && rim == original.rim_diameter_in
                {
                    continue;
                }
                let spec = TireSpec::from_dimensions(width, aspect, rim);
                let delta = (spec.diameter_mm - original.diameter_mm).abs() / original.diameter_mm;
                if delta <= 0.03 && !candidates.contains(&spec) {
                    candidates.push(spec);
                }
            }
        }
    }
    candidates.truncate(8);
    debug!(original = %original.size_label(), count = candidates.len(), "equivalent sizes found");
    candidates
}

fn candidate_steps(center: u32, offsets: &[i64], min: u32, max: u32) -> Vec<u32> {
    offsets
        .iter()
        .filter_map(|&off| u32::try_from(i64::from(center) + off).ok())
        .filter(|&v| (min..=max).contains(&v))
        .collect()
}
