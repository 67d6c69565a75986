//! Resistor color code encoding and decoding.
//!
//! Covers 4-band (two digits) and 5-band (three digits) codes. Decoding is
//! permissive about leading black digit bands; encoding never emits one
//! except for values below one ohm where the code forces it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// The twelve colors that can appear on a resistor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
}

impl BandColor {
    /// Significant-digit value, if this color can be a digit band.
    pub fn digit(self) -> Option<u32> {
        match self {
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Gray => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold | BandColor::Silver => None,
        }
    }

    /// Multiplier value, if this color can be a multiplier band.
    pub fn multiplier(self) -> Option<f64> {
        match self {
            BandColor::Black => Some(1.0),
            BandColor::Brown => Some(10.0),
            BandColor::Red => Some(100.0),
            BandColor::Orange => Some(1e3),
            BandColor::Yellow => Some(1e4),
            BandColor::Green => Some(1e5),
            BandColor::Blue => Some(1e6),
            BandColor::Violet => Some(1e7),
            BandColor::Gray => Some(1e8),
            BandColor::White => Some(1e9),
            BandColor::Gold => Some(0.1),
            BandColor::Silver => Some(0.01),
        }
    }

    /// Tolerance as a fraction, if this color can be a tolerance band.
    pub fn tolerance(self) -> Option<f64> {
        match self {
            BandColor::Brown => Some(0.01),
            BandColor::Red => Some(0.02),
            BandColor::Green => Some(0.005),
            BandColor::Blue => Some(0.0025),
            BandColor::Violet => Some(0.001),
            BandColor::Gray => Some(0.0005),
            BandColor::Gold => Some(0.05),
            BandColor::Silver => Some(0.10),
            _ => None,
        }
    }

    fn from_digit(d: u32) -> Option<Self> {
        Some(match d {
            0 => BandColor::Black,
            1 => BandColor::Brown,
            2 => BandColor::Red,
            3 => BandColor::Orange,
            4 => BandColor::Yellow,
            5 => BandColor::Green,
            6 => BandColor::Blue,
            7 => BandColor::Violet,
            8 => BandColor::Gray,
            9 => BandColor::White,
            _ => return None,
        })
    }

    fn from_multiplier(factor: f64) -> Option<Self> {
        const ALL: [BandColor; 12] = [
            BandColor::Black,
            BandColor::Brown,
            BandColor::Red,
            BandColor::Orange,
            BandColor::Yellow,
            BandColor::Green,
            BandColor::Blue,
            BandColor::Violet,
            BandColor::Gray,
            BandColor::White,
            BandColor::Gold,
            BandColor::Silver,
        ];
        ALL.into_iter().find(|c| {
            let m = c.multiplier().unwrap_or(f64::NAN);
            (m - factor).abs() <= m * 1e-12
        })
    }
}

/// How many bands the code uses. Four-band codes carry two significant
/// digits, five-band codes carry three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BandCount {
    Four,
    Five,
}

impl BandCount {
    fn digit_count(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five => 3,
        }
    }
}

/// The colored bands that encode a resistance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResistorBands {
    pub digits: Vec<BandColor>,
    pub multiplier: BandColor,
    pub tolerance: BandColor,
}

/// A resistance decoded from bands.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecodedResistor {
    pub ohms: f64,
    pub tolerance_fraction: f64,
}

/// Encode a resistance as color bands.
///
/// The mantissa is normalized so the significant digits fit the band count,
/// then the remaining power of ten becomes the multiplier band. Values whose
/// multiplier has no color (outside 1e-2..=1e9 after normalization) are out
/// of range.
pub fn value_to_bands(ohms: f64, bands: BandCount) -> CalcResult<ResistorBands> {
    if !ohms.is_finite() {
        return Err(CalcError::NonFinite);
    }
    if ohms <= 0.0 {
        return Err(CalcError::OutOfRange(format!(
            "resistance must be positive, got {ohms}"
        )));
    }
    let digit_count = bands.digit_count();
    let upper = if digit_count == 3 { 1000.0 } else { 100.0 };
    let lower = upper / 10.0;

    let mut norm = ohms;
    let mut exp: i32 = 0;
    while norm >= upper && exp < 12 {
        norm /= 10.0;
        exp += 1;
    }
    while norm < lower && exp > -2 {
        norm *= 10.0;
        exp -= 1;
    }

    let mut rounded = norm.round() as u64;
    // Rounding 99.6 up to 100 overflows the digit budget; carry into the
    // multiplier so the magnitude is preserved.
    if rounded >= upper as u64 {
        rounded /= 10;
        exp += 1;
    }

    let factor = 10f64.powi(exp);
    let multiplier = BandColor::from_multiplier(factor).ok_or_else(|| {
        CalcError::OutOfRange(format!("{ohms} ohms cannot be encoded with {digit_count} digit bands"))
    })?;

    let mut digit_string = rounded.to_string();
    while digit_string.len() < digit_count {
        digit_string.push('0');
    }

    let mut digits = Vec::with_capacity(digit_count);
    for ch in digit_string.chars() {
        let d = ch.to_digit(10).ok_or_else(|| CalcError::OutOfRange(format!("{ohms}")))?;
        digits.push(BandColor::from_digit(d).ok_or_else(|| CalcError::OutOfRange(format!("{ohms}")))?);
    }

    debug!(ohms, ?digits, ?multiplier, "encoded resistance");
    Ok(ResistorBands {
        digits,
        multiplier,
        tolerance: BandColor::Gold,
    })
}

/// Decode digit and multiplier bands into a resistance.
///
/// A missing tolerance band means the historic 20% default.
pub fn bands_to_value(
    digits: &[BandColor],
    multiplier: BandColor,
    tolerance: Option<BandColor>,
) -> CalcResult<DecodedResistor> {
    if digits.len() < 2 || digits.len() > 3 {
        return Err(CalcError::InvalidInput(format!(
            "expected 2 or 3 digit bands, got {}",
            digits.len()
        )));
    }
    let mut mantissa: f64 = 0.0;
    for &band in digits {
        let d = band
            .digit()
            .ok_or_else(|| CalcError::InvalidInput(format!("{band:?} is not a digit band")))?;
        mantissa = mantissa * 10.0 + f64::from(d);
    }
    let factor = multiplier
        .multiplier()
        .ok_or_else(|| CalcError::InvalidInput(format!("{multiplier:?} is not a multiplier band")))?;
    let tolerance_fraction = match tolerance {
        Some(band) => band
            .tolerance()
            .ok_or_else(|| CalcError::InvalidInput(format!("{band:?} is not a tolerance band")))?,
        None => 0.20,
    };
    Ok(DecodedResistor {
        ohms: mantissa * factor,
        tolerance_fraction,
    })
}

static RESISTANCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*([kmgru]?)\s*(\d*)\s*(?:ohms?|Ω)?\s*$").unwrap()
});

/// Parse a resistance written the way component markings do, such as
/// `4.7k`, `4k7`, `10M`, `0.5R`, or `470`.
pub fn parse_resistance(text: &str) -> CalcResult<f64> {
    let caps = RESISTANCE_PATTERN
        .captures(text)
        .ok_or_else(|| CalcError::InvalidSyntax(format!("unrecognized resistance: {text}")))?;

    let whole: f64 = caps[1]
        .parse()
        .map_err(|_| CalcError::InvalidSyntax(format!("unrecognized resistance: {text}")))?;
    let suffix = caps[2].to_ascii_lowercase();
    let trailing = &caps[3];

    let scale = match suffix.as_str() {
        "" | "r" => 1.0,
        "k" => 1e3,
        "m" => 1e6,
        "g" => 1e9,
        "u" => 1e-6,
        _ => unreachable!(),
    };

    // Notation like 4k7 puts the fractional digits after the prefix letter.
    let value = if trailing.is_empty() {
        whole
    } else {
        if whole.fract() != 0.0 || suffix.is_empty() {
            return Err(CalcError::InvalidSyntax(format!("unrecognized resistance: {text}")));
        }
        let frac: f64 = trailing
            .parse()
            .map_err(|_| CalcError::InvalidSyntax(format!("unrecognized resistance: {text}")))?;
        whole + frac / 10f64.powi(trailing.len() as i32)
    };

    Ok(value * scale)
}

/// Format a resistance with an engineering prefix, such as `4.7 kΩ`.
pub fn format_engineering(ohms: f64) -> String {
    const LADDER: [(f64, f64, &str); 5] = [
        (1e9, 1e9, "GΩ"),
        (1e6, 1e6, "MΩ"),
        (1e3, 1e3, "kΩ"),
        (1e-3, 1.0, "Ω"),
        (0.0, 1e-6, "µΩ"),
    ];
    let magnitude = ohms.abs();
    for (threshold, scale, suffix) in LADDER {
        if magnitude >= threshold && magnitude > 0.0 {
            let scaled = ohms / scale;
            return if (scaled - scaled.round()).abs() < 1e-9 {
                format!("{} {suffix}", scaled.round())
            } else {
                format!("{scaled:.2} {suffix}")
            };
        }
    }
    format!("{ohms} Ω")
}
