//! Temperature conversion.
//!
//! Temperature scales are affine, not linear, so they do not fit the
//! factor-to-base scheme. Every conversion pivots through Celsius:
//! F→C is `(f - 32) * 5/9`, K→C is `k - 273.15`, and the inverses are
//! symmetric.

use crate::error::{CalcError, CalcResult};

/// Temperature scales accepted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse a scale token. Accepts the `degC`/`degF` spellings the
    /// original forms used alongside the plain letters.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "C" | "degC" | "°C" => Some(TemperatureUnit::Celsius),
            "F" | "degF" | "°F" => Some(TemperatureUnit::Fahrenheit),
            "K" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert a temperature reading between scales.
pub fn convert_temperature(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    Ok(to.from_celsius(from.to_celsius(value)))
}

/// Fahrenheit to Celsius.
pub fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Celsius to Fahrenheit.
pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}
