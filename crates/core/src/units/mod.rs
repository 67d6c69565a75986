//! Unit conversion engine.
//!
//! Each measurement category is a closed enum with a fixed factor to its
//! base unit (meters, kilograms, liters, ...), so an invalid unit pair is
//! unrepresentable once parsed. Linear categories convert by multiplying
//! into the base and dividing out; temperature is affine and pivots through
//! Celsius. The string-level [`convert`] entry point exists for callers
//! holding raw form-field tokens and fails with
//! [`CalcError::InvalidUnit`](crate::CalcError::InvalidUnit) when a token
//! is not in the category's set.

pub(crate) mod derived;
pub(crate) mod linear;
pub(crate) mod roman;
pub(crate) mod temperature;

pub use derived::{
    density_from, height_from_cm, height_from_feet_inches, mass_from_weight, molarity_from,
    speed_from, weight_from_mass, HeightBreakdown, WeightUnit, STANDARD_GRAVITY,
};
pub use linear::{
    AreaUnit, DensityUnit, LengthUnit, MassUnit, MolarityUnit, SpeedUnit, TimeUnit, VolumeUnit,
};
pub use roman::{from_roman, to_roman};
pub use temperature::{c_to_f, convert_temperature, f_to_c, TemperatureUnit};

use crate::error::{CalcError, CalcResult};

/// Measurement categories supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Volume,
    Area,
    Time,
    Temperature,
    Speed,
    Density,
    Molarity,
}

impl std::str::FromStr for Category {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "length" => Category::Length,
            "mass" => Category::Mass,
            "volume" => Category::Volume,
            "area" => Category::Area,
            "time" => Category::Time,
            "temperature" => Category::Temperature,
            "speed" => Category::Speed,
            "density" => Category::Density,
            "molarity" => Category::Molarity,
            _ => {
                return Err(CalcError::InvalidInput(format!("unknown category: {s}")));
            }
        })
    }
}

/// A unit with a fixed multiplicative factor to its category's base unit.
pub trait LinearUnit: Copy + Sized {
    /// Category name used in error messages.
    const CATEGORY: &'static str;

    /// Factor converting one of this unit into the category base unit.
    fn factor(self) -> f64;

    /// Parse a unit token (the spellings the original forms used,
    /// e.g. `m^2`, `fl-oz`, `mol/L`).
    fn parse(token: &str) -> Option<Self>;
}

pub(crate) fn parse_unit<U: LinearUnit>(token: &str) -> CalcResult<U> {
    U::parse(token).ok_or_else(|| CalcError::InvalidUnit {
        category: U::CATEGORY,
        unit: token.to_string(),
    })
}

/// Convert `value` between two units of the same linear category.
///
/// Pure and idempotent; `convert_linear(convert_linear(x, a, b), b, a)`
/// round-trips within floating-point tolerance.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    let out = value * from.factor() / to.factor();
    if out.is_finite() {
        Ok(out)
    } else {
        Err(CalcError::NonFinite)
    }
}

/// String-level conversion entry point.
///
/// Parses both unit tokens against `category`'s unit set and dispatches to
/// the typed converter.
pub fn convert(value: f64, from: &str, to: &str, category: Category) -> CalcResult<f64> {
    match category {
        Category::Length => convert_linear(value, parse_unit::<LengthUnit>(from)?, parse_unit(to)?),
        Category::Mass => convert_linear(value, parse_unit::<MassUnit>(from)?, parse_unit(to)?),
        Category::Volume => {
            convert_linear(value, parse_unit::<VolumeUnit>(from)?, parse_unit(to)?)
        }
        Category::Area => convert_linear(value, parse_unit::<AreaUnit>(from)?, parse_unit(to)?),
        Category::Time => convert_linear(value, parse_unit::<TimeUnit>(from)?, parse_unit(to)?),
        Category::Temperature => convert_temperature(
            value,
            parse_temperature(from)?,
            parse_temperature(to)?,
        ),
        Category::Speed => convert_linear(value, parse_unit::<SpeedUnit>(from)?, parse_unit(to)?),
        Category::Density => {
            convert_linear(value, parse_unit::<DensityUnit>(from)?, parse_unit(to)?)
        }
        Category::Molarity => {
            convert_linear(value, parse_unit::<MolarityUnit>(from)?, parse_unit(to)?)
        }
    }
}

fn parse_temperature(token: &str) -> CalcResult<TemperatureUnit> {
    TemperatureUnit::parse(token).ok_or_else(|| CalcError::InvalidUnit {
        category: "temperature",
        unit: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn string_level_convert_dispatches_by_category() {
        let m = convert(1.0, "km", "m", Category::Length).unwrap();
        assert_relative_eq!(m, 1000.0);

        let f = convert(100.0, "degC", "degF", Category::Temperature).unwrap();
        assert_relative_eq!(f, 212.0);
    }

    #[test]
    fn unknown_unit_is_rejected_with_category_context() {
        let err = convert(1.0, "furlong", "m", Category::Length).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidUnit {
                category: "length",
                unit: "furlong".to_string()
            }
        );
    }

    #[test]
    fn cross_category_token_is_rejected() {
        // "kg" is not a length unit even though it is a valid mass token.
        assert!(convert(1.0, "kg", "m", Category::Length).is_err());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert_eq!(
            convert(f64::NAN, "m", "ft", Category::Length).unwrap_err(),
            CalcError::NonFinite
        );
        assert_eq!(
            convert(f64::INFINITY, "m", "ft", Category::Length).unwrap_err(),
            CalcError::NonFinite
        );
    }

    #[test]
    fn round_trip_within_tolerance() {
        let x = 123.456;
        let there = convert(x, "mi", "mm", Category::Length).unwrap();
        let back = convert(there, "mm", "mi", Category::Length).unwrap();
        assert_relative_eq!(back, x, max_relative = 1e-9);
    }
}
