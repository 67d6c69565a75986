//! Calculation Toolkit Core Library
//!
//! Pure-function calculators behind a set of everyday conversion and
//! reference tools: unit conversion across nine quantity categories,
//! resistor color codes, tire size geometry, chemical formula weights,
//! golf handicap indices, time zone conversion, and weather comfort
//! indices.
//!
//! Every operation is a plain function returning a [`CalcResult`]; nothing
//! here does I/O or holds state.

pub mod chem;
pub mod error;
pub mod golf;
pub mod resistor;
pub mod timezone;
pub mod tire;
pub mod units;
pub mod weather;

pub use error::{CalcError, CalcResult};

pub use units::{convert, convert_linear, convert_temperature, Category, LinearUnit};

pub use chem::{molecular_weight, parse_formula};
pub use golf::{handicap_index, Round};
pub use resistor::{bands_to_value, parse_resistance, value_to_bands, BandColor, BandCount};
pub use timezone::{convert_between_zones, lookup_zone, WallTime, ZonedParts};
pub use tire::{parse_tire_size, suggest_equivalents, TireSpec};
pub use weather::{dew_point_c, heat_index_f, wind_chill, ComfortCategory, Severity};
