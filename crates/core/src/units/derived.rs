//! Derived-quantity helpers built on the base conversion engine.
//!
//! These back the height, density, speed, molarity, and mass/weight forms:
//! each takes raw values plus their units, normalizes into SI, performs the
//! one-line physics, and converts into the requested output unit.

use super::{convert_linear, DensityUnit, LengthUnit, MassUnit, MolarityUnit, SpeedUnit, TimeUnit, VolumeUnit};
use crate::error::{CalcError, CalcResult};

/// Standard gravity in m/s², the default for mass/weight conversions.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// One pound-force in newtons.
const NEWTONS_PER_LBF: f64 = 4.4482216152605;

/// A human height expressed in all the forms the height calculator shows.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeightBreakdown {
    pub meters: f64,
    pub centimeters: f64,
    /// Whole feet.
    pub feet: u32,
    /// Remaining inches, fractional.
    pub inches: f64,
}

/// Break a height in centimeters into meters and feet/inches.
pub fn height_from_cm(cm: f64) -> CalcResult<HeightBreakdown> {
    if !cm.is_finite() {
        return Err(CalcError::NonFinite);
    }
    if cm < 0.0 {
        return Err(CalcError::InvalidInput("height cannot be negative".to_string()));
    }
    let total_inches = cm / 2.54;
    let feet = (total_inches / 12.0).floor();
    Ok(HeightBreakdown {
        meters: cm / 100.0,
        centimeters: cm,
        feet: feet as u32,
        inches: total_inches - feet * 12.0,
    })
}

/// Break a height given as feet plus inches into metric forms.
pub fn height_from_feet_inches(feet: f64, inches: f64) -> CalcResult<HeightBreakdown> {
    if !feet.is_finite() || !inches.is_finite() {
        return Err(CalcError::NonFinite);
    }
    if feet < 0.0 || inches < 0.0 {
        return Err(CalcError::InvalidInput("height cannot be negative".to_string()));
    }
    height_from_cm((feet * 12.0 + inches) * 2.54)
}

/// Density from a mass and a volume, in the requested output unit.
pub fn density_from(
    mass: f64,
    mass_unit: MassUnit,
    volume: f64,
    volume_unit: VolumeUnit,
    out: DensityUnit,
) -> CalcResult<f64> {
    let mass_kg = convert_linear(mass, mass_unit, MassUnit::Kilogram)?;
    let volume_m3 = convert_linear(volume, volume_unit, VolumeUnit::CubicMeter)?;
    if volume_m3 == 0.0 {
        return Err(CalcError::InvalidInput("volume cannot be zero".to_string()));
    }
    convert_linear(mass_kg / volume_m3, DensityUnit::KilogramPerCubicMeter, out)
}

/// Average speed from a distance and a time, in the requested output unit.
pub fn speed_from(
    distance: f64,
    distance_unit: LengthUnit,
    time: f64,
    time_unit: TimeUnit,
    out: SpeedUnit,
) -> CalcResult<f64> {
    let meters = convert_linear(distance, distance_unit, LengthUnit::Meter)?;
    let seconds = convert_linear(time, time_unit, TimeUnit::Second)?;
    if seconds == 0.0 {
        return Err(CalcError::InvalidInput("time cannot be zero".to_string()));
    }
    convert_linear(meters / seconds, SpeedUnit::MeterPerSecond, out)
}

/// Molar concentration from moles of solute and solution volume.
pub fn molarity_from(
    moles: f64,
    volume: f64,
    volume_unit: VolumeUnit,
    out: MolarityUnit,
) -> CalcResult<f64> {
    let liters = convert_linear(volume, volume_unit, VolumeUnit::Liter)?;
    if liters == 0.0 {
        return Err(CalcError::InvalidInput("volume cannot be zero".to_string()));
    }
    convert_linear(moles / liters, MolarityUnit::MolePerLiter, out)
}

/// Force units for the mass/weight pair of calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WeightUnit {
    Newton,
    PoundForce,
}

impl WeightUnit {
    fn to_newtons(self, value: f64) -> f64 {
        match self {
            WeightUnit::Newton => value,
            WeightUnit::PoundForce => value * NEWTONS_PER_LBF,
        }
    }

    fn from_newtons(self, newtons: f64) -> f64 {
        match self {
            WeightUnit::Newton => newtons,
            WeightUnit::PoundForce => newtons / NEWTONS_PER_LBF,
        }
    }
}

/// Mass implied by a weight under the given gravity (`m = W / g`).
pub fn mass_from_weight(
    weight: f64,
    weight_unit: WeightUnit,
    gravity: f64,
    out: MassUnit,
) -> CalcResult<f64> {
    if !weight.is_finite() || !gravity.is_finite() {
        return Err(CalcError::NonFinite);
    }
    if gravity == 0.0 {
        return Err(CalcError::InvalidInput("gravity cannot be zero".to_string()));
    }
    let mass_kg = weight_unit.to_newtons(weight) / gravity;
    convert_linear(mass_kg, MassUnit::Kilogram, out)
}

/// Weight of a mass under the given gravity (`W = m * g`).
pub fn weight_from_mass(
    mass: f64,
    mass_unit: MassUnit,
    gravity: f64,
    out: WeightUnit,
) -> CalcResult<f64> {
    if !gravity.is_finite() {
        return Err(CalcError::NonFinite);
    }
    let mass_kg = convert_linear(mass, mass_unit, MassUnit::Kilogram)?;
    Ok(out.from_newtons(mass_kg * gravity))
}
