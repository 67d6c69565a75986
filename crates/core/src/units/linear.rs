//! Linear unit sets with factors to each category's base unit.
//!
//! Base units: meter, kilogram, liter, square meter, second, meter/second,
//! kg/m³, mol/L. Factors for the imperial units are the exact legal
//! definitions (1 in = 25.4 mm, 1 lb = 453.59237 g).

use super::LinearUnit;

/// Length units (base: meter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LinearUnit for LengthUnit {
    const CATEGORY: &'static str = "length";

    fn factor(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "mm" => Some(LengthUnit::Millimeter),
            "cm" => Some(LengthUnit::Centimeter),
            "m" => Some(LengthUnit::Meter),
            "km" => Some(LengthUnit::Kilometer),
            "in" => Some(LengthUnit::Inch),
            "ft" => Some(LengthUnit::Foot),
            "yd" => Some(LengthUnit::Yard),
            "mi" => Some(LengthUnit::Mile),
            _ => None,
        }
    }
}

/// Mass units (base: kilogram). "ton" is the US short ton (2000 lb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MassUnit {
    Milligram,
    Gram,
    Kilogram,
    Pound,
    Ounce,
    Ton,
}

impl LinearUnit for MassUnit {
    const CATEGORY: &'static str = "mass";

    fn factor(self) -> f64 {
        match self {
            MassUnit::Milligram => 1e-6,
            MassUnit::Gram => 1e-3,
            MassUnit::Kilogram => 1.0,
            MassUnit::Pound => 0.45359237,
            MassUnit::Ounce => 0.028349523125,
            MassUnit::Ton => 907.18474,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "mg" => Some(MassUnit::Milligram),
            "g" => Some(MassUnit::Gram),
            "kg" => Some(MassUnit::Kilogram),
            "lb" | "lbs" => Some(MassUnit::Pound),
            "oz" => Some(MassUnit::Ounce),
            "ton" => Some(MassUnit::Ton),
            _ => None,
        }
    }
}

/// Volume units (base: liter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VolumeUnit {
    Microliter,
    Milliliter,
    Liter,
    CubicMillimeter,
    CubicCentimeter,
    CubicMeter,
    CubicInch,
    CubicFoot,
    Gallon,
}

impl LinearUnit for VolumeUnit {
    const CATEGORY: &'static str = "volume";

    fn factor(self) -> f64 {
        match self {
            VolumeUnit::Microliter => 1e-6,
            VolumeUnit::Milliliter => 1e-3,
            VolumeUnit::Liter => 1.0,
            VolumeUnit::CubicMillimeter => 1e-6,
            VolumeUnit::CubicCentimeter => 1e-3,
            VolumeUnit::CubicMeter => 1e3,
            VolumeUnit::CubicInch => 0.016387064,
            VolumeUnit::CubicFoot => 28.316846592,
            VolumeUnit::Gallon => 3.785411784,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "uL" | "ul" => Some(VolumeUnit::Microliter),
            "mL" | "ml" => Some(VolumeUnit::Milliliter),
            "L" | "l" => Some(VolumeUnit::Liter),
            "mm^3" => Some(VolumeUnit::CubicMillimeter),
            "cm^3" => Some(VolumeUnit::CubicCentimeter),
            "m^3" => Some(VolumeUnit::CubicMeter),
            "in^3" => Some(VolumeUnit::CubicInch),
            "ft^3" => Some(VolumeUnit::CubicFoot),
            "gal" => Some(VolumeUnit::Gallon),
            _ => None,
        }
    }
}

/// Area units (base: square meter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AreaUnit {
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    SquareKilometer,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
}

impl LinearUnit for AreaUnit {
    const CATEGORY: &'static str = "area";

    fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1e6,
            AreaUnit::SquareInch => 0.00064516,
            AreaUnit::SquareFoot => 0.09290304,
            AreaUnit::SquareYard => 0.83612736,
            AreaUnit::Acre => 4046.8564224,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "mm^2" => Some(AreaUnit::SquareMillimeter),
            "cm^2" => Some(AreaUnit::SquareCentimeter),
            "m^2" => Some(AreaUnit::SquareMeter),
            "km^2" => Some(AreaUnit::SquareKilometer),
            "in^2" => Some(AreaUnit::SquareInch),
            "ft^2" => Some(AreaUnit::SquareFoot),
            "yd^2" => Some(AreaUnit::SquareYard),
            "acre" => Some(AreaUnit::Acre),
            _ => None,
        }
    }
}

/// Time units (base: second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl LinearUnit for TimeUnit {
    const CATEGORY: &'static str = "time";

    fn factor(self) -> f64 {
        match self {
            TimeUnit::Nanosecond => 1e-9,
            TimeUnit::Microsecond => 1e-6,
            TimeUnit::Millisecond => 1e-3,
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86400.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "ns" => Some(TimeUnit::Nanosecond),
            "us" => Some(TimeUnit::Microsecond),
            "ms" => Some(TimeUnit::Millisecond),
            "s" => Some(TimeUnit::Second),
            "min" => Some(TimeUnit::Minute),
            "h" => Some(TimeUnit::Hour),
            "day" => Some(TimeUnit::Day),
            _ => None,
        }
    }
}

/// Speed units (base: meter/second). The knot is 1852 m per hour exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    FootPerSecond,
    Knot,
}

impl LinearUnit for SpeedUnit {
    const CATEGORY: &'static str = "speed";

    fn factor(self) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 1.0 / 3.6,
            SpeedUnit::MilePerHour => 0.44704,
            SpeedUnit::FootPerSecond => 0.3048,
            SpeedUnit::Knot => 1852.0 / 3600.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "m/s" => Some(SpeedUnit::MeterPerSecond),
            "km/h" => Some(SpeedUnit::KilometerPerHour),
            "mph" => Some(SpeedUnit::MilePerHour),
            "ft/s" => Some(SpeedUnit::FootPerSecond),
            "kn" => Some(SpeedUnit::Knot),
            _ => None,
        }
    }
}

/// Density units (base: kg/m³). g/cm³ and g/mL are the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    GramPerMilliliter,
    PoundPerCubicFoot,
}

impl LinearUnit for DensityUnit {
    const CATEGORY: &'static str = "density";

    fn factor(self) -> f64 {
        match self {
            DensityUnit::KilogramPerCubicMeter => 1.0,
            DensityUnit::GramPerCubicCentimeter | DensityUnit::GramPerMilliliter => 1000.0,
            // 0.45359237 kg / 0.028316846592 m^3
            DensityUnit::PoundPerCubicFoot => 16.018463373960142,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "kg/m^3" => Some(DensityUnit::KilogramPerCubicMeter),
            "g/cm^3" => Some(DensityUnit::GramPerCubicCentimeter),
            "g/mL" | "g/ml" => Some(DensityUnit::GramPerMilliliter),
            "lb/ft^3" => Some(DensityUnit::PoundPerCubicFoot),
            _ => None,
        }
    }
}

/// Molarity units (base: mol/L). "M" is the conventional synonym for mol/L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MolarityUnit {
    MolePerLiter,
    MillimolePerLiter,
}

impl LinearUnit for MolarityUnit {
    const CATEGORY: &'static str = "molarity";

    fn factor(self) -> f64 {
        match self {
            MolarityUnit::MolePerLiter => 1.0,
            MolarityUnit::MillimolePerLiter => 1e-3,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "mol/L" | "M" => Some(MolarityUnit::MolePerLiter),
            "mmol/L" => Some(MolarityUnit::MillimolePerLiter),
            _ => None,
        }
    }
}
