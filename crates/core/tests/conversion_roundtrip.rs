//! Conversion Consistency Suite
//!
//! Checks that conversions compose sensibly: inverting a conversion
//! recovers the input, chaining through an intermediate unit matches the
//! direct conversion, and the derived-quantity helpers agree with manual
//! arithmetic.

use approx::assert_relative_eq;
use calc_kit_core::units::{
    convert, density_from, height_from_cm, height_from_feet_inches, mass_from_weight,
    molarity_from, speed_from, weight_from_mass, Category, DensityUnit, LengthUnit, MassUnit,
    MolarityUnit, SpeedUnit, TimeUnit, VolumeUnit, WeightUnit, STANDARD_GRAVITY,
};

#[test]
fn inverse_conversions_recover_input() {
    let cases = [
        ("m", "ft", Category::Length),
        ("kg", "lb", Category::Mass),
        ("L", "gal", Category::Volume),
        ("m^2", "acre", Category::Area),
        ("h", "s", Category::Time),
        ("m/s", "mph", Category::Speed),
        ("C", "F", Category::Temperature),
        ("kg/m^3", "lb/ft^3", Category::Density),
        ("mol/L", "mmol/L", Category::Molarity),
    ];
    for (from, to, category) in cases {
        let out = convert(123.456, from, to, category).unwrap();
        let back = convert(out, to, from, category).unwrap();
        assert_relative_eq!(back, 123.456, max_relative = 1e-9);
    }
}

#[test]
fn chained_conversion_matches_direct() {
    let via_m = {
        let m = convert(5280.0, "ft", "m", Category::Length).unwrap();
        convert(m, "m", "mi", Category::Length).unwrap()
    };
    let direct = convert(5280.0, "ft", "mi", Category::Length).unwrap();
    assert_relative_eq!(via_m, direct, max_relative = 1e-12);
    assert_relative_eq!(direct, 1.0, max_relative = 1e-12);
}

#[test]
fn temperature_chain_through_kelvin() {
    let via_k = {
        let k = convert(98.6, "F", "K", Category::Temperature).unwrap();
        convert(k, "K", "C", Category::Temperature).unwrap()
    };
    assert_relative_eq!(via_k, 37.0, max_relative = 1e-9);
}

#[test]
fn height_helpers_agree() {
    let from_cm = height_from_cm(180.0).unwrap();
    let back = height_from_feet_inches(f64::from(from_cm.feet), from_cm.inches).unwrap();
    assert_relative_eq!(back.centimeters, 180.0, max_relative = 1e-9);
}

#[test]
fn density_matches_manual_arithmetic() {
    // 500 g in 250 mL is 2 g/mL, or 2000 kg/m^3.
    let rho = density_from(
        500.0,
        MassUnit::Gram,
        250.0,
        VolumeUnit::Milliliter,
        DensityUnit::KilogramPerCubicMeter,
    )
    .unwrap();
    assert_relative_eq!(rho, 2000.0, max_relative = 1e-9);
}

#[test]
fn speed_matches_manual_arithmetic() {
    // 26.2 miles in 4 hours is 6.55 mph.
    let v = speed_from(26.2, LengthUnit::Mile, 4.0, TimeUnit::Hour, SpeedUnit::MilePerHour).unwrap();
    assert_relative_eq!(v, 6.55, max_relative = 1e-9);
}

#[test]
fn molarity_matches_manual_arithmetic() {
    let m = molarity_from(0.5, 2.0, VolumeUnit::Liter, MolarityUnit::MolePerLiter).unwrap();
    assert_relative_eq!(m, 0.25, max_relative = 1e-12);
}

#[test]
fn mass_weight_round_trip_under_other_gravity() {
    // Mars surface gravity.
    let g = 3.721;
    let w = weight_from_mass(10.0, MassUnit::Kilogram, g, WeightUnit::Newton).unwrap();
    assert_relative_eq!(w, 37.21, max_relative = 1e-9);
    let m = mass_from_weight(w, WeightUnit::Newton, g, MassUnit::Kilogram).unwrap();
    assert_relative_eq!(m, 10.0, max_relative = 1e-12);
}

#[test]
fn standard_gravity_weight_of_one_pound() {
    let w = weight_from_mass(1.0, MassUnit::Pound, STANDARD_GRAVITY, WeightUnit::PoundForce).unwrap();
    assert_relative_eq!(w, 1.0, max_relative = 1e-9);
}
