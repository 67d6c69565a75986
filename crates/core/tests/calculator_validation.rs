//! Cross-Module Validation Test Suite
//!
//! End-to-end checks of the calculator modules against published reference
//! values and real-world figures.
//!
//! # References Validated
//!
//! - **NIST SP 811**: unit conversion factors
//! - **IEC 60062**: resistor color code marking
//! - **Tire and Rim Association**: metric tire geometry
//! - **IUPAC 2009**: standard atomic weights
//! - **USGA/R&A World Handicap System (2020)**: handicap index tables
//! - **NWS**: heat index (Rothfusz 1990) and wind chill (2001) charts
//! - **Alduchov & Eskridge (1996)**: Magnus dew point constants
//!
//! Run tests with: cargo test --test `calculator_validation`

use approx::assert_relative_eq;
use calc_kit_core::chem::molecular_weight;
use calc_kit_core::golf::{handicap_index, Round};
use calc_kit_core::resistor::{bands_to_value, value_to_bands, BandColor, BandCount};
use calc_kit_core::timezone::{convert_between_zones, lookup_zone, WallTime};
use calc_kit_core::tire::parse_tire_size;
use calc_kit_core::units::{convert, Category};
use calc_kit_core::weather::{
    dew_point_c, heat_index_category, heat_index_f, wind_chill, Severity,
};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 1: Unit conversion against NIST factors
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn nist_length_and_mass_factors() {
    assert_relative_eq!(convert(1.0, "mi", "km", Category::Length).unwrap(), 1.609344, max_relative = 1e-12);
    assert_relative_eq!(convert(1.0, "lb", "g", Category::Mass).unwrap(), 453.59237, max_relative = 1e-12);
    assert_relative_eq!(convert(1.0, "gal", "L", Category::Volume).unwrap(), 3.785411784, max_relative = 1e-12);
    assert_relative_eq!(convert(100.0, "C", "F", Category::Temperature).unwrap(), 212.0, max_relative = 1e-12);
}

#[test]
fn cross_category_pairs_rejected() {
    assert!(convert(1.0, "kg", "m", Category::Mass).is_err());
    assert!("nonsense".parse::<Category>().is_err());
    assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 2: Resistor color code round trip (IEC 60062)
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn standard_e12_values_round_trip() {
    for ohms in [10.0, 22.0, 47.0, 100.0, 470.0, 1000.0, 4700.0, 10_000.0, 220_000.0, 1.0e6] {
        let bands = value_to_bands(ohms, BandCount::Four).unwrap();
        let decoded = bands_to_value(&bands.digits, bands.multiplier, Some(bands.tolerance)).unwrap();
        assert_relative_eq!(decoded.ohms, ohms, max_relative = 1e-9);
    }
}

#[test]
fn yellow_violet_red_is_4700() {
    let bands = value_to_bands(4700.0, BandCount::Four).unwrap();
    assert_eq!(bands.digits, vec![BandColor::Yellow, BandColor::Violet]);
    assert_eq!(bands.multiplier, BandColor::Red);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 3: Tire geometry for a common fitment
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn common_fitment_geometry() {
    let spec = parse_tire_size("205/55R16").unwrap();
    assert_relative_eq!(spec.diameter_in, 24.88, max_relative = 1e-3);
    assert_relative_eq!(spec.revs_per_mile, 810.7, max_relative = 1e-3);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 4: Molecular weights against IUPAC atomic weights
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn reference_molecular_weights() {
    assert_relative_eq!(molecular_weight("H2O").unwrap(), 18.015, max_relative = 1e-4);
    assert_relative_eq!(molecular_weight("NaCl").unwrap(), 58.443, max_relative = 1e-4);
    assert_relative_eq!(molecular_weight("C6H12O6").unwrap(), 180.156, max_relative = 1e-4);
    assert_relative_eq!(molecular_weight("Fe2(SO4)3").unwrap(), 399.878, max_relative = 1e-4);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 5: World Handicap System tables
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn whs_three_round_minimum() {
    let rounds = [
        Round { score: 85.0, rating: 72.0, slope: 130.0 },
        Round { score: 90.0, rating: 72.0, slope: 130.0 },
        Round { score: 88.0, rating: 71.5, slope: 125.0 },
    ];
    // Lowest differential 11.3 with the -2.0 adjustment for 3 rounds.
    assert_relative_eq!(handicap_index(&rounds).unwrap(), 9.3);
}

#[test]
fn whs_mixed_courses() {
    let rounds = [
        Round { score: 88.0, rating: 71.2, slope: 125.0 },
        Round { score: 90.0, rating: 72.0, slope: 113.0 },
        Round { score: 85.0, rating: 70.0, slope: 120.0 },
    ];
    // Lowest differential is (85-70)*113/120 = 14.125; minus 2.0, rounded.
    assert_relative_eq!(handicap_index(&rounds).unwrap(), 12.1);
}

#[test]
fn whs_full_set_uses_best_eight_of_twenty() {
    let rounds: Vec<Round> = (0..20)
        .map(|i| Round {
            score: 82.0 + f64::from(i),
            rating: 72.0,
            slope: 113.0,
        })
        .collect();
    assert_relative_eq!(handicap_index(&rounds).unwrap(), 13.5);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 6: Time zone conversion across a DST boundary
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn new_york_offset_changes_with_season() {
    let ny = lookup_zone("America/New_York").unwrap();
    let utc = lookup_zone("UTC").unwrap();
    let noon = |month| WallTime {
        year: 2024,
        month,
        day: 15,
        hour: 12,
        minute: 0,
        second: 0,
    };
    assert_eq!(convert_between_zones(noon(1), ny, utc).unwrap().hour, 17);
    assert_eq!(convert_between_zones(noon(7), ny, utc).unwrap().hour, 16);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 7: Weather indices against NWS charts
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn mild_day_stays_comfortable() {
    let hi = heat_index_f(79.0, 50.0).unwrap();
    assert_eq!(heat_index_category(hi).label, "Comfortable");
}

#[test]
fn hot_dry_day_is_dangerous() {
    let hi = heat_index_f(105.0, 40.0).unwrap();
    assert!(heat_index_category(hi).severity >= Severity::Danger);
}

#[test]
fn warm_weather_wind_chill_not_applicable() {
    let reading = wind_chill(60.0, 10.0).unwrap();
    assert!(!reading.within_validity);
    assert_relative_eq!(reading.value_f, 60.0);
}

#[test]
fn nws_wind_chill_chart_values() {
    // Chart rows: (air °F, wind mph, chill °F).
    for (temp, wind, expected) in [(30.0, 10.0, 21.0), (0.0, 15.0, -19.0), (-15.0, 25.0, -44.0)] {
        let reading = wind_chill(temp, wind).unwrap();
        assert!(reading.within_validity);
        assert_relative_eq!(reading.value_f, expected, epsilon = 0.6);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 8: Statelessness — repeated calls are bit-identical
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn repeated_calls_yield_identical_results() {
    assert_eq!(
        convert(123.456, "mi", "km", Category::Length).unwrap(),
        convert(123.456, "mi", "km", Category::Length).unwrap()
    );
    assert_eq!(
        value_to_bands(4700.0, BandCount::Four).unwrap(),
        value_to_bands(4700.0, BandCount::Four).unwrap()
    );
    assert_eq!(parse_tire_size("205/55R16"), parse_tire_size("205/55R16"));
    assert_eq!(
        molecular_weight("Fe2(SO4)3").unwrap(),
        molecular_weight("Fe2(SO4)3").unwrap()
    );
    let rounds = [
        Round { score: 85.0, rating: 72.0, slope: 130.0 },
        Round { score: 90.0, rating: 72.0, slope: 130.0 },
        Round { score: 88.0, rating: 71.5, slope: 125.0 },
    ];
    assert_eq!(handicap_index(&rounds), handicap_index(&rounds));
    let wall = WallTime { year: 2024, month: 3, day: 10, hour: 2, minute: 30, second: 0 };
    let ny = lookup_zone("America/New_York").unwrap();
    let utc = lookup_zone("UTC").unwrap();
    assert_eq!(
        convert_between_zones(wall, ny, utc).unwrap(),
        convert_between_zones(wall, ny, utc).unwrap()
    );
    assert_eq!(
        heat_index_f(90.0, 60.0).unwrap(),
        heat_index_f(90.0, 60.0).unwrap()
    );
    assert_eq!(wind_chill(0.0, 15.0).unwrap(), wind_chill(0.0, 15.0).unwrap());
}

#[test]
fn magnus_dew_point_reference() {
    assert_relative_eq!(dew_point_c(25.0, 50.0).unwrap(), 13.86, max_relative = 0.01);
}
