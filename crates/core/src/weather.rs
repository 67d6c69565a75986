//! Weather comfort indices: heat index, wind chill, and dew point, each
//! paired with an NWS-style risk category.

use crate::error::{CalcError, CalcResult};

/// How serious a comfort reading is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Caution,
    Warning,
    Danger,
    Extreme,
}

/// A named comfort band with guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComfortCategory {
    pub label: &'static str,
    pub severity: Severity,
    pub note: &'static str,
}

/// Heat index in °F from air temperature in °F and relative humidity in
/// percent.
///
/// Uses the NWS simplified formula when the average with the raw
/// temperature stays below 80°F, otherwise the Rothfusz regression with the
/// low-humidity and high-humidity corrections. Humidity is clamped to
/// 0..=100.
pub fn heat_index_f(temp_f: f64, humidity_percent: f64) -> CalcResult<f64> {
    if !temp_f.is_finite() || !humidity_percent.is_finite() {
        return Err(CalcError::NonFinite);
    }
    let rh = humidity_percent.clamp(0.0, 100.0);

    let simple = 0.5 * (temp_f + 61.0 + (temp_f - 68.0) * 1.2 + rh * 0.094);
    let averaged = (simple + temp_f) / 2.0;
    if averaged < 80.0 {
        return Ok(averaged);
    }

    let mut hi = -42.379 + 2.04901523 * temp_f + 10.14333127 * rh
        - 0.22475541 * temp_f * rh
        - 0.00683783 * temp_f * temp_f
        - 0.05481717 * rh * rh
        + 0.00122874 * temp_f * temp_f * rh
        + 0.00085282 * temp_f * rh * rh
        - 0.00000199 * temp_f * temp_f * rh * rh;

    if rh < 13.0 && (80.0..=112.0).contains(&temp_f) {
        hi -= (13.0 - rh) / 4.0 * ((17.0 - (temp_f - 95.0).abs()) / 17.0).sqrt();
    } else if rh > 85.0 && (80.0..=87.0).contains(&temp_f) {
        hi += (rh - 85.0) / 10.0 * (87.0 - temp_f) / 5.0;
    }
    Ok(hi)
}

/// A wind chill result. The NWS 2001 formula only holds for temperatures at
/// or below 50°F with wind at or above 3 mph; outside that envelope the
/// reading falls back to the air temperature and is flagged.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindChillReading {
    pub value_f: f64,
    pub within_validity: bool,
}

/// Wind chill in °F from air temperature in °F and wind speed in mph.
pub fn wind_chill(temp_f: f64, wind_mph: f64) -> CalcResult<WindChillReading> {
    if !temp_f.is_finite() || !wind_mph.is_finite() {
        return Err(CalcError::NonFinite);
    }
    if wind_mph < 0.0 {
        return Err(CalcError::InvalidInput("wind speed cannot be negative".to_string()));
    }
    let within_validity = temp_f <= 50.0 && wind_mph >= 3.0;
    let value_f = if within_validity {
        let v16 = wind_mph.powf(0.16);
        35.74 + 0.6215 * temp_f - 35.75 * v16 + 0.4275 * temp_f * v16
    } else {
        temp_f
    };
    Ok(WindChillReading {
        value_f,
        within_validity,
    })
}

/// Dew point in °C from air temperature in °C and relative humidity in
/// percent, using the Magnus formula with Alduchov-Eskridge constants.
/// Humidity is clamped to 0.1..=100 so the logarithm stays defined.
pub fn dew_point_c(temp_c: f64, humidity_percent: f64) -> CalcResult<f64> {
    if !temp_c.is_finite() || !humidity_percent.is_finite() {
        return Err(CalcError::NonFinite);
    }
    let b = 17.62;
    let c = 243.12;
    let rh = humidity_percent.clamp(0.1, 100.0);
    let gamma = (rh / 100.0).ln() + b * temp_c / (c + temp_c);
    Ok(c * gamma / (b - gamma))
}

/// Categorize a heat index reading in °F.
pub fn heat_index_category(hi_f: f64) -> ComfortCategory {
    if hi_f < 80.0 {
        ComfortCategory {
            label: "Comfortable",
            severity: Severity::Safe,
            note: "Minimal heat stress.",
        }
    } else if hi_f < 90.0 {
        ComfortCategory {
            label: "Caution",
            severity: Severity::Caution,
            note: "Fatigue possible with prolonged exposure.",
        }
    } else if hi_f < 103.0 {
        ComfortCategory {
            label: "Extreme Caution",
            severity: Severity::Warning,
            note: "Heat cramps and heat exhaustion possible.",
        }
    } else if hi_f < 125.0 {
        ComfortCategory {
            label: "Danger",
            severity: Severity::Danger,
            note: "Heat cramps/exhaustion likely; heat stroke possible.",
        }
    } else {
        ComfortCategory {
            label: "Extreme Danger",
            severity: Severity::Extreme,
            note: "Heat stroke highly likely.",
        }
    }
}

/// Categorize a wind chill reading in °F.
pub fn wind_chill_category(wc_f: f64) -> ComfortCategory {
    if wc_f > 30.0 {
        ComfortCategory {
            label: "Low Risk",
            severity: Severity::Safe,
            note: "Little risk for most people.",
        }
    } else if wc_f > 0.0 {
        ComfortCategory {
            label: "Caution",
            severity: Severity::Caution,
            note: "Risk of frostbite with prolonged exposure.",
        }
    } else if wc_f > -20.0 {
        ComfortCategory {
            label: "Moderate",
            severity: Severity::Warning,
            note: "Frostbite possible on exposed skin within 30 minutes.",
        }
    } else if wc_f > -50.0 {
        ComfortCategory {
            label: "High",
            severity: Severity::Danger,
            note: "Frostbite possible in 10 to 30 minutes.",
        }
    } else {
        ComfortCategory {
            label: "Extreme",
            severity: Severity::Extreme,
            note: "Frostbite possible in under 10 minutes. Limit outdoor exposure.",
        }
    }
}

/// Categorize a dew point reading in °F.
pub fn dew_point_category(dp_f: f64) -> ComfortCategory {
    if dp_f < 50.0 {
        ComfortCategory {
            label: "Dry/Comfortable",
            severity: Severity::Safe,
            note: "Pleasant for most activities.",
        }
    } else if dp_f < 60.0 {
        ComfortCategory {
            label: "Pleasant",
            severity: Severity::Caution,
            note: "Comfortable for many people.",
        }
    } else if dp_f < 65.0 {
        ComfortCategory {
            label: "Slightly Humid",
            severity: Severity::Warning,
            note: "Noticeable humidity.",
        }
    } else if dp_f < 70.0 {
        ComfortCategory {
            label: "Humid",
            severity: Severity::Warning,
            note: "Sticky; may feel uncomfortable.",
        }
    } else if dp_f < 75.0 {
        ComfortCategory {
            label: "Oppressive",
            severity: Severity::Danger,
            note: "Discomfort likely; hydrate and rest.",
        }
    } else {
        ComfortCategory {
            label: "Miserable",
            severity: Severity::Extreme,
            note: "Very oppressive humidity; limit exertion.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mild_conditions_use_simple_formula() {
        let hi = heat_index_f(79.0, 50.0).unwrap();
        assert!(hi < 80.0);
        assert_eq!(heat_index_category(hi).severity, Severity::Safe);
    }

    #[test]
    fn hot_humid_conditions_use_rothfusz() {
        let hi = heat_index_f(90.0, 60.0).unwrap();
        assert_relative_eq!(hi, 100.0, max_relative = 0.01);
        assert_eq!(heat_index_category(hi).label, "Extreme Caution");
    }

    #[test]
    fn low_humidity_correction_applies() {
        let corrected = heat_index_f(100.0, 10.0).unwrap();
        let at_boundary = heat_index_f(100.0, 13.0).unwrap();
        assert!(corrected < at_boundary);
    }

    #[test]
    fn dangerous_heat_flagged() {
        let hi = heat_index_f(105.0, 40.0).unwrap();
        assert!(heat_index_category(hi).severity >= Severity::Danger);
    }

    #[test]
    fn humidity_is_clamped() {
        assert_relative_eq!(
            heat_index_f(90.0, 150.0).unwrap(),
            heat_index_f(90.0, 100.0).unwrap()
        );
    }

    #[test]
    fn wind_chill_nws_reference_point() {
        // NWS chart: 0°F air with 15 mph wind reads -19°F.
        let reading = wind_chill(0.0, 15.0).unwrap();
        assert!(reading.within_validity);
        assert_relative_eq!(reading.value_f, -19.0, epsilon = 0.5);
    }

    #[test]
    fn wind_chill_outside_envelope_flagged() {
        let warm = wind_chill(60.0, 10.0).unwrap();
        assert!(!warm.within_validity);
        assert_relative_eq!(warm.value_f, 60.0);

        let calm = wind_chill(30.0, 2.0).unwrap();
        assert!(!calm.within_validity);
        assert_relative_eq!(calm.value_f, 30.0);
    }

    #[test]
    fn wind_chill_rejects_negative_wind() {
        assert!(wind_chill(30.0, -5.0).is_err());
    }

    #[test]
    fn dew_point_reference() {
        let dp = dew_point_c(25.0, 50.0).unwrap();
        assert_relative_eq!(dp, 13.86, max_relative = 0.01);
    }

    #[test]
    fn saturated_air_dew_point_equals_temperature() {
        let dp = dew_point_c(20.0, 100.0).unwrap();
        assert_relative_eq!(dp, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn near_zero_humidity_clamped() {
        assert!(dew_point_c(20.0, 0.0).unwrap().is_finite());
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(heat_index_category(79.9).label, "Comfortable");
        assert_eq!(heat_index_category(125.0).label, "Extreme Danger");
        assert_eq!(wind_chill_category(31.0).severity, Severity::Safe);
        assert_eq!(wind_chill_category(-60.0).severity, Severity::Extreme);
        assert_eq!(dew_point_category(49.0).label, "Dry/Comfortable");
        assert_eq!(dew_point_category(76.0).label, "Miserable");
    }
}
