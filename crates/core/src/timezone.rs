//! Time zone conversion between IANA zones.
//!
//! Wall-clock times are converted through UTC using a two-pass offset
//! estimate so that a time near a DST transition lands on a consistent
//! interpretation.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// A wall-clock reading with no zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WallTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// A wall-clock reading in a zone, with the resolved offset and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ZonedParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: Weekday,
    /// UTC offset in seconds, east positive.
    pub utc_offset_seconds: i32,
}

/// Look up an IANA zone by name, such as `America/New_York`.
pub fn lookup_zone(name: &str) -> CalcResult<Tz> {
    Tz::from_str(name.trim()).map_err(|_| CalcError::InvalidZone(name.to_string()))
}

fn naive_from_wall(wall: WallTime) -> CalcResult<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(wall.year, wall.month, wall.day)
        .and_then(|d| d.and_hms_opt(wall.hour, wall.minute, wall.second))
        .ok_or_else(|| {
            CalcError::InvalidInput(format!(
                "invalid date-time {}-{:02}-{:02} {:02}:{:02}:{:02}",
                wall.year, wall.month, wall.day, wall.hour, wall.minute, wall.second
            ))
        })
}

/// UTC offset the zone applies at the given UTC instant, in seconds.
fn offset_at(zone: Tz, utc: chrono::NaiveDateTime) -> i32 {
    zone.offset_from_utc_datetime(&utc).fix().local_minus_utc()
}

/// Interpret a wall-clock time in a zone and return the UTC instant.
///
/// The first pass treats the wall reading as UTC to estimate the offset,
/// then re-derives the offset at the estimated instant. During a DST gap or
/// overlap this settles on one of the two plausible instants rather than
/// reporting ambiguity.
pub fn zoned_wall_time_to_utc(wall: WallTime, zone: Tz) -> CalcResult<DateTime<Utc>> {
    let naive = naive_from_wall(wall)?;
    let first_guess = naive - chrono::Duration::seconds(i64::from(offset_at(zone, naive)));
    let offset = offset_at(zone, first_guess);
    let utc = naive - chrono::Duration::seconds(i64::from(offset));
    debug!(zone = %zone, offset, "resolved wall time to UTC");
    Ok(DateTime::from_naive_utc_and_offset(utc, Utc))
}

/// Project a UTC instant into a zone's wall-clock parts.
pub fn utc_to_zoned_parts(instant: DateTime<Utc>, zone: Tz) -> ZonedParts {
    let local = instant.with_timezone(&zone);
    ZonedParts {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        weekday: local.weekday(),
        utc_offset_seconds: local.offset().fix().local_minus_utc(),
    }
}

/// Convert a wall-clock time from one zone into another.
pub fn convert_between_zones(wall: WallTime, from: Tz, to: Tz) -> CalcResult<ZonedParts> {
    let utc = zoned_wall_time_to_utc(wall, from)?;
    Ok(utc_to_zoned_parts(utc, to))
}
