use crate::error::{DashboardError, Result};
use crate::utils::constants::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Offset forms outside RFC 3339, such as `2024-01-05 10:00:00 +0000`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%dT%H:%M:%S%.f %z"];

/// Parse a timestamp as written by sensor exports.
///
/// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS[.f] +hhmm` (offsets are
/// normalised to UTC), the common `YYYY-MM-DD HH:MM[:SS[.f]]` forms with
/// either a space or `T` separator, `YYYY/MM/DD HH:MM:SS`, and a bare
/// `YYYY-MM-DD` which is read as midnight.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.naive_utc());
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Parse a date-range bound. Date-only values snap to the start of the day,
/// or to its last instant when `end_of_day` is set.
pub fn parse_range_bound(value: &str, end_of_day: bool) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(if end_of_day {
            end_of(date)
        } else {
            date.and_time(NaiveTime::MIN)
        });
    }

    parse_timestamp(trimmed).map_err(|_| {
        DashboardError::InvalidFormat(format!("Invalid date range bound: '{}'", value))
    })
}

/// Last representable instant of a calendar day.
pub fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(last_instant())
}

/// 23:59:59.999999999, the latest time `NaiveTime` can hold without a leap
/// second. The components are in range, so construction cannot fail.
fn last_instant() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("23:59:59.999999999 is a valid time of day")
}
