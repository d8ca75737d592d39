//! Normalisation of heterogeneous upstream date/time strings.
//!
//! The upstream sources disagree on how they write time: some send full timestamps with an
//! explicit offset, some send local date-times without one, and several send partial dates
//! (a bare year, a year-month, or a plain date). The canonical model only carries absolute
//! instants, so every partial date must be expanded to a boundary of the range it denotes.
//!
//! Which boundary is correct depends on the field being mapped: an onset or a period start
//! expands to the *start* of the range, an abatement or period end expands to the *end*.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Expansion policy for partial dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Expand to the first instant of the denoted range.
    Start,
    /// Expand to the last whole second of the denoted range.
    End,
}

/// Error returned when a raw date string matches none of the accepted patterns.
///
/// Callers decide whether this is fatal to the enclosing mapping; the mappers in
/// `overblik-core` tolerate it and simply omit the field.
#[derive(Debug, thiserror::Error)]
#[error("invalid date format: '{0}'")]
pub struct InvalidDateFormat(pub String);

/// Parses a raw upstream date/time string into an absolute instant.
///
/// Accepted patterns, in order of preference:
/// 1. timestamp with explicit offset (RFC 3339), parsed directly
/// 2. local date-time without offset, interpreted in UTC
/// 3. bare 4-digit year, expanded to Jan 1 00:00:00 / Dec 31 23:59:59 of that year
/// 4. year-month, expanded to the first / last day of that month
/// 5. plain date, expanded to start / end of day
///
/// # Errors
///
/// Returns [`InvalidDateFormat`] when none of the patterns match.
pub fn normalize(raw: &str, boundary: Boundary) -> Result<DateTime<Utc>, InvalidDateFormat> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(Utc.from_utc_datetime(&local));
        }
    }

    if let Some(year) = parse_bare_year(raw) {
        let date = match boundary {
            Boundary::Start => NaiveDate::from_ymd_opt(year, 1, 1),
            Boundary::End => NaiveDate::from_ymd_opt(year, 12, 31),
        };
        if let Some(date) = date {
            return Ok(at_boundary(date, boundary));
        }
    }

    if let Some((year, month)) = parse_year_month(raw) {
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            let date = match boundary {
                Boundary::Start => Some(first),
                Boundary::End => last_day_of_month(year, month),
            };
            if let Some(date) = date {
                return Ok(at_boundary(date, boundary));
            }
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(at_boundary(date, boundary));
    }

    Err(InvalidDateFormat(raw.to_owned()))
}

/// Returns the year when `raw` is exactly four ASCII digits.
fn parse_bare_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Returns `(year, month)` when `raw` has the exact shape `YYYY-MM`.
fn parse_year_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next?.pred_opt()
}

fn at_boundary(date: NaiveDate, boundary: Boundary) -> DateTime<Utc> {
    let time = match boundary {
        Boundary::Start => NaiveTime::MIN,
        Boundary::End => NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
    };
    Utc.from_utc_datetime(&date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 fixture")
    }

    #[test]
    fn parses_timestamp_with_offset_directly() {
        let parsed = normalize("2024-03-01T10:30:00+02:00", Boundary::Start).expect("offset form");
        assert_eq!(parsed, utc("2024-03-01T08:30:00Z"));
    }

    #[test]
    fn interprets_local_datetime_as_utc() {
        let parsed = normalize("2024-03-01T10:30:00", Boundary::Start).expect("local form");
        assert_eq!(parsed, utc("2024-03-01T10:30:00Z"));
    }

    #[test]
    fn expands_bare_year_to_range_boundaries() {
        let start = normalize("1950", Boundary::Start).expect("year start");
        let end = normalize("1950", Boundary::End).expect("year end");
        assert_eq!(start, utc("1950-01-01T00:00:00Z"));
        assert_eq!(end, utc("1950-12-31T23:59:59Z"));
    }

    #[test]
    fn expands_year_month_to_month_boundaries() {
        let start = normalize("1950-06", Boundary::Start).expect("month start");
        let end = normalize("1950-06", Boundary::End).expect("month end");
        assert_eq!(start, utc("1950-06-01T00:00:00Z"));
        assert_eq!(end, utc("1950-06-30T23:59:59Z"));
    }

    #[test]
    fn expands_december_to_year_end() {
        let end = normalize("2023-12", Boundary::End).expect("december end");
        assert_eq!(end, utc("2023-12-31T23:59:59Z"));
    }

    #[test]
    fn expands_leap_february_to_29th() {
        let end = normalize("2024-02", Boundary::End).expect("leap february");
        assert_eq!(end, utc("2024-02-29T23:59:59Z"));
    }

    #[test]
    fn expands_plain_date_to_day_boundaries() {
        let start = normalize("2024-01-10", Boundary::Start).expect("day start");
        let end = normalize("2024-01-10", Boundary::End).expect("day end");
        assert_eq!(start, utc("2024-01-10T00:00:00Z"));
        assert_eq!(end, utc("2024-01-10T23:59:59Z"));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let parsed = normalize("  2024-01-10  ", Boundary::Start).expect("trimmed input");
        assert_eq!(parsed, utc("2024-01-10T00:00:00Z"));
    }

    #[test]
    fn rejects_unrecognised_text() {
        assert!(normalize("not a date", Boundary::Start).is_err());
        assert!(normalize("10/01/2024", Boundary::Start).is_err());
        assert!(normalize("", Boundary::Start).is_err());
    }

    #[test]
    fn rejects_five_digit_year() {
        assert!(normalize("19501", Boundary::Start).is_err());
    }
}
