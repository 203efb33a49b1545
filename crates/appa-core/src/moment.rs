//! # Moment Module
//!
//! The instant a report was taken, in the local offset, at whole-second
//! precision.
//!
//! Rendering is ISO-8601 extended with a numeric offset
//! (`YYYY-MM-DDTHH:MM:SS±HH:MM`). UTC is written `+00:00`, never `Z`, so every
//! line has the same shape and sorts lexically within one offset.

use chrono::{DateTime, Datelike, FixedOffset, ParseError, SecondsFormat, SubsecRound};

/// The current date and time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrentMoment(DateTime<FixedOffset>);

impl CurrentMoment {
    /// Wrap a timestamp, dropping sub-second precision.
    #[must_use]
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at.trunc_subsecs(0))
    }

    /// The underlying timestamp.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// 1-based ordinal day within the year, in the moment's own offset.
    ///
    /// January 1 is 1. December 31 is 366 in leap years, 365 otherwise.
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Calendar year in the moment's own offset.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl std::fmt::Display for CurrentMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Parse a rendered timestamp back into a moment.
pub fn parse_iso8601(text: &str) -> Result<CurrentMoment, ParseError> {
    let at = DateTime::parse_from_rfc3339(text)?;
    Ok(CurrentMoment::new(at))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use proptest::prelude::*;

    fn at(text: &str) -> CurrentMoment {
        parse_iso8601(text).expect("valid timestamp literal")
    }

    /// Proleptic Gregorian leap year rule, independent of chrono.
    fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn days_in_year(year: i32) -> u32 {
        if is_leap_year(year) { 366 } else { 365 }
    }

    #[test]
    fn renders_iso8601_with_offset() {
        let moment = at("2024-03-15T10:30:00-07:00");
        assert_eq!(moment.to_iso8601(), "2024-03-15T10:30:00-07:00");
        assert_eq!(moment.to_string(), "2024-03-15T10:30:00-07:00");
    }

    #[test]
    fn utc_renders_numeric_offset() {
        let moment = at("2024-03-15T10:30:00Z");
        assert_eq!(moment.to_iso8601(), "2024-03-15T10:30:00+00:00");
    }

    #[test]
    fn sub_seconds_are_truncated() {
        let moment = at("2024-03-15T10:30:00.987654+02:00");
        assert_eq!(moment.as_datetime().nanosecond(), 0);
        assert_eq!(moment.to_iso8601(), "2024-03-15T10:30:00+02:00");
    }

    #[test]
    fn day_of_year_examples() {
        assert_eq!(at("2024-03-15T10:30:00-07:00").day_of_year(), 75);
        assert_eq!(at("2023-03-15T10:30:00-07:00").day_of_year(), 74);
        assert_eq!(at("2023-01-01T00:00:00+00:00").day_of_year(), 1);
        assert_eq!(at("2023-12-31T23:59:59+00:00").day_of_year(), 365);
        assert_eq!(at("2024-02-29T12:00:00+00:00").day_of_year(), 60);
        assert_eq!(at("2024-12-31T23:59:59+00:00").day_of_year(), 366);
    }

    #[test]
    fn day_of_year_follows_local_offset() {
        // Still December 31 in UTC, already January 1 locally.
        let moment = at("2025-01-01T00:30:00+01:00");
        assert_eq!(moment.day_of_year(), 1);
        assert_eq!(moment.year(), 2025);
    }

    #[test]
    fn leap_year_reference_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2100), 365);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_iso8601("not a timestamp").is_err());
        assert!(parse_iso8601("2024-13-01T00:00:00+00:00").is_err());
    }

    fn any_moment() -> impl Strategy<Value = CurrentMoment> {
        // Years 1900..2200, offsets within +/-14h at minute granularity.
        (-2_208_988_800_i64..7_258_118_400_i64, -840_i32..=840_i32).prop_filter_map(
            "representable",
            |(secs, offset_minutes)| {
                let offset = FixedOffset::east_opt(offset_minutes * 60)?;
                let utc = DateTime::from_timestamp(secs, 0)?;
                Some(CurrentMoment::new(utc.with_timezone(&offset)))
            },
        )
    }

    proptest! {
        #[test]
        fn rendered_timestamp_parses_back(moment in any_moment()) {
            let parsed = parse_iso8601(&moment.to_iso8601());
            prop_assert!(parsed.is_ok());
            if let Ok(parsed) = parsed {
                prop_assert_eq!(parsed, moment);
                prop_assert_eq!(
                    parsed.as_datetime().offset().local_minus_utc(),
                    moment.as_datetime().offset().local_minus_utc()
                );
            }
        }

        #[test]
        fn day_of_year_in_range(moment in any_moment()) {
            let day = moment.day_of_year();
            prop_assert!((1..=366).contains(&day));
            prop_assert!(day <= days_in_year(moment.year()));

            if day == 366 {
                let dt = moment.as_datetime();
                prop_assert!(is_leap_year(dt.year()));
                prop_assert_eq!((dt.month(), dt.day()), (12, 31));
            }
        }
    }
}
