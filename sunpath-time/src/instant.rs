//! UTC instants for the solar model.
//!
//! An [`Instant`] is a point in time stored as `f64` milliseconds since the
//! Unix epoch (UTC). There is no timezone ambiguity: construction and display
//! are UTC-only.
//!
//! # Validation Boundary
//!
//! A non-finite timestamp is the only invalid input in this library, and it is
//! rejected here, at construction, with
//! [`SolarError::InvalidArgument`](sunpath_core::SolarError). Everything
//! downstream therefore operates on a proven-finite instant and cannot produce
//! NaN from the time argument. Callers holding raw timestamps validate once:
//!
//! ```
//! use sunpath_time::Instant;
//!
//! let t = Instant::from_unix_millis(1_710_936_000_000.0).unwrap();
//! assert_eq!(t.days_since_j2000(), 8845.0);
//!
//! assert!(Instant::from_unix_millis(f64::NAN).is_err());
//! ```
//!
//! # Construction
//!
//! ```
//! use sunpath_time::Instant;
//!
//! // From calendar components (UTC)
//! let t = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
//! assert_eq!(t.unix_millis(), 1_710_936_000_000.0);
//!
//! // From ISO-8601 text
//! let t: Instant = "2024-03-20T12:00:00Z".parse().unwrap();
//! assert_eq!(t.unix_millis(), 1_710_936_000_000.0);
//! ```

use std::fmt;
use std::str::FromStr;

use sunpath_core::constants::{MILLIS_PER_DAY_F64, MILLIS_PER_SECOND_F64, MJD_UNIX_EPOCH};
use sunpath_core::{SolarError, SolarResult};

use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;

/// A UTC point in time, stored as milliseconds since 1970-01-01 00:00:00 UTC.
///
/// Guaranteed finite by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    millis: f64,
}

impl Instant {
    /// Creates an instant from milliseconds since the Unix epoch.
    ///
    /// Fails with `InvalidArgument` for NaN or infinite input. This is the
    /// single failure condition of the whole calculator; it is never clamped
    /// or recovered.
    pub fn from_unix_millis(millis: f64) -> SolarResult<Self> {
        if !millis.is_finite() {
            return Err(SolarError::invalid_argument(
                "instant",
                "timestamp must be a finite number of milliseconds",
            ));
        }
        Ok(Self { millis })
    }

    /// Creates an instant from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: f64) -> SolarResult<Self> {
        Self::from_unix_millis(seconds * MILLIS_PER_SECOND_F64)
    }

    /// Creates an instant from UTC calendar components.
    ///
    /// The day count uses the ERFA-style integer algorithm (valid for the
    /// proleptic Gregorian calendar); the intraday part is exact milliseconds.
    /// Component ranges are not checked here; out-of-range components roll
    /// over arithmetically. Use the `FromStr` parser for validated input.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        // Same algorithm as ERFA's eraCal2jd, with Rust's truncating division.
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;
        let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2_432_076;

        let day_millis =
            (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) * MILLIS_PER_SECOND_F64;

        Self {
            millis: (mjd as i64 - MJD_UNIX_EPOCH) as f64 * MILLIS_PER_DAY_F64 + day_millis,
        }
    }

    /// Creates an instant from a Julian Date.
    ///
    /// Fails with `InvalidArgument` if the Julian Date holds a non-finite
    /// day count.
    pub fn from_julian_day(jd: JulianDate) -> SolarResult<Self> {
        Self::from_unix_millis(jd.to_unix_millis())
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn unix_millis(&self) -> f64 {
        self.millis
    }

    /// Seconds since the Unix epoch.
    #[inline]
    pub fn unix_seconds(&self) -> f64 {
        self.millis / MILLIS_PER_SECOND_F64
    }

    /// The instant as a continuous Julian day count.
    #[inline]
    pub fn julian_day(&self) -> JulianDate {
        JulianDate::from_unix_millis(self.millis)
    }

    /// Days elapsed since J2000.0, the time argument of the solar model.
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        self.julian_day().days_since_j2000()
    }

    /// Returns an instant shifted by the given number of milliseconds.
    pub fn add_millis(&self, millis: f64) -> SolarResult<Self> {
        Self::from_unix_millis(self.millis + millis)
    }
}

/// Gregorian calendar date from a day count relative to the Unix epoch.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let dom = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (yoe + era * 400 + i64::from(month <= 2), month, dom)
}

impl fmt::Display for Instant {
    /// Formats as `YYYY-MM-DDTHH:MM:SS.sssZ` (UTC, millisecond precision).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut day = (self.millis / MILLIS_PER_DAY_F64).floor() as i64;
        let mut msod = (self.millis - day as f64 * MILLIS_PER_DAY_F64).round() as i64;
        if msod >= 86_400_000 {
            day += 1;
            msod -= 86_400_000;
        }

        let (year, month, dom) = civil_from_days(day);
        let (hour, rem) = (msod / 3_600_000, msod % 3_600_000);
        let (minute, rem) = (rem / 60_000, rem % 60_000);
        let (second, milli) = (rem / 1_000, rem % 1_000);

        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, dom, hour, minute, second, milli
        )
    }
}

impl FromStr for Instant {
    type Err = SolarError;

    fn from_str(s: &str) -> SolarResult<Self> {
        let parsed = parse_iso8601(s)?;
        Ok(Self::from_calendar(
            parsed.year,
            parsed.month,
            parsed.day,
            parsed.hour,
            parsed.minute,
            parsed.second,
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Instant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.millis.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        Instant::from_unix_millis(millis).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        assert!(Instant::from_unix_millis(f64::NAN).is_err());
        assert!(Instant::from_unix_millis(f64::INFINITY).is_err());
        assert!(Instant::from_unix_seconds(f64::NEG_INFINITY).is_err());

        let err = Instant::from_unix_millis(f64::NAN).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_calendar_known_epochs() {
        assert_eq!(Instant::from_calendar(1970, 1, 1, 0, 0, 0.0).unix_millis(), 0.0);
        assert_eq!(
            Instant::from_calendar(2000, 1, 1, 12, 0, 0.0).unix_millis(),
            946_728_000_000.0
        );
        assert_eq!(
            Instant::from_calendar(2024, 3, 20, 12, 0, 0.0).unix_millis(),
            1_710_936_000_000.0
        );
        assert_eq!(
            Instant::from_calendar(2025, 6, 21, 12, 0, 0.0).unix_millis(),
            1_750_507_200_000.0
        );
    }

    #[test]
    fn test_calendar_pre_epoch() {
        let t = Instant::from_calendar(1969, 12, 31, 23, 59, 59.0);
        assert_eq!(t.unix_millis(), -1000.0);
    }

    #[test]
    fn test_days_since_j2000_at_epoch() {
        let t = Instant::from_calendar(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(t.days_since_j2000(), 0.0);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        for text in [
            "2024-03-20T12:00:00.000Z",
            "2025-06-21T09:26:18.091Z",
            "1970-01-01T00:00:00.000Z",
            "1999-12-31T23:59:59.500Z",
        ] {
            let t: Instant = text.parse().unwrap();
            assert_eq!(t.to_string(), text, "round-trip failed for {}", text);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not a date".parse::<Instant>().is_err());
        assert!("2024-00-10T00:00:00".parse::<Instant>().is_err());
    }

    #[test]
    fn test_julian_day_round_trip() {
        let t = Instant::from_calendar(2024, 12, 21, 2, 0, 0.0);
        let back = Instant::from_julian_day(t.julian_day()).unwrap();
        assert!(
            (back.unix_millis() - t.unix_millis()).abs() < 0.5,
            "Julian round-trip drifted {} ms",
            back.unix_millis() - t.unix_millis()
        );
    }

    #[test]
    fn test_add_millis() {
        let t = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
        let later = t.add_millis(MILLIS_PER_DAY_F64).unwrap();
        assert_eq!(later.days_since_j2000(), t.days_since_j2000() + 1.0);
    }

    #[test]
    fn test_display_pre_epoch_carry() {
        let t = Instant::from_unix_millis(-0.2).unwrap();
        assert_eq!(t.to_string(), "1970-01-01T00:00:00.000Z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_non_finite() {
        let ok: Instant = serde_json::from_str("1710936000000.0").unwrap();
        assert_eq!(ok.unix_millis(), 1_710_936_000_000.0);
        // JSON has no NaN literal, so a null is the closest malformed input
        assert!(serde_json::from_str::<Instant>("null").is_err());
    }
}
