use std::fmt;
use sunpath_core::constants::{J2000_JD, MILLIS_PER_DAY_F64, UNIX_EPOCH_JD, UNIX_EPOCH_JDN};

/// A continuous Julian day count.
///
/// Stored as a single `f64`. The low-precision solar model is defined on a
/// day count produced by one fixed arithmetic expression, so this type keeps
/// that expression intact instead of splitting the date into two parts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(f64);

impl JulianDate {
    /// Creates a Julian Date from a raw day count.
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Returns the J2000.0 epoch (JD 2451545.0, 2000-01-01 12:00 UTC).
    pub const fn j2000() -> Self {
        Self(J2000_JD)
    }

    /// Converts milliseconds since the Unix epoch to a Julian Date.
    ///
    /// The terms are evaluated left to right exactly as written; regrouping
    /// them shifts the low bits of the day count, and the trigonometric chain
    /// downstream is sensitive to those bits.
    pub fn from_unix_millis(millis: f64) -> Self {
        Self(millis / MILLIS_PER_DAY_F64 - 0.5 + UNIX_EPOCH_JDN)
    }

    /// Raw Julian day count as `f64`.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JD
    }

    /// Builds a Julian Date from a day offset relative to J2000.0.
    pub fn from_days_since_j2000(days: f64) -> Self {
        Self(J2000_JD + days)
    }

    /// Converts back to milliseconds since the Unix epoch.
    pub fn to_unix_millis(&self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY_F64
    }

    /// Returns a Julian Date shifted by the given number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd)
    }
}
