pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of the Unix epoch, 1970-01-01 00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Noon-based Julian day number of 1970-01-01. The millisecond-to-Julian-day
/// conversion is written against this value so that the half-day offset is
/// applied as a separate term (see `sunpath-time`).
pub const UNIX_EPOCH_JDN: f64 = 2440588.0;

/// Modified Julian Date of the Unix epoch (MJD 40587 = 1970-01-01).
pub const MJD_UNIX_EPOCH: i64 = 40_587;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MILLIS_PER_DAY_F64: f64 = 86_400_000.0;

pub const MILLIS_PER_SECOND_F64: f64 = 1_000.0;

/// Mean obliquity of the ecliptic in degrees, the Earth default for the
/// low-precision solar model. Configurable per call for non-Earth bodies.
pub const EARTH_OBLIQUITY_DEG: f64 = 23.4397;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;
