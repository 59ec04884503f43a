//! Horizontal (azimuth/altitude) solar coordinates for an observer.
//!
//! This is the core operation of the library: a UTC instant and a geographic
//! position go in, the sun's apparent position over the local horizon comes
//! out. The chain is the classic low-precision solar model: mean anomaly,
//! equation of center, ecliptic longitude, equatorial coordinates, local
//! sidereal time, hour angle, then altitude and azimuth.
//!
//! ```
//! use sunpath::{sun_position, Observer};
//! use sunpath_time::Instant;
//!
//! let noon = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
//! let equator = Observer::new(0.0, 0.0);
//!
//! // Near the March equinox the sun stands almost at the zenith of (0°, 0°)
//! let pos = sun_position(noon, &equator);
//! assert!(pos.altitude().degrees() > 85.0);
//! ```
//!
//! # Conventions
//!
//! - **Altitude**: angle above the horizon, in [-π/2, +π/2] (an arcsine).
//! - **Azimuth**: measured from due south, positive toward the west, in
//!   [-π, +π] (an atan2). Add π for a north-referenced compass bearing.
//!
//! Accuracy is that of the underlying model: a fraction of a degree for
//! dates within a few centuries of J2000.0, degrading slowly beyond that.
//! No refraction correction is applied.

use sunpath_core::constants::EARTH_OBLIQUITY_DEG;
use sunpath_core::Angle;
use sunpath_time::Instant;

use crate::ecliptic::sun_equatorial;
use crate::observer::Observer;

/// Local sidereal time in radians for a day count since J2000.0 and a
/// west-positive longitude in radians.
pub fn sidereal_time(days: f64, west_longitude: f64) -> f64 {
    (280.16 + 360.9856235 * days).to_radians() - west_longitude
}

/// Altitude above the horizon in radians.
///
/// Arguments are the local hour angle, the observer latitude φ, and the sun's
/// declination, all in radians.
pub fn altitude(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    (latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos())
        .asin()
}

/// Azimuth from due south, positive westward, in radians.
pub fn azimuth(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(hour_angle.cos() * latitude.sin() - declination.tan() * latitude.cos())
}

/// The sun's position relative to the observer's local horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinates {
    azimuth: Angle,
    altitude: Angle,
}

impl HorizontalCoordinates {
    pub fn new(azimuth: Angle, altitude: Angle) -> Self {
        Self { azimuth, altitude }
    }

    /// Azimuth from due south, positive toward the west.
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// Altitude above the horizon.
    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    /// Zenith distance (90° minus altitude).
    pub fn zenith_angle(&self) -> Angle {
        Angle::HALF_PI - self.altitude
    }
}

/// Computes the sun's horizontal coordinates with Earth's default obliquity.
///
/// Deterministic and pure: identical inputs give bit-identical output.
pub fn sun_position(instant: Instant, observer: &Observer) -> HorizontalCoordinates {
    sun_position_with_obliquity(instant, observer, Angle::from_degrees(EARTH_OBLIQUITY_DEG))
}

/// Computes the sun's horizontal coordinates with an explicit obliquity of
/// the ecliptic.
///
/// The obliquity is a parameter rather than a constant so that non-Earth
/// bodies and epoch-drift corrections can reuse the same chain.
pub fn sun_position_with_obliquity(
    instant: Instant,
    observer: &Observer,
    obliquity: Angle,
) -> HorizontalCoordinates {
    let days = instant.days_since_j2000();
    let lw = observer.west_longitude();
    let phi = observer.latitude_radians();

    let equatorial = sun_equatorial(days, obliquity);
    let dec = equatorial.declination().radians();
    let hour_angle = sidereal_time(days, lw) - equatorial.right_ascension().radians();

    HorizontalCoordinates {
        azimuth: Angle::from_radians(azimuth(hour_angle, phi, dec)),
        altitude: Angle::from_radians(altitude(hour_angle, phi, dec)),
    }
}
