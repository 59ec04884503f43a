//! Sun direction as a unit vector for lighting and camera placement.
//!
//! A renderer orienting a light source or a day/night terminator on a globe
//! wants the sun as a Cartesian direction, not as a pair of angles. This
//! module maps [`HorizontalCoordinates`] onto a local frame:
//!
//! - **y** points to the zenith,
//! - **z** points toward the azimuth origin on the horizon (due south),
//! - **x** completes the frame toward due west.
//!
//! The result is always finite: it is a unit vector, or exactly `[0, 0, 0]`
//! when normalization degenerates. Consumers can feed it to a rendering
//! transform without checking for NaN or infinity.
//!
//! ```
//! use sunpath::{sun_direction, Observer};
//! use sunpath_time::Instant;
//!
//! let noon = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
//! let dir = sun_direction(noon, &Observer::new(0.0, 0.0));
//!
//! // Near-equinox noon on the equator: the sun is almost straight up
//! assert!(dir.y > 0.99);
//! assert!((dir.magnitude() - 1.0).abs() < 1e-9);
//! ```

use sunpath_core::{Angle, Vector3};
use sunpath_time::Instant;

use crate::observer::Observer;
use crate::position::{sun_position, sun_position_with_obliquity, HorizontalCoordinates};

/// Maps horizontal coordinates onto the local west/up/south frame and
/// normalizes.
///
/// Degenerate input (non-finite angles) yields exactly `[0, 0, 0]`.
pub fn direction_from_horizontal(coords: &HorizontalCoordinates) -> Vector3 {
    let (sin_az, cos_az) = coords.azimuth().sin_cos();
    let (sin_alt, cos_alt) = coords.altitude().sin_cos();

    Vector3::new(cos_alt * sin_az, sin_alt, cos_alt * cos_az).normalize()
}

/// Unit vector toward the sun for an observer, with Earth's default obliquity.
pub fn sun_direction(instant: Instant, observer: &Observer) -> Vector3 {
    direction_from_horizontal(&sun_position(instant, observer))
}

/// Unit vector toward the sun with an explicit obliquity of the ecliptic.
pub fn sun_direction_with_obliquity(
    instant: Instant,
    observer: &Observer,
    obliquity: Angle,
) -> Vector3 {
    direction_from_horizontal(&sun_position_with_obliquity(instant, observer, obliquity))
}
