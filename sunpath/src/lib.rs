//! Low-precision solar position for real-time visualization.
//!
//! `sunpath` converts a UTC instant and an observer's geographic position into
//! the sun's apparent position — as azimuth/altitude angles, and as a unit
//! direction vector ready to orient a light source or camera on a rendered
//! globe. The same model is inverted for solar noon, sunrise/sunset, and
//! twilight times.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`observer`] | [`Observer`]: geographic position in degrees |
//! | [`ecliptic`] | Mean anomaly, equation of center, ecliptic longitude, equatorial coordinates |
//! | [`position`] | [`sun_position`]: horizontal coordinates for an observer |
//! | [`direction`] | [`sun_direction`]: NaN-free unit direction vector |
//! | [`phases`] | [`phases::sun_times`]: noon, nadir, rise/set, twilight |
//!
//! # Quick Start
//!
//! ```
//! use sunpath::{sun_direction, sun_position, Observer};
//! use sunpath_time::Instant;
//!
//! let instant: Instant = "2025-06-21T12:00:00Z".parse()?;
//! let new_york = Observer::new(40.7128, -74.0060);
//!
//! let pos = sun_position(instant, &new_york);
//! println!("altitude {:.2}°", pos.altitude().degrees());
//!
//! let dir = sun_direction(instant, &new_york);
//! assert!((dir.magnitude() - 1.0).abs() < 1e-9);
//! # Ok::<(), sunpath::SolarError>(())
//! ```
//!
//! # Contract
//!
//! Every operation is pure, synchronous, and allocation-free: no I/O, no
//! shared state, no caching. Calls are safe from any number of threads. The
//! single failure condition in the library is a non-finite timestamp, rejected
//! when the [`Instant`] is constructed; every other input, however extreme,
//! produces a finite, defined result.
//!
//! # Accuracy
//!
//! This is the classic low-precision model: adequate for lighting, terminator
//! placement, and sun-path diagrams (fractions of a degree near the present
//! era), not for ephemeris-grade work. Accuracy degrades over centuries, which
//! is accepted and not corrected.

pub mod direction;
pub mod ecliptic;
pub mod observer;
pub mod phases;
pub mod position;

pub use direction::{direction_from_horizontal, sun_direction, sun_direction_with_obliquity};
pub use ecliptic::{sun_equatorial, EquatorialCoordinates};
pub use observer::Observer;
pub use position::{sun_position, sun_position_with_obliquity, HorizontalCoordinates};

pub use sunpath_core::{Angle, SolarError, SolarResult, Vector3};
pub use sunpath_time::{Instant, JulianDate};
