//! Time handling for the sunpath solar position library.
//!
//! The solar model takes its time argument as days since the J2000.0 epoch,
//! derived from a UTC instant through a continuous Julian day count:
//!
//! ```text
//! Unix milliseconds → JulianDate → days since J2000.0
//! ```
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`instant`] | [`Instant`]: validated UTC timestamps, calendar and ISO-8601 construction |
//! | [`julian`] | [`JulianDate`]: continuous day count, J2000.0 offsets |
//! | [`parsing`] | Minimal ISO-8601 field parsing |

pub mod instant;
pub mod julian;
pub mod parsing;

pub use instant::Instant;
pub use julian::JulianDate;
pub use parsing::{parse_iso8601, ParsedDateTime};
