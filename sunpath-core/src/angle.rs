//! Core angle type and normalization helpers.
//!
//! Angles are stored internally as radians (`f64`). All trigonometric work in
//! the solar model happens in radians; the degree-based constructors and
//! accessors exist for human-facing values (observer coordinates, obliquity,
//! horizon angles).
//!
//! # Quick Start
//!
//! ```
//! use sunpath_core::Angle;
//!
//! let a = Angle::from_degrees(45.0);
//! assert!((a.radians() - 0.785398).abs() < 1e-5);
//!
//! let (sin, cos) = a.sin_cos();
//! assert!((sin - cos).abs() < 1e-12);
//! ```
//!
//! # Normalization
//!
//! Two wrapping conventions appear in horizontal-coordinate work:
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Sidereal time, azimuth for display | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle | [-π, +π) | [`wrap_pm_pi`] |
//!
//! Wrapping uses `libm::fmod` rather than the `%` operator because Rust's `%`
//! is a remainder, not a modulo, and the two differ for negative input.

use crate::constants::{PI, TWOPI};

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because `f64` can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees). The zenith distance of the horizon.
    pub const HALF_PI: Self = Self { rad: crate::constants::HALF_PI };

    /// Creates an angle from radians.
    ///
    /// This is the only `const` constructor because radians are the internal
    /// representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Simultaneous sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Returns `true` when the underlying radian value is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}

impl core::ops::Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad + rhs.rad)
    }
}

impl core::ops::Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.rad - rhs.rad)
    }
}

impl core::ops::Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.rad * k)
    }
}

impl core::ops::Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_radians(self.rad / k)
    }
}

impl core::ops::Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.rad)
    }
}

impl core::fmt::Display for Angle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

// Angles serialize as their raw radian value, not as a struct.
#[cfg(feature = "serde")]
impl serde::Serialize for Angle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rad.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Angle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Angle::from_radians)
    }
}

/// Wraps an angle in radians to [0, 2π).
#[inline]
pub fn wrap_0_2pi(rad: f64) -> f64 {
    let wrapped = libm::fmod(rad, TWOPI);
    if wrapped < 0.0 {
        wrapped + TWOPI
    } else {
        wrapped
    }
}

/// Wraps an angle in radians to [-π, +π).
#[inline]
pub fn wrap_pm_pi(rad: f64) -> f64 {
    let wrapped = libm::fmod(rad + PI, TWOPI);
    if wrapped < 0.0 {
        wrapped + TWOPI - PI
    } else {
        wrapped - PI
    }
}
