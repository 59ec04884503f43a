//! 3D Cartesian vectors for direction calculations.
//!
//! The solar position ends up in spherical form (azimuth/altitude), but the
//! consumers of this library (lighting and camera placement in a rendering
//! pipeline) want a Cartesian direction. [`Vector3`] is that bridge.
//!
//! # Unit Vectors and the Degenerate Fallback
//!
//! Directions live on the unit sphere, so vectors are normalized before being
//! handed out. [`normalize`](Vector3::normalize) guarantees a finite result:
//! a vector with zero or non-finite length normalizes to exactly `[0, 0, 0]`
//! rather than propagating NaN. Callers never need to check for NaN or
//! infinity in a normalized vector.
//!
//! ```
//! use sunpath_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! let unit = v.normalize();
//! assert!((unit.magnitude() - 1.0).abs() < 1e-15);
//!
//! assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
//! assert_eq!(Vector3::new(f64::NAN, 0.0, 0.0).normalize(), Vector3::zeros());
//! ```

/// A 3D Cartesian vector.
///
/// Components are public for direct access when performance matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the magnitude is zero or non-finite, returns exactly `[0, 0, 0]`.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            Self::zeros()
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    /// Computes the dot product with another vector.
    ///
    /// For unit vectors this equals the cosine of the angle between them.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns `true` when all three components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl core::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.z)
    }
}
