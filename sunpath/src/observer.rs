/// An observer's geographic position in degrees.
///
/// # Coordinate System
///
/// - **Latitude**: positive north of the equator, nominally [-90°, +90°]
/// - **Longitude**: positive east of the prime meridian, nominally [-180°, +180°]
///
/// Neither coordinate is validated or clamped. The solar formulas are defined
/// for any finite value; out-of-range coordinates produce mathematically
/// defined but physically meaningless results, which is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Observer {
    /// Creates an observer from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in radians (φ in the horizontal-coordinate formulas).
    #[inline]
    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// West-positive longitude in radians (lw).
    ///
    /// The sidereal-time formula counts longitude westward, so the
    /// east-positive input is negated before conversion.
    #[inline]
    pub fn west_longitude(&self) -> f64 {
        (-self.longitude).to_radians()
    }
}

impl core::fmt::Display for Observer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:+.4}°, {:+.4}°", self.latitude, self.longitude)
    }
}
