use sunpath_core::constants::PI;
use sunpath_core::Angle;

/// Longitude of Earth's perihelion in degrees at J2000.0.
pub const PERIHELION_LONGITUDE_DEG: f64 = 102.9372;

/// Solar mean anomaly in radians for a day count since J2000.0.
pub fn solar_mean_anomaly(days: f64) -> f64 {
    (357.5291 + 0.98560028 * days).to_radians()
}

/// Equation of center in radians: the correction from mean to true anomaly
/// for Earth's slightly elliptical orbit.
pub fn equation_of_center(mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians()
}

/// Ecliptic longitude of the sun in radians.
///
/// Mean anomaly plus equation of center plus the perihelion longitude, plus π
/// because the sun's geocentric longitude is opposite Earth's heliocentric one.
pub fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    mean_anomaly + equation_of_center(mean_anomaly) + PERIHELION_LONGITUDE_DEG.to_radians() + PI
}

/// Declination of the sun in radians, given ecliptic longitude and the
/// obliquity of the ecliptic (both radians).
pub fn declination(ecliptic_longitude: f64, obliquity: f64) -> f64 {
    (ecliptic_longitude.sin() * obliquity.sin()).asin()
}

/// Right ascension of the sun in radians, given ecliptic longitude and the
/// obliquity of the ecliptic (both radians).
pub fn right_ascension(ecliptic_longitude: f64, obliquity: f64) -> f64 {
    (ecliptic_longitude.sin() * obliquity.cos()).atan2(ecliptic_longitude.cos())
}

/// Equatorial coordinates of the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoordinates {
    right_ascension: Angle,
    declination: Angle,
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Angle, declination: Angle) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }
}

/// Sun's equatorial coordinates for a day count since J2000.0 and a given
/// obliquity of the ecliptic.
pub fn sun_equatorial(days: f64, obliquity: Angle) -> EquatorialCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(days));
    let eps = obliquity.radians();

    EquatorialCoordinates {
        right_ascension: Angle::from_radians(right_ascension(l, eps)),
        declination: Angle::from_radians(declination(l, eps)),
    }
}
