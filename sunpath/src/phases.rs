//! Sun event times: solar noon, nadir, sunrise, sunset, twilight crossings.
//!
//! The same low-precision model that gives the sun's position can be inverted
//! for the instants at which the sun crosses a given altitude. Rise and set
//! are computed for a configurable horizon angle, so the twilight boundaries
//! come out of the same call:
//!
//! | Constant | Angle | Meaning |
//! |----------|-------|---------|
//! | [`HORIZON_SUNRISE_DEG`] | -0.833° | Top of disc touches the horizon (incl. refraction) |
//! | [`HORIZON_CIVIL_TWILIGHT_DEG`] | -6° | Civil dawn/dusk |
//! | [`HORIZON_NAUTICAL_TWILIGHT_DEG`] | -12° | Nautical dawn/dusk |
//! | [`HORIZON_ASTRONOMICAL_TWILIGHT_DEG`] | -18° | Astronomical dawn/dusk |
//!
//! Polar day and polar night are not errors: they come back as the
//! [`SunTimes::AlwaysUp`] / [`SunTimes::AlwaysDown`] variants.

use sunpath_core::constants::{EARTH_OBLIQUITY_DEG, TWOPI};
use sunpath_core::{Angle, SolarResult};
use sunpath_time::{Instant, JulianDate};

use crate::ecliptic::{declination, ecliptic_longitude, solar_mean_anomaly};
use crate::observer::Observer;

/// Sun altitude at which rise and set are conventionally reported, in degrees.
pub const HORIZON_SUNRISE_DEG: f64 = -0.833;

pub const HORIZON_CIVIL_TWILIGHT_DEG: f64 = -6.0;

pub const HORIZON_NAUTICAL_TWILIGHT_DEG: f64 = -12.0;

pub const HORIZON_ASTRONOMICAL_TWILIGHT_DEG: f64 = -18.0;

/// Leading coefficient of the approximate-transit expansion, in days.
const J0: f64 = 0.0009;

/// Solar noon and the opposite nadir for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transit {
    pub noon: Instant,
    pub nadir: Instant,
}

/// Result of a rise/set query for one day and one horizon angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunTimes {
    /// The sun crosses the horizon angle twice.
    Regular {
        rise: Instant,
        noon: Instant,
        set: Instant,
    },
    /// The sun stays above the horizon angle all day (polar day).
    AlwaysUp { noon: Instant },
    /// The sun stays below the horizon angle all day (polar night).
    AlwaysDown { noon: Instant },
}

impl SunTimes {
    /// Rise and set instants, if the day has them.
    pub fn rise_set(&self) -> Option<(Instant, Instant)> {
        match self {
            Self::Regular { rise, set, .. } => Some((*rise, *set)),
            _ => None,
        }
    }

    /// Solar noon, present in every variant.
    pub fn noon(&self) -> Instant {
        match self {
            Self::Regular { noon, .. }
            | Self::AlwaysUp { noon }
            | Self::AlwaysDown { noon } => *noon,
        }
    }
}

fn julian_cycle(days: f64, west_longitude: f64) -> f64 {
    (days - J0 - west_longitude / TWOPI).round()
}

fn approx_transit(hour_angle: f64, west_longitude: f64, cycle: f64) -> f64 {
    J0 + (hour_angle + west_longitude) / TWOPI + cycle
}

/// Refined transit time as days since J2000.0.
fn solar_transit_day(approx: f64, mean_anomaly: f64, ecliptic_lon: f64) -> f64 {
    approx + 0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_lon).sin()
}

fn instant_at(days_since_j2000: f64) -> SolarResult<Instant> {
    Instant::from_julian_day(JulianDate::from_days_since_j2000(days_since_j2000))
}

/// Solar noon and nadir for the day containing `instant` at the observer's
/// longitude.
pub fn solar_transit(instant: Instant, observer: &Observer) -> SolarResult<Transit> {
    let lw = observer.west_longitude();
    let days = instant.days_since_j2000();

    let cycle = julian_cycle(days, lw);
    let approx = approx_transit(0.0, lw, cycle);
    let m = solar_mean_anomaly(approx);
    let l = ecliptic_longitude(m);
    let noon_day = solar_transit_day(approx, m, l);

    Ok(Transit {
        noon: instant_at(noon_day)?,
        nadir: instant_at(noon_day - 0.5)?,
    })
}

/// Rise, noon, and set for the day containing `instant`, for a configurable
/// horizon angle (see the module constants).
///
/// Uses Earth's default obliquity; the inversion is an Earth-day construction
/// and is not parameterized further.
pub fn sun_times(instant: Instant, observer: &Observer, horizon: Angle) -> SolarResult<SunTimes> {
    let lw = observer.west_longitude();
    let phi = observer.latitude_radians();
    let days = instant.days_since_j2000();

    let cycle = julian_cycle(days, lw);
    let approx = approx_transit(0.0, lw, cycle);
    let m = solar_mean_anomaly(approx);
    let l = ecliptic_longitude(m);
    let dec = declination(l, EARTH_OBLIQUITY_DEG.to_radians());
    let noon_day = solar_transit_day(approx, m, l);
    let noon = instant_at(noon_day)?;

    let cos_hour_angle = (horizon.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if !cos_hour_angle.is_finite() {
        // cos(φ) underflows exactly at a pole; classify by the all-day altitude
        return Ok(if phi.sin() * dec.sin() > horizon.sin() {
            SunTimes::AlwaysUp { noon }
        } else {
            SunTimes::AlwaysDown { noon }
        });
    }
    if cos_hour_angle < -1.0 {
        return Ok(SunTimes::AlwaysUp { noon });
    }
    if cos_hour_angle > 1.0 {
        return Ok(SunTimes::AlwaysDown { noon });
    }

    let hour_angle = cos_hour_angle.acos();
    let set_day = solar_transit_day(approx_transit(hour_angle, lw, cycle), m, l);
    let rise_day = noon_day - (set_day - noon_day);

    Ok(SunTimes::Regular {
        rise: instant_at(rise_day)?,
        noon,
        set: instant_at(set_day)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunrise_times(instant: Instant, observer: &Observer) -> SunTimes {
        sun_times(instant, observer, Angle::from_degrees(HORIZON_SUNRISE_DEG)).unwrap()
    }

    #[test]
    fn test_greenwich_equinox_pinned() {
        let instant = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
        let greenwich = Observer::new(51.4769, 0.0);

        match sunrise_times(instant, &greenwich) {
            SunTimes::Regular { rise, noon, set } => {
                assert!((noon.unix_millis() - 1_710_936_521_199.2249).abs() < 1.0);
                assert!((rise.unix_millis() - 1_710_914_604_714.802).abs() < 1.0);
                assert!((set.unix_millis() - 1_710_958_437_683.648).abs() < 1.0);
            }
            other => panic!("expected a regular day at Greenwich, got {:?}", other),
        }
    }

    #[test]
    fn test_new_york_solstice_pinned() {
        let instant = Instant::from_calendar(2025, 6, 21, 12, 0, 0.0);
        let nyc = Observer::new(40.7128, -74.0060);

        match sunrise_times(instant, &nyc) {
            SunTimes::Regular { rise, noon, set } => {
                assert!((noon.unix_millis() - 1_750_525_146_869.3823).abs() < 1.0);
                assert!((rise.unix_millis() - 1_750_497_978_091.581).abs() < 1.0);
                assert!((set.unix_millis() - 1_750_552_315_647.1833).abs() < 1.0);
            }
            other => panic!("expected a regular day in New York, got {:?}", other),
        }
    }

    #[test]
    fn test_rise_noon_set_ordering() {
        let instant = Instant::from_calendar(2024, 9, 1, 12, 0, 0.0);
        let observer = Observer::new(48.8566, 2.3522);

        if let SunTimes::Regular { rise, noon, set } = sunrise_times(instant, &observer) {
            assert!(rise < noon, "sunrise must precede solar noon");
            assert!(noon < set, "solar noon must precede sunset");
        } else {
            panic!("Paris in September is a regular day");
        }
    }

    #[test]
    fn test_polar_day_and_night_tromso() {
        let tromso = Observer::new(69.6492, 18.9553);

        let midsummer = Instant::from_calendar(2025, 6, 21, 12, 0, 0.0);
        assert!(matches!(
            sunrise_times(midsummer, &tromso),
            SunTimes::AlwaysUp { .. }
        ));

        let midwinter = Instant::from_calendar(2025, 12, 21, 12, 0, 0.0);
        assert!(matches!(
            sunrise_times(midwinter, &tromso),
            SunTimes::AlwaysDown { .. }
        ));
    }

    #[test]
    fn test_polar_night_still_has_astronomical_twilight() {
        // Tromsø midwinter: no sunrise, but the sun does climb past -18°
        let tromso = Observer::new(69.6492, 18.9553);
        let midwinter = Instant::from_calendar(2025, 12, 21, 12, 0, 0.0);

        let deep = sun_times(
            midwinter,
            &tromso,
            Angle::from_degrees(HORIZON_ASTRONOMICAL_TWILIGHT_DEG),
        )
        .unwrap();
        assert!(
            deep.rise_set().is_some(),
            "astronomical twilight should still occur in the Tromsø polar night"
        );
    }

    #[test]
    fn test_transit_matches_sun_times_noon() {
        let instant = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
        let greenwich = Observer::new(51.4769, 0.0);

        let transit = solar_transit(instant, &greenwich).unwrap();
        let times = sunrise_times(instant, &greenwich);
        assert_eq!(transit.noon, times.noon());
        assert!(
            (transit.noon.unix_millis() - transit.nadir.unix_millis() - 43_200_000.0).abs() < 1.0,
            "nadir should sit half a day before noon"
        );
    }

    #[test]
    fn test_altitude_at_sunrise_matches_horizon() {
        use crate::position::sun_position;

        let instant = Instant::from_calendar(2024, 3, 20, 12, 0, 0.0);
        let greenwich = Observer::new(51.4769, 0.0);

        if let Some((rise, set)) = sunrise_times(instant, &greenwich).rise_set() {
            for event in [rise, set] {
                let alt = sun_position(event, &greenwich).altitude().degrees();
                assert!(
                    (alt - HORIZON_SUNRISE_DEG).abs() < 0.1,
                    "altitude {}° at the rise/set instant should sit near {}°",
                    alt,
                    HORIZON_SUNRISE_DEG
                );
            }
        } else {
            panic!("Greenwich equinox is a regular day");
        }
    }

    #[test]
    fn test_exact_pole_is_classified_not_error() {
        let pole = Observer::new(90.0, 0.0);
        let midsummer = Instant::from_calendar(2025, 6, 21, 12, 0, 0.0);
        let times = sunrise_times(midsummer, &pole);
        assert!(
            matches!(times, SunTimes::AlwaysUp { .. } | SunTimes::AlwaysDown { .. }),
            "the pole has no rise/set, got {:?}",
            times
        );
    }
}
