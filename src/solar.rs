//! Solar position and Julian-day conversion.
//!
//! The calculator only needs the sun's declination and the equation of
//! time for a given day; both come through the `SolarPositionProvider`
//! trait so the parameter mapping and high-latitude correction can be
//! exercised against a stub, independent of the ephemeris math.

use chrono::{Datelike, NaiveDate};

/// Sun state for one Julian day, as seen from Earth's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in hours (apparent minus mean solar time).
    pub equation_of_time: f64,
}

/// Source of solar declination and equation of time.
pub trait SolarPositionProvider {
    fn position(&self, julian_day: f64) -> SolarPosition;
}

/// Low-precision geocentric solar model (US Naval Observatory
/// approximation). Accurate to well under a minute of clock time over
/// the 1950-2100 range, which is ample for prayer scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionSun;

impl SolarPositionProvider for LowPrecisionSun {
    fn position(&self, julian_day: f64) -> SolarPosition {
        let d = julian_day - 2451545.0;

        // Mean anomaly, mean longitude, ecliptic longitude (degrees).
        let g = normalize_angle(357.529 + 0.98560028 * d);
        let q = normalize_angle(280.459 + 0.98564736 * d);
        let l = normalize_angle(
            q + 1.915 * g.to_radians().sin() + 0.020 * (2.0 * g).to_radians().sin(),
        );

        let e = 23.439 - 0.00000036 * d;

        let ra = (e.to_radians().cos() * l.to_radians().sin())
            .atan2(l.to_radians().cos())
            .to_degrees()
            / 15.0;
        // Recentre into [-12, 12): q/15 and ra wrap at different points of
        // the year, which would otherwise offset the result by a full day.
        let raw = q / 15.0 - normalize_hour(ra);
        let equation_of_time = raw - 24.0 * (raw / 24.0).round();
        let declination = (e.to_radians().sin() * l.to_radians().sin())
            .asin()
            .to_degrees();

        SolarPosition {
            declination,
            equation_of_time,
        }
    }
}

/// Julian day number for 0h UT of a civil date.
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year();
    let mut month = date.month();
    let day = date.day();

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
}

/// Wraps an angle into [0, 360).
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    normalize(angle, 360.0)
}

/// Wraps an hour value into [0, 24).
pub(crate) fn normalize_hour(hour: f64) -> f64 {
    normalize(hour, 24.0)
}

fn normalize(a: f64, b: f64) -> f64 {
    let a = a - b * (a / b).floor();
    if a < 0.0 { a + b } else { a }
}
