//! The prayer-time calculator: hour-angle equations, the Asr shadow-length
//! equation, and high-latitude correction.
//!
//! All intermediate values are apparent-solar hours at the observer's
//! meridian. The final conversion to UTC subtracts the longitude offset
//! without wrapping into [0, 24), so the six instants stay totally ordered
//! as absolute times even when a day's events straddle a UTC midnight.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::params::{CalculationParameters, IshaRule};
use crate::solar::{julian_day, LowPrecisionSun, SolarPositionProvider};
use crate::types::{AthanError, Coordinate, DailySchedule, HighLatitudeRule};

/// Altitude of the solar disc's upper limb at rise/set, accounting for
/// refraction (degrees below the geometric horizon).
const HORIZON_DIP: f64 = 0.833;

/// Computes a `DailySchedule` from a coordinate, a date and a fixed set of
/// calculation parameters. Pure: identical inputs give identical instants.
#[derive(Debug, Clone)]
pub struct PrayerCalculator<P = LowPrecisionSun> {
    provider: P,
    params: CalculationParameters,
}

impl PrayerCalculator<LowPrecisionSun> {
    pub fn new(params: CalculationParameters) -> Self {
        Self {
            provider: LowPrecisionSun,
            params,
        }
    }
}

impl<P: SolarPositionProvider> PrayerCalculator<P> {
    /// Uses a caller-supplied solar model instead of the built-in one.
    pub fn with_provider(provider: P, params: CalculationParameters) -> Self {
        Self { provider, params }
    }

    pub fn parameters(&self) -> &CalculationParameters {
        &self.params
    }

    /// Computes the six instants for one day at one location.
    ///
    /// # Errors
    /// `InvalidCoordinate` for non-finite or out-of-range coordinates.
    /// All other inputs are total.
    pub fn times(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
    ) -> Result<DailySchedule, AthanError> {
        coordinate.validate()?;

        let sun = self.provider.position(julian_day(date));
        let lat = coordinate.latitude;
        let decl = sun.declination;

        // Solar noon in apparent-solar hours.
        let noon = 12.0 - sun.equation_of_time;

        // Rise/set anchors are clamped so polar geometries still yield a
        // finite night arc for the high-latitude rule to work with.
        let sunrise = noon - hour_angle(HORIZON_DIP, lat, decl, true);
        let sunset = noon + hour_angle(HORIZON_DIP, lat, decl, true);

        // Twilight events are left unclamped: NaN means the sun never
        // reaches the angle, and the high-latitude rule takes over.
        let mut fajr = noon - hour_angle(self.params.fajr_angle, lat, decl, false);

        let asr = noon + asr_hour_angle(self.params.madhab.shadow_factor(), lat, decl);

        // Night arc from sunset to (approximately) the next sunrise.
        let night = 24.0 - (sunset - sunrise);
        let (fajr_portion, isha_portion) = self.night_portions(night);

        if !fajr.is_finite() || sunrise - fajr > fajr_portion {
            fajr = sunrise - fajr_portion;
        }

        let maghrib = to_instant(date, sunset, coordinate.longitude);
        let isha = match self.params.isha {
            IshaRule::Angle(angle) => {
                let mut isha = noon + hour_angle(angle, lat, decl, false);
                if !isha.is_finite() || isha - sunset > isha_portion {
                    isha = sunset + isha_portion;
                }
                to_instant(date, isha, coordinate.longitude)
            }
            // Anchored to the Maghrib instant so the interval is exact.
            IshaRule::Interval(minutes) => maghrib + Duration::minutes(minutes),
        };

        Ok(DailySchedule {
            date,
            fajr: to_instant(date, fajr, coordinate.longitude),
            sunrise: to_instant(date, sunrise, coordinate.longitude),
            dhuhr: to_instant(date, noon, coordinate.longitude),
            asr: to_instant(date, asr, coordinate.longitude),
            maghrib,
            isha,
        })
    }

    /// Maximum twilight extent on each side of the night, in hours.
    /// Applied symmetrically to Fajr (pre-sunrise) and Isha (post-sunset).
    fn night_portions(&self, night: f64) -> (f64, f64) {
        match self.params.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => (night / 2.0, night / 2.0),
            HighLatitudeRule::SeventhOfTheNight => (night / 7.0, night / 7.0),
            HighLatitudeRule::TwilightAngle => (
                self.params.fajr_angle / 60.0 * night,
                self.params.isha_angle_or_default() / 60.0 * night,
            ),
        }
    }
}

/// Hours between solar noon and the moment the sun's altitude is `angle`
/// degrees below the horizon. With `clamp`, degenerate geometries collapse
/// to 0 or 12 hours; without it they yield NaN.
fn hour_angle(angle: f64, latitude: f64, declination: f64, clamp: bool) -> f64 {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();

    let mut cos_h =
        (-angle.to_radians().sin() - decl.sin() * lat.sin()) / (decl.cos() * lat.cos());
    if clamp {
        cos_h = cos_h.clamp(-1.0, 1.0);
    }
    cos_h.acos().to_degrees() / 15.0
}

/// Hours from noon until an object's shadow exceeds `factor` times its
/// height plus its noon shadow. Factor 1 for Shafi, 2 for Hanafi.
fn asr_hour_angle(factor: f64, latitude: f64, declination: f64) -> f64 {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();

    // Sun altitude (negated into the depression-angle convention shared
    // with `hour_angle`) when the shadow condition is met.
    let angle = -(1.0 / (factor + (lat - decl).abs().tan()))
        .atan()
        .to_degrees();
    hour_angle(angle, latitude, declination, true)
}

/// Apparent-solar hours on `date` at `longitude` to an absolute instant.
/// Deliberately unwrapped: values outside [0, 24) land in the adjacent
/// UTC day, preserving order.
fn to_instant(date: NaiveDate, solar_hours: f64, longitude: f64) -> DateTime<Utc> {
    let utc_hours = solar_hours - longitude / 15.0;
    let millis = (utc_hours * 3_600_000.0).round() as i64;
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        + Duration::milliseconds(millis)
}
