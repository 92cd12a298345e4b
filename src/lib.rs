//! # athan
//!
//! Prayer-time calculation and derived-schedule engine: given a coordinate,
//! a calendar date and a calculation configuration, computes the six
//! canonical daily instants (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha),
//! the next upcoming prayer relative to a supplied "now", multi-day
//! schedule projections and reminder entries.
//!
//! The engine is pure: no clocks are read, nothing is persisted or fetched,
//! and every operation is a deterministic function of its inputs. Delivery
//! of reminders (notification timers, calendar export) and storage of
//! settings are the embedder's concern, reached through the `ConfigStore`
//! seam.
//!
//! ## Usage
//!
//! ```rust
//! use athan::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mecca = Coordinate::new(21.4225, 39.8262);
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let calc = PrayerCalculator::new(Method::MuslimWorldLeague.parameters());
//! let schedule = calc.times(mecca, date).unwrap();
//! assert!(schedule.fajr < schedule.isha);
//! ```

pub mod calculator;
pub mod config;
pub mod params;
pub mod qibla;
pub mod schedule;
pub mod solar;
pub mod types;

pub use calculator::PrayerCalculator;
pub use config::{ConfigStore, MemoryStore, PrayerConfig};
pub use params::{CalculationParameters, IshaRule};
pub use qibla::qibla;
pub use schedule::{next_prayer, reminders, FIXED_ISHA_LABEL};
pub use solar::{LowPrecisionSun, SolarPosition, SolarPositionProvider};
pub use types::{
    AthanError, Coordinate, DailySchedule, HighLatitudeRule, Madhab, Method, NextPrayer, Prayer,
    ReminderEntry,
};

pub mod prelude {
    pub use crate::calculator::PrayerCalculator;
    pub use crate::config::{ConfigStore, MemoryStore, PrayerConfig};
    pub use crate::params::{CalculationParameters, IshaRule};
    pub use crate::schedule::{next_prayer, reminders};
    pub use crate::types::*;
    pub use crate::{compute_prayer_times, project, qibla};
}

use chrono::NaiveDate;

/// Convenience: one day's schedule straight from a persisted config.
pub fn compute_prayer_times(
    coordinate: Coordinate,
    date: NaiveDate,
    config: &PrayerConfig,
) -> Result<DailySchedule, AthanError> {
    PrayerCalculator::new(config.parameters()).times(coordinate, date)
}

/// Iterator over consecutive daily schedules, one per calendar day.
/// Each day is computed independently on demand.
pub struct ScheduleIter<'a, P = LowPrecisionSun> {
    calculator: &'a PrayerCalculator<P>,
    coordinate: Coordinate,
    current: NaiveDate,
    remaining: u32,
}

impl<'a, P: solar::SolarPositionProvider> Iterator for ScheduleIter<'a, P> {
    type Item = Result<DailySchedule, AthanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.current;
        self.current = self.current.succ_opt()?;
        self.remaining -= 1;
        Some(self.calculator.times(self.coordinate, date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

/// Projects `days` consecutive schedules starting at `start`, in ascending
/// date order. Used for month tables and 1/7/30/365-day calendar exports.
/// Returns a lazy iterator.
pub fn project<'a, P: solar::SolarPositionProvider>(
    calculator: &'a PrayerCalculator<P>,
    coordinate: Coordinate,
    start: NaiveDate,
    days: u32,
) -> ScheduleIter<'a, P> {
    ScheduleIter {
        calculator,
        coordinate,
        current: start,
        remaining: days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mecca() -> Coordinate {
        Coordinate::new(21.4225, 39.8262)
    }

    #[test]
    fn test_project_exact_length_and_ascending() {
        let calc = PrayerCalculator::new(Method::MuslimWorldLeague.parameters());
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let month: Vec<DailySchedule> = project(&calc, mecca(), start, 31)
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(month.len(), 31);
        for (i, day) in month.iter().enumerate() {
            assert_eq!(day.date, start + chrono::Duration::days(i as i64));
            assert!(day.fajr < day.sunrise && day.sunrise < day.dhuhr);
            assert!(day.dhuhr < day.asr && day.asr < day.maghrib);
            assert!(day.maghrib < day.isha);
        }
        for pair in month.windows(2) {
            assert!(pair[0].dhuhr < pair[1].dhuhr);
        }
    }

    #[test]
    fn test_project_is_lazy_per_day() {
        // An invalid coordinate surfaces per item, not up front.
        let calc = PrayerCalculator::new(Method::MuslimWorldLeague.parameters());
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut iter = project(&calc, Coordinate::new(99.0, 0.0), start, 3);
        assert!(iter.next().unwrap().is_err());
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_project_zero_days() {
        let calc = PrayerCalculator::new(Method::MuslimWorldLeague.parameters());
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(project(&calc, mecca(), start, 0).count(), 0);
    }

    #[test]
    fn test_compute_from_default_config() {
        let cfg = PrayerConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let s = compute_prayer_times(mecca(), date, &cfg).unwrap();
        assert!(s.fajr < s.isha);
    }
}
