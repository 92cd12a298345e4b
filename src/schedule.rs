//! Derived-schedule operations: next-prayer lookup and reminder projection.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use smallvec::SmallVec;

use crate::types::{DailySchedule, NextPrayer, Prayer, ReminderEntry};

/// Label on the extra reminder produced by a fixed Isha clock time,
/// distinct from the solar Isha entry.
pub const FIXED_ISHA_LABEL: &str = "Isha Reminder (custom time)";

/// Returns the first prayer strictly after `now`, scanning in daily order.
///
/// After Isha has passed, returns Fajr at `schedule.fajr + 24h`. This is a
/// known approximation: the following day's true Fajr drifts by up to a few
/// minutes, but callers depend on the answer being cheap, so the solar
/// position is deliberately not recomputed here.
pub fn next_prayer(schedule: &DailySchedule, now: DateTime<Utc>) -> NextPrayer {
    for (prayer, time) in schedule.iter() {
        if time > now {
            return NextPrayer { prayer, time };
        }
    }
    NextPrayer {
        prayer: Prayer::Fajr,
        time: schedule.fajr + Duration::hours(24),
    }
}

/// Projects one reminder per canonical prayer, each firing `offset_minutes`
/// before its instant, in daily order. A supplied `fixed_isha` wall-clock
/// time appends one extra entry at that literal time on the schedule's date,
/// with no offset applied.
///
/// `offset_minutes` is used as given; callers coerce it to a minimum of 1.
pub fn reminders(
    schedule: &DailySchedule,
    offset_minutes: i64,
    fixed_isha: Option<NaiveTime>,
) -> SmallVec<[ReminderEntry; 7]> {
    let mut entries: SmallVec<[ReminderEntry; 7]> = SmallVec::new();
    for (prayer, time) in schedule.iter() {
        entries.push(ReminderEntry {
            label: prayer.to_string(),
            fire_at: time - Duration::minutes(offset_minutes),
        });
    }
    if let Some(clock) = fixed_isha {
        entries.push(ReminderEntry {
            label: FIXED_ISHA_LABEL.to_string(),
            fire_at: schedule.date.and_time(clock).and_utc(),
        });
    }
    entries
}
