//! Prints today's schedule and qibla bearing for Mecca.
//!
//! Run with: cargo run --example mecca_today

use athan::prelude::*;
use chrono::Utc;

fn main() {
    let mecca = Coordinate::new(21.4225, 39.8262);
    let now = Utc::now();
    let today = now.date_naive();

    let config = PrayerConfig::default();
    let calc = PrayerCalculator::new(config.parameters());
    let schedule = calc.times(mecca, today).unwrap();

    println!("Prayer times for Mecca on {} (UTC):", today);
    for (prayer, time) in schedule.iter() {
        println!("  {:<8} {}", prayer.to_string(), time.format("%H:%M"));
    }

    let next = next_prayer(&schedule, now);
    println!("Next prayer: {} at {}", next.prayer, next.time.format("%H:%M"));

    let london = Coordinate::new(51.5074, -0.1278);
    println!("Qibla from London: {:.1} degrees", qibla(london));
}
