use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from athan operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum AthanError {
    /// Latitude/longitude non-finite or outside valid range.
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in [-90, 90], north positive.
    pub latitude: f64,
    /// Longitude in [-180, 180], east positive.
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Checks range and finiteness.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` if either component is NaN, infinite,
    /// or outside its valid range.
    pub fn validate(&self) -> Result<(), AthanError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lng_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(AthanError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// The six canonical daily solar-time markers, in daily order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All markers in daily order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        write!(f, "{}", s)
    }
}

/// Jurisprudence branch affecting the Asr shadow-length threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Madhab {
    /// Shadow length equal to the object (Shafi, Maliki, Hanbali).
    Shafi,
    /// Shadow length twice the object.
    Hanafi,
}

impl Madhab {
    /// Gnomon shadow-length factor used in the Asr altitude equation.
    pub fn shadow_factor(&self) -> f64 {
        match self {
            Madhab::Shafi => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Madhab::Shafi => "Shafi",
            Madhab::Hanafi => "Hanafi",
        }
    }
}

impl Default for Madhab {
    fn default() -> Self {
        Self::Shafi
    }
}

impl FromStr for Madhab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Shafi" => Ok(Madhab::Shafi),
            "Hanafi" => Ok(Madhab::Hanafi),
            _ => Err(()),
        }
    }
}

/// Fallback for Fajr/Isha when twilight-angle geometry fails near the poles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighLatitudeRule {
    /// Twilight never farther than half the night from sunrise/sunset.
    MiddleOfTheNight,
    /// Twilight never farther than one seventh of the night.
    SeventhOfTheNight,
    /// Portion proportional to the configured twilight angle.
    TwilightAngle,
}

impl HighLatitudeRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighLatitudeRule::MiddleOfTheNight => "MiddleOfTheNight",
            HighLatitudeRule::SeventhOfTheNight => "SeventhOfTheNight",
            HighLatitudeRule::TwilightAngle => "TwilightAngle",
        }
    }
}

impl Default for HighLatitudeRule {
    fn default() -> Self {
        Self::MiddleOfTheNight
    }
}

impl FromStr for HighLatitudeRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MiddleOfTheNight" => Ok(HighLatitudeRule::MiddleOfTheNight),
            "SeventhOfTheNight" => Ok(HighLatitudeRule::SeventhOfTheNight),
            "TwilightAngle" => Ok(HighLatitudeRule::TwilightAngle),
            _ => Err(()),
        }
    }
}

/// Named regional calculation conventions. Each implies fixed twilight
/// depression angles (or a minute-based Isha interval) — see
/// `Method::parameters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    MuslimWorldLeague,
    UmmAlQura,
    Egyptian,
    Karachi,
    Dubai,
    Qatar,
    Kuwait,
    MoonsightingCommittee,
    NorthAmerica,
    Singapore,
    Tehran,
    Turkey,
}

impl Method {
    /// All conventions, for iteration in tests and settings UIs.
    pub const ALL: [Method; 12] = [
        Method::MuslimWorldLeague,
        Method::UmmAlQura,
        Method::Egyptian,
        Method::Karachi,
        Method::Dubai,
        Method::Qatar,
        Method::Kuwait,
        Method::MoonsightingCommittee,
        Method::NorthAmerica,
        Method::Singapore,
        Method::Tehran,
        Method::Turkey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::MuslimWorldLeague => "MuslimWorldLeague",
            Method::UmmAlQura => "UmmAlQura",
            Method::Egyptian => "Egyptian",
            Method::Karachi => "Karachi",
            Method::Dubai => "Dubai",
            Method::Qatar => "Qatar",
            Method::Kuwait => "Kuwait",
            Method::MoonsightingCommittee => "MoonsightingCommittee",
            Method::NorthAmerica => "NorthAmerica",
            Method::Singapore => "Singapore",
            Method::Tehran => "Tehran",
            Method::Turkey => "Turkey",
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::MuslimWorldLeague
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or(())
    }
}

/// The six instants of one day at one location. Built fresh per
/// (date, coordinate, parameters) triple; never mutated.
///
/// Invariant: fajr < sunrise < dhuhr < asr < maghrib < isha, strictly,
/// for every coordinate within the operating range (latitudes where the
/// sun still crosses the horizon) after high-latitude correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
}

impl DailySchedule {
    /// The instant of a given marker.
    pub fn time_of(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// (marker, instant) pairs in daily order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.time_of(p)))
    }
}

/// The next upcoming prayer relative to a supplied "now".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub time: DateTime<Utc>,
}

/// A single reminder to be delivered by an external timer or calendar
/// exporter. The engine only generates these; lifecycle belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderEntry {
    pub label: String,
    pub fire_at: DateTime<Utc>,
}
