//! Settings persistence seam. The engine never touches storage itself;
//! callers hand in a `ConfigStore` capability and get a normalized
//! `PrayerConfig` back, defaults substituted for anything missing or
//! unrecognized. Past this point enum values are closed and unvalidated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::params::CalculationParameters;
use crate::types::{HighLatitudeRule, Madhab, Method};

/// Storage key for the calculation method.
pub const KEY_METHOD: &str = "method";
/// Storage key for the madhab.
pub const KEY_MADHAB: &str = "madhab";
/// Storage key for the high-latitude rule.
pub const KEY_HIGH_LAT_RULE: &str = "highLatRule";

/// Opaque string key-value storage supplied by the embedder.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The persisted settings triple with hard-coded defaults
/// (MuslimWorldLeague / Shafi / MiddleOfTheNight).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrayerConfig {
    pub method: Method,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
}

impl PrayerConfig {
    /// Reads the three keys, falling back to the default for any value
    /// that is absent or does not parse.
    pub fn load(store: &impl ConfigStore) -> Self {
        Self {
            method: store
                .get(KEY_METHOD)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            madhab: store
                .get(KEY_MADHAB)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            high_latitude_rule: store
                .get(KEY_HIGH_LAT_RULE)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Writes the three string forms back.
    pub fn save(&self, store: &mut impl ConfigStore) {
        store.set(KEY_METHOD, self.method.as_str());
        store.set(KEY_MADHAB, self.madhab.as_str());
        store.set(KEY_HIGH_LAT_RULE, self.high_latitude_rule.as_str());
    }

    /// Resolves the method's twilight constants and applies the madhab
    /// and high-latitude choices.
    pub fn parameters(&self) -> CalculationParameters {
        self.method
            .parameters()
            .madhab(self.madhab)
            .high_latitude_rule(self.high_latitude_rule)
    }
}

/// In-memory store for tests and embedders without platform storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}
