//! Settings
//!
//! Presentation preferences persisted through a name/value
//! [`SettingsStore`].

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Store key for the appearance mode.
pub const APPEARANCE_MODE_KEY: &str = "appearance_mode";

/// Store key for the sound toggle.
pub const SOUND_ENABLED_KEY: &str = "sound_enabled";

/// Error returned when an appearance mode name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown appearance mode {0:?}")]
pub struct UnknownAppearanceMode(
    /// The unrecognised name
    pub String,
);

/// Colour scheme for the presentation layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light theme
    Light,

    /// Dark theme
    #[default]
    Dark,

    /// Follow the operating system
    System,
}

impl AppearanceMode {
    /// Stored name.
    pub fn name(self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
            AppearanceMode::System => "system",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppearanceMode {
    type Err = UnknownAppearanceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            "system" => Ok(AppearanceMode::System),
            _ => Err(UnknownAppearanceMode(s.to_string())),
        }
    }
}

/// Name/value settings storage.
pub trait SettingsStore {
    /// Returns the stored value for `name`.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`, replacing any previous value.
    fn set(&mut self, name: &str, value: String);
}

/// In-memory settings store.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: FxHashMap<String, String>,
}

impl MemorySettings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), value);
    }
}

/// User preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Colour scheme
    pub appearance_mode: AppearanceMode,

    /// Whether success/error signals should be audible
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            appearance_mode: AppearanceMode::default(),
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Loads settings, falling back to defaults for missing or unreadable
    /// values.
    pub fn load(store: &impl SettingsStore) -> Self {
        let defaults = Settings::default();

        let appearance_mode = store
            .get(APPEARANCE_MODE_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.appearance_mode);

        let sound_enabled = store
            .get(SOUND_ENABLED_KEY)
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.sound_enabled);

        debug!(%appearance_mode, sound_enabled, "settings loaded");

        Settings {
            appearance_mode,
            sound_enabled,
        }
    }

    /// Writes both settings to the store.
    pub fn save(&self, store: &mut impl SettingsStore) {
        store.set(APPEARANCE_MODE_KEY, self.appearance_mode.name().to_string());
        store.set(SOUND_ENABLED_KEY, self.sound_enabled.to_string());
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_dark_with_sound() {
        let settings = Settings::default();

        assert_eq!(settings.appearance_mode, AppearanceMode::Dark);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn load_from_empty_store_uses_defaults() {
        assert_eq!(Settings::load(&MemorySettings::new()), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemorySettings::new();
        let settings = Settings {
            appearance_mode: AppearanceMode::System,
            sound_enabled: false,
        };

        settings.save(&mut store);

        assert_eq!(store.get(APPEARANCE_MODE_KEY).as_deref(), Some("system"));
        assert_eq!(store.get(SOUND_ENABLED_KEY).as_deref(), Some("false"));
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn load_accepts_capitalised_values() {
        let mut store = MemorySettings::new();

        store.set(APPEARANCE_MODE_KEY, "Light".to_string());
        store.set(SOUND_ENABLED_KEY, "True".to_string());

        let settings = Settings::load(&store);

        assert_eq!(settings.appearance_mode, AppearanceMode::Light);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn load_ignores_garbage() {
        let mut store = MemorySettings::new();

        store.set(APPEARANCE_MODE_KEY, "neon".to_string());
        store.set(SOUND_ENABLED_KEY, "maybe".to_string());

        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn appearance_mode_parse_error() {
        assert_eq!(
            "neon".parse::<AppearanceMode>(),
            Err(UnknownAppearanceMode("neon".to_string()))
        );
    }

    #[test]
    fn set_replaces_value() {
        let mut store = MemorySettings::new();

        store.set("k", "a".to_string());
        store.set("k", "b".to_string());

        assert_eq!(store.get("k").as_deref(), Some("b"));
    }
}
