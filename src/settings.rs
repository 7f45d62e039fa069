//! Game settings and preferences
//!
//! Persisted as a small JSON file in the working directory. Match scores
//! are never written to disk.

use std::fs;

use serde::{Deserialize, Serialize};

/// Frontend preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Points either player needs for the demo match to end
    pub points_to_play: u32,
    /// Dump the final match state as JSON at debug level on exit
    pub dump_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            points_to_play: 3,
            dump_state: false,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "pong-settings.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", Self::FILE_NAME);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk, best effort
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(Self::FILE_NAME, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to encode settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            points_to_play: 7,
            dump_state: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(serde_json::from_str::<Settings>("{\"points_to_play\": -1}").is_err());
    }
}
