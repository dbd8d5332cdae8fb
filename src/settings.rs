//! Player preferences
//!
//! Kept apart from [`Tuning`](crate::Tuning): these change how the game
//! looks and sounds, never how it plays.

use serde::{Deserialize, Serialize};

use crate::tuning::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Suppress every sound cue (toggled from the help screen)
    pub muted: bool,
    /// Draw the dog steadily instead of flashing it after a loss
    pub reduced_motion: bool,
}

impl Settings {
    /// Parse settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Sound {}", if self.muted { "off" } else { "on" });
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_mute() {
        let mut settings = Settings::default();
        assert!(!settings.muted);
        assert!(settings.toggle_mute());
        assert!(!settings.toggle_mute());
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{ "reduced_motion": true }"#).unwrap();
        assert!(settings.reduced_motion);
        assert!(!settings.muted);
    }
}
