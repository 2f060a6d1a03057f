//! Presentation settings and preferences
//!
//! Gameplay constants are fixed at build time (see `consts`); these only
//! change how a frame is drawn. Hosts may load them from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum debris particles drawn per frame
    pub fn max_debris(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Whether to render the pulsing circles behind the playfield
    pub fn background_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }

    /// Triangles per circle/ellipse
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Errors from loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Screen shake on explosions
    pub screen_shake: bool,
    /// Debris particles
    pub particles: bool,
    /// Background splatters where jellies were sliced
    pub splatters: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            particles: true,
            splatters: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset drops purely decorative layers
        if preset == QualityPreset::Low {
            self.splatters = false;
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective debris cap
    pub fn max_debris(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_debris()
        }
    }

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "quality": "High", "reduced_motion": true }"#)
            .expect("valid settings");
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(settings.reduced_motion);
        assert!(settings.particles);
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json("{ quality: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings JSON"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(std::path::Path::new("/nonexistent/jelly-slice.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.to_string().starts_with("failed to read settings"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_low_preset() {
        let settings = Settings::from_preset(QualityPreset::Low);
        assert!(!settings.splatters);
        assert_eq!(settings.max_debris(), 100);
        assert!(!settings.quality.background_enabled());
        assert!(QualityPreset::Medium.background_enabled());
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
