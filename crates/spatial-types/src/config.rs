//! User settings and search tuning.
//!
//! Settings come either from a TOML file (snake_case keys) or from a JSON
//! dump of the extension's key/value settings store (camelCase keys, as the
//! popup writes them). Every field is optional; missing keys take the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatialError};
use crate::input::NavigationProfile;

/// Empirically tuned constants of the directional scan and scroll-retry
/// loop. None of these values are load-bearing beyond "small enough not to
/// skip elements, large enough not to flood the hit-tester".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
    /// Distance between raster samples, in pixels.
    #[serde(alias = "scanInterval")]
    pub scan_interval: f32,
    /// Minimum samples across each axis of the scan region.
    #[serde(alias = "minSamples")]
    pub min_samples: u32,
    /// Pixels scrolled per retry step.
    #[serde(alias = "scrollStep")]
    pub scroll_step: f32,
    /// Wait after a programmatic scroll before searching again.
    #[serde(alias = "settleDelayMs")]
    pub settle_delay_ms: u32,
    /// Recursion cap for readout redirects and candidate substitution.
    #[serde(alias = "maxDepth")]
    pub max_depth: u8,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            scan_interval: 15.0,
            min_samples: 3,
            scroll_step: 300.0,
            settle_delay_ms: 50,
            max_depth: 8,
        }
    }
}

/// Navigation and feedback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    #[serde(alias = "extensionEnabled")]
    pub extension_enabled: bool,
    #[serde(alias = "navigationType")]
    pub navigation_type: NavigationProfile,
    pub mute: bool,
    #[serde(alias = "spatializeAudio")]
    pub spatialize_audio: bool,
    /// Speech rate handed to the synthesizer (words per minute).
    #[serde(alias = "voiceSpeed")]
    pub voice_speed: u32,
    #[serde(alias = "scrollFeedback")]
    pub scroll_feedback: bool,
    #[serde(alias = "spatializeScrollFeedback")]
    pub spatialize_scroll_feedback: bool,
    #[serde(alias = "edgeFeedback")]
    pub edge_feedback: bool,
    #[serde(alias = "blankRegionNavigationFeedback")]
    pub blank_region_navigation_feedback: bool,
    #[serde(alias = "leftStereoCutoff")]
    pub left_stereo_cutoff: f32,
    #[serde(alias = "rightStereoCutoff")]
    pub right_stereo_cutoff: f32,
    #[serde(alias = "detailedLogging")]
    pub detailed_logging: bool,
    pub tuning: SearchTuning,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            extension_enabled: true,
            navigation_type: NavigationProfile::ArrowKeys,
            mute: false,
            spatialize_audio: true,
            voice_speed: 175,
            scroll_feedback: true,
            spatialize_scroll_feedback: true,
            edge_feedback: false,
            blank_region_navigation_feedback: false,
            left_stereo_cutoff: -1.0,
            right_stereo_cutoff: 1.0,
            detailed_logging: false,
            tuning: SearchTuning::default(),
        }
    }
}

impl NavSettings {
    /// Parse and validate settings from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate settings from a JSON settings-store dump.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from disk. `.json` files are parsed as an extension
    /// settings export; anything else as TOML.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loading navigation settings from {}", path.display());
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// Reject values the navigator cannot work with.
    pub fn validate(&self) -> Result<()> {
        let cutoff_range = -1.0..=1.0;
        if !cutoff_range.contains(&self.left_stereo_cutoff)
            || !cutoff_range.contains(&self.right_stereo_cutoff)
        {
            return Err(SpatialError::Config(
                "stereo cutoffs must lie within [-1, 1]".into(),
            ));
        }
        if self.left_stereo_cutoff > self.right_stereo_cutoff {
            return Err(SpatialError::Config(format!(
                "left stereo cutoff {} exceeds right cutoff {}",
                self.left_stereo_cutoff, self.right_stereo_cutoff
            )));
        }
        if self.voice_speed == 0 {
            return Err(SpatialError::Config("voice_speed must be positive".into()));
        }
        let t = &self.tuning;
        if t.scan_interval.is_nan() || t.scan_interval < 1.0 {
            return Err(SpatialError::Config(
                "tuning.scan_interval must be at least 1px".into(),
            ));
        }
        if t.scroll_step.is_nan() || t.scroll_step <= 0.0 {
            return Err(SpatialError::Config(
                "tuning.scroll_step must be positive".into(),
            ));
        }
        if t.min_samples == 0 || t.max_depth == 0 {
            return Err(SpatialError::Config(
                "tuning.min_samples and tuning.max_depth must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let s = NavSettings::default();
        assert!(s.extension_enabled);
        assert_eq!(s.navigation_type, NavigationProfile::ArrowKeys);
        assert!(!s.mute);
        assert!(s.spatialize_audio);
        assert_eq!(s.voice_speed, 175);
        assert!(s.scroll_feedback);
        assert!(!s.edge_feedback);
        assert_eq!(s.left_stereo_cutoff, -1.0);
        assert_eq!(s.right_stereo_cutoff, 1.0);
        assert_eq!(s.tuning.scan_interval, 15.0);
        assert_eq!(s.tuning.scroll_step, 300.0);
        assert_eq!(s.tuning.settle_delay_ms, 50);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn toml_partial_overrides() {
        let s = NavSettings::from_toml_str(
            r#"
            navigation_type = "wasd"
            mute = true

            [tuning]
            scroll_step = 120.0
            "#,
        )
        .unwrap();
        assert_eq!(s.navigation_type, NavigationProfile::Wasd);
        assert!(s.mute);
        assert_eq!(s.tuning.scroll_step, 120.0);
        assert_eq!(s.tuning.scan_interval, 15.0);
        assert_eq!(s.voice_speed, 175);
    }

    #[test]
    fn json_store_keys_are_camel_case() {
        let s = NavSettings::from_json_str(
            r#"{"navigationType":"wasd","voiceSpeed":220,"leftStereoCutoff":-0.5,"edgeFeedback":true}"#,
        )
        .unwrap();
        assert_eq!(s.navigation_type, NavigationProfile::Wasd);
        assert_eq!(s.voice_speed, 220);
        assert_eq!(s.left_stereo_cutoff, -0.5);
        assert!(s.edge_feedback);
    }

    #[test]
    fn inverted_cutoffs_rejected() {
        let err = NavSettings::from_toml_str(
            "left_stereo_cutoff = 0.5\nright_stereo_cutoff = -0.5\n",
        )
        .unwrap_err();
        assert!(matches!(err, SpatialError::Config(_)));
    }

    #[test]
    fn cutoff_out_of_range_rejected() {
        let err = NavSettings::from_json_str(r#"{"rightStereoCutoff": 3.0}"#).unwrap_err();
        assert!(format!("{err}").contains("[-1, 1]"));
    }

    #[test]
    fn zero_scan_interval_rejected() {
        let err = NavSettings::from_toml_str("[tuning]\nscan_interval = 0.0\n").unwrap_err();
        assert!(format!("{err}").contains("scan_interval"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = NavSettings::from_toml_str("mute = ").unwrap_err();
        assert!(matches!(err, SpatialError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = NavSettings::load(std::path::Path::new("/nonexistent/nav.toml")).unwrap_err();
        assert!(matches!(err, SpatialError::Io(_)));
    }

    #[test]
    fn load_picks_format_from_extension() {
        let dir = std::env::temp_dir().join(format!("spatial-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let json = dir.join("export.JSON");
        std::fs::write(&json, r#"{"voiceSpeed": 240}"#).unwrap();
        let toml = dir.join("nav.toml");
        std::fs::write(&toml, "voice_speed = 150\n").unwrap();

        assert_eq!(NavSettings::load(&json).unwrap().voice_speed, 240);
        assert_eq!(NavSettings::load(&toml).unwrap().voice_speed, 150);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
