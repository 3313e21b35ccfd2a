use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::*;

/// How pointer-down targets are mapped to corner handles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerDetection {
    /// The target element carries the handle class plus a corner class.
    #[default]
    MarkerClass,
    /// Hit-test the pointer against the corners of the current selection.
    HitRadius,
}

/// Selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// A drawn selection is kept only if both sides are strictly larger than this.
    #[serde(default = "default_min_confirm_size")]
    pub min_confirm_size: i32,
    /// A resize frame is accepted only if both sides are at least this.
    #[serde(default = "default_min_resize_size")]
    pub min_resize_size: i32,

    #[serde(default)]
    pub corner_detection: CornerDetection,
    #[serde(default = "default_handle_hit_radius")]
    pub handle_hit_radius: i32,

    // Element marker classes
    #[serde(default = "default_handle_class")]
    pub handle_class: String,
    #[serde(default = "default_confirm_class")]
    pub confirm_class: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_confirm_size: default_min_confirm_size(),
            min_resize_size: default_min_resize_size(),
            corner_detection: CornerDetection::default(),
            handle_hit_radius: default_handle_hit_radius(),
            handle_class: default_handle_class(),
            confirm_class: default_confirm_class(),
        }
    }
}

impl Settings {
    fn settings_dir() -> PathBuf {
        PathBuf::from(default_config_path()).join(".region_capture")
    }

    pub fn primary_settings_path() -> PathBuf {
        Self::settings_dir().join("settings.json")
    }

    /// Load settings from the primary path.
    ///
    /// Falls back to defaults (and persists them) if loading fails.
    pub fn load() -> Self {
        let primary = Self::primary_settings_path();
        match Self::load_from(&primary) {
            Ok(settings) => settings,
            Err(e) => {
                debug!("using default settings ({e:#})");
                let default_settings = Self::default();
                if let Err(e) = default_settings.save_to(&primary) {
                    warn!("failed to persist default settings: {e:#}");
                }
                default_settings
            }
        }
    }

    /// Load and validate settings from `path`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the primary path.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::primary_settings_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min_confirm_size >= 0,
            "min_confirm_size must not be negative (got {})",
            self.min_confirm_size
        );
        anyhow::ensure!(
            self.min_resize_size >= 0,
            "min_resize_size must not be negative (got {})",
            self.min_resize_size
        );
        anyhow::ensure!(
            self.handle_hit_radius > 0,
            "handle_hit_radius must be positive (got {})",
            self.handle_hit_radius
        );
        anyhow::ensure!(!self.handle_class.is_empty(), "handle_class must not be empty");
        anyhow::ensure!(!self.confirm_class.is_empty(), "confirm_class must not be empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_selection_rules() {
        let s = Settings::default();
        assert_eq!(s.min_confirm_size, 5);
        assert_eq!(s.min_resize_size, 10);
        assert_eq!(s.handle_hit_radius, 8);
        assert_eq!(s.corner_detection, CornerDetection::MarkerClass);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let s: Settings =
            serde_json::from_str(r#"{"corner_detection":"hit_radius","handle_hit_radius":12}"#)
                .unwrap();
        assert_eq!(s.corner_detection, CornerDetection::HitRadius);
        assert_eq!(s.handle_hit_radius, 12);
        assert_eq!(s.min_resize_size, 10);
        assert_eq!(s.confirm_class, "confirm-button");
    }

    #[test]
    fn save_then_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = Settings {
            min_confirm_size: 2,
            ..Settings::default()
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), s);
    }

    #[test]
    fn invalid_settings_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"handle_hit_radius":0}"#).unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("handle_hit_radius"));
    }

    #[test]
    fn empty_class_names_are_invalid() {
        let s = Settings {
            confirm_class: String::new(),
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }
}
