use std::path::Path;

use parking_lot::RwLock;

use crate::Settings;

/// Unified config manager.
pub struct ConfigManager {
    settings: RwLock<Settings>,
}

impl ConfigManager {
    /// Create a new config manager (loads settings once and caches them).
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    /// Load from an explicit settings file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::with_settings(Settings::load_from(path)?))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Get a snapshot copy of current settings.
    pub fn get(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Replace the cached settings after validating them.
    pub fn update(&self, settings: Settings) -> anyhow::Result<()> {
        settings.validate()?;
        *self.settings.write() = settings;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
