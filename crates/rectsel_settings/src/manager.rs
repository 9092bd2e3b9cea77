use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::SelectorSettings;

/// Shared settings holder.
///
/// Several selectors can be built from one manager; each takes a snapshot on construction.
pub struct ConfigManager {
    settings: Arc<RwLock<SelectorSettings>>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// Manager over in-memory settings.
    pub fn new(settings: SelectorSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            source: None,
        }
    }

    /// Manager backed by a JSON file (loads once and caches; defaults if unreadable).
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            settings: Arc::new(RwLock::new(SelectorSettings::load_or_default(&path))),
            source: Some(path),
        }
    }

    /// Get a snapshot copy of current settings.
    pub fn get(&self) -> SelectorSettings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| SelectorSettings::default())
    }

    /// Get the shared settings reference.
    pub fn get_shared(&self) -> Arc<RwLock<SelectorSettings>> {
        Arc::clone(&self.settings)
    }

    pub fn replace(&self, settings: SelectorSettings) {
        if let Ok(mut guard) = self.settings.write() {
            *guard = settings;
        }
    }

    /// Reload settings from the backing file, if any.
    pub fn reload(&self) -> anyhow::Result<()> {
        let Some(path) = &self.source else {
            return Ok(());
        };
        let new_settings = SelectorSettings::load_from(path)?;
        self.replace(new_settings);
        Ok(())
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(SelectorSettings::default())
    }
}
