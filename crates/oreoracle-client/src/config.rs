//! Display config persistence.
//!
//! This module provides:
//! - Load/save of [`DisplayConfig`] as pretty JSON
//! - Fallback to defaults (and a freshly written default file) when the
//!   file is missing or malformed
//! - Save on every change

use oreoracle_common::{StorageError, StorageResult};
use oreoracle_core::DisplayConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Owns the global display config and its file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: DisplayConfig,
    path: PathBuf,
}

impl ConfigStore {
    /// Loads the config at `path`, or creates it with defaults.
    ///
    /// Never fails: storage problems are logged and defaults are used.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match Self::read(&path) {
            Ok(Some(config)) => {
                info!("Loaded display config from {}", path.display());
                Self { config, path }
            },
            Ok(None) => {
                info!("Display config not found, writing defaults");
                Self::with_defaults(path)
            },
            Err(e) => {
                warn!("Failed to load display config: {e}; using defaults");
                Self::with_defaults(path)
            },
        }
    }

    fn with_defaults(path: PathBuf) -> Self {
        let store = Self {
            config: DisplayConfig::default(),
            path,
        };
        store.persist();
        store
    }

    /// Reads and validates the file; `Ok(None)` when it does not exist.
    pub fn read(path: &Path) -> StorageResult<Option<DisplayConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        let mut config: DisplayConfig = serde_json::from_str(&contents)?;
        config.validate();
        Ok(Some(config))
    }

    /// Writes the current config.
    pub fn save(&self) -> StorageResult<()> {
        write_json(&self.path, &self.config)?;
        info!("Saved display config to {}", self.path.display());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("Failed to save display config: {e}");
        }
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// File backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change`, validates, and saves immediately.
    pub fn update<R>(&mut self, change: impl FnOnce(&mut DisplayConfig) -> R) -> R {
        let result = change(&mut self.config);
        self.config.validate();
        self.persist();
        result
    }

    /// Restores defaults and saves.
    pub fn reset_to_defaults(&mut self) {
        self.config = DisplayConfig::default();
        self.persist();
        info!("Display config reset to defaults");
    }
}

/// Writes `value` as pretty JSON, creating parent directories.
pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| StorageError::io(path, e))
}
