//! Storage locations.

use std::path::{Path, PathBuf};

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "ore-oracle-config.json";

/// Directory holding one tracking file per server or save.
pub const DATA_DIR_NAME: &str = "ore-oracle-data";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "ore-oracle";

/// Where the client keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    config_dir: PathBuf,
}

impl StoragePaths {
    /// Uses `config_dir` as the root.
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Platform config directory, falling back to the working directory.
    #[must_use]
    pub fn platform_default() -> Self {
        let root = dirs::config_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR_NAME));
        Self::new(root)
    }

    /// Root config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Global display config file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Directory of per-world tracking files.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.config_dir.join(DATA_DIR_NAME)
    }
}
