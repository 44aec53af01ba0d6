//! Per-world tracking persistence.
//!
//! Each server or singleplayer save gets its own file under the data
//! directory, named after its sanitized identity. While no world is
//! joined the store holds a transient state that is never written.

use crate::config::write_json;
use oreoracle_common::{StorageError, StorageResult, WorldIdentity};
use oreoracle_core::{DisplayFilter, Ore, TrackingState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Tracking state for the current world and the file it lives in.
#[derive(Debug, Clone)]
pub struct TrackingStore {
    data_dir: PathBuf,
    identity: Option<WorldIdentity>,
    state: TrackingState,
}

impl TrackingStore {
    /// Creates a store rooted at `data_dir` with no world joined.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            identity: None,
            state: TrackingState::new(),
        }
    }

    /// File backing `identity`.
    #[must_use]
    pub fn file_for(&self, identity: &WorldIdentity) -> PathBuf {
        self.data_dir.join(format!("{}.json", identity.file_stem()))
    }

    /// Switches to `identity`, loading its saved state or defaults.
    pub fn join(&mut self, identity: WorldIdentity) {
        let path = self.file_for(&identity);
        self.state = match Self::read(&path) {
            Ok(Some(state)) => {
                info!("Loaded tracking for {identity}");
                state
            },
            Ok(None) => {
                info!("No tracking saved for {identity}, starting fresh");
                TrackingState::new()
            },
            Err(e) => {
                warn!("Failed to load tracking for {identity}: {e}; using defaults");
                TrackingState::new()
            },
        };
        self.identity = Some(identity);
    }

    /// Leaves the current world. The state resets to defaults.
    pub fn clear(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!("Left {identity}");
        }
        self.state = TrackingState::new();
    }

    /// Reads a tracking file; `Ok(None)` when it does not exist.
    pub fn read(path: &Path) -> StorageResult<Option<TrackingState>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Writes the current state. Does nothing outside a world.
    pub fn save(&self) -> StorageResult<()> {
        let Some(identity) = &self.identity else {
            return Ok(());
        };
        write_json(&self.file_for(identity), &self.state)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("Failed to save tracking: {e}");
        }
    }

    /// Current world, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&WorldIdentity> {
        self.identity.as_ref()
    }

    /// Current tracking state.
    #[must_use]
    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// Tracks or untracks `ore` and saves. Returns whether anything changed.
    pub fn set_tracked(&mut self, ore: Ore, tracked: bool) -> bool {
        let changed = self.state.set_tracked(ore, tracked);
        if changed {
            self.persist();
        }
        changed
    }

    /// Flips tracking for `ore` and saves, returning the new state.
    pub fn toggle(&mut self, ore: Ore) -> bool {
        let tracked = self.state.toggle(ore);
        self.persist();
        tracked
    }

    /// Replaces the display filter and saves.
    pub fn set_filter(&mut self, filter: DisplayFilter) {
        self.state.set_filter(filter);
        self.persist();
    }
}
