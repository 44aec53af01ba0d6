//! # Ore Oracle Client
//!
//! Client-side state and persistence for the ore HUD.
//!
//! This crate provides:
//! - Config and per-world tracking persistence
//! - The process-wide [`OracleClient`] state object
//! - Chat command and key action dispatch
//! - The ore selector view model
//! - A line-oriented script host used by the headless binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod commands;
pub mod config;
pub mod paths;
pub mod script;
pub mod selector;
pub mod session;
pub mod tracking_store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::{Command, Feedback, KeyAction};
    pub use crate::config::ConfigStore;
    pub use crate::paths::StoragePaths;
    pub use crate::selector::{SelectorAction, SelectorModel, SelectorRow};
    pub use crate::session::{HudFrame, OracleClient, Outcome, Screen};
    pub use crate::tracking_store::TrackingStore;
}

pub use prelude::*;
