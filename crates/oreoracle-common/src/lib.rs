//! # Ore Oracle Common
//!
//! Shared types for the Ore Oracle workspace.
//!
//! This crate provides the vocabulary every other crate speaks:
//! - Dimensions reported by the host
//! - Identifier types (biomes, world identities)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod dimension;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dimension::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
