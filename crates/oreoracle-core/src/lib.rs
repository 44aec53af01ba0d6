//! # Ore Oracle Core
//!
//! The decision logic behind the Ore Oracle HUD.
//!
//! This crate provides:
//! - The static ore catalog
//! - Probability tiers and the biome sets that affect them
//! - The distribution classifier (tier and peak per ore/Y/biome)
//! - Per-world tracking state and the display filter policy
//! - The cached overlay render adapter
//! - HUD display config and layout math
//!
//! Everything here is pure and single-threaded; the host owns the render
//! loop and calls in once per frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod biome;
pub mod display;
pub mod distribution;
pub mod filter;
pub mod layout;
pub mod ore;
pub mod overlay;
pub mod tier;
pub mod tracking;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::biome::BiomeRule;
    pub use crate::display::*;
    pub use crate::distribution::{Classifier, OreDistribution};
    pub use crate::filter::*;
    pub use crate::layout::{HudLayout, HudRow, ScreenSize, TextMetrics};
    pub use crate::ore::*;
    pub use crate::overlay::*;
    pub use crate::tier::*;
    pub use crate::tracking::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use oreoracle_common::{BiomeId, Dimension};

    #[test]
    fn test_end_to_end_badlands_frame() {
        let mut overlay = OreOverlay::new();
        let tracking = TrackingState::new();
        let frame = FrameState::new(100, Some(BiomeId::parse("badlands")), Dimension::Overworld);

        let entries = overlay.advance(&frame, &tracking);
        let ores: Vec<_> = entries.iter().map(|e| e.ore).collect();

        // Coal and gold (badlands override) are green, copper and iron red.
        // Emerald needs mountains.
        assert_eq!(ores, vec![Ore::Coal, Ore::Gold, Ore::Copper, Ore::Iron]);
    }

    #[test]
    fn test_end_to_end_nether_tracked_only() {
        let mut overlay = OreOverlay::new();
        let mut tracking = TrackingState::new();
        tracking.set_filter(DisplayFilter::TrackedOnly);
        tracking.set_tracked(Ore::AncientDebris, true);
        tracking.set_tracked(Ore::Diamond, true);

        let frame = FrameState::new(15, None, Dimension::Nether);
        let entries = overlay.advance(&frame, &tracking);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ore, Ore::AncientDebris);
        assert!(entries[0].at_peak);
    }
}
