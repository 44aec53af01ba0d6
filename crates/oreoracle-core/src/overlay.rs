//! Overlay render adapter.
//!
//! The host calls [`OreOverlay::advance`] every frame. Classification only
//! reruns when the player's Y-level, biome or dimension changed since the
//! last call, or after [`OreOverlay::invalidate`]; otherwise the cached list
//! is returned as-is.

use crate::distribution::{Classifier, OreDistribution};
use crate::filter::{self, OreReading};
use crate::ore::Ore;
use crate::tier::ProbabilityTier;
use crate::tracking::TrackingState;
use oreoracle_common::{BiomeId, Dimension};
use tracing::debug;

/// What the host reports about the player each frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameState {
    /// Block Y-level of the player.
    pub y: i32,
    /// Biome at the player's position, if known.
    pub biome: Option<BiomeId>,
    /// Current dimension.
    pub dimension: Dimension,
}

impl FrameState {
    /// Creates a frame state.
    #[must_use]
    pub fn new(y: i32, biome: Option<BiomeId>, dimension: Dimension) -> Self {
        Self {
            y,
            biome,
            dimension,
        }
    }
}

/// One row handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderEntry {
    /// The ore.
    pub ore: Ore,
    /// Name shown in name mode.
    pub display_name: &'static str,
    /// Tier at the current position.
    pub tier: ProbabilityTier,
    /// ARGB color of the tier indicator.
    pub tier_color: u32,
    /// Whether to draw the peak indicator.
    pub at_peak: bool,
    /// Item shown in icon mode.
    pub icon_item: &'static str,
}

impl From<OreReading> for RenderEntry {
    fn from(reading: OreReading) -> Self {
        let spec = reading.ore.spec();
        Self {
            ore: reading.ore,
            display_name: spec.display_name,
            tier: reading.tier,
            tier_color: reading.tier.color(),
            at_peak: reading.at_peak,
            icon_item: spec.icon_item,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedFrame {
    frame: FrameState,
    entries: Vec<RenderEntry>,
}

/// Classifies, filters and orders the ores of the current dimension.
///
/// A peak is only reported for ores that spawn at the current level.
pub fn compute_entries<C: Classifier>(
    classifier: &C,
    frame: &FrameState,
    tracking: &TrackingState,
) -> Vec<RenderEntry> {
    let mut readings: Vec<OreReading> = Ore::in_dimension(frame.dimension)
        .filter_map(|ore| {
            let tier = classifier.tier(ore, frame.y, frame.biome.as_ref());
            filter::should_display(ore, tier, tracking).then(|| OreReading {
                ore,
                tier,
                at_peak: tier.spawns() && classifier.is_at_peak(ore, frame.y),
            })
        })
        .collect();
    filter::order(&mut readings);
    readings.into_iter().map(RenderEntry::from).collect()
}

/// Cached adapter between host frames and the render list.
#[derive(Debug, Clone)]
pub struct OreOverlay<C = OreDistribution> {
    classifier: C,
    cache: Option<CachedFrame>,
    recomputations: u64,
}

impl Default for OreOverlay<OreDistribution> {
    fn default() -> Self {
        Self::new()
    }
}

impl OreOverlay<OreDistribution> {
    /// Creates an overlay backed by the vanilla distribution tables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(OreDistribution)
    }
}

impl<C: Classifier> OreOverlay<C> {
    /// Creates an overlay backed by a custom classifier.
    #[must_use]
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            cache: None,
            recomputations: 0,
        }
    }

    /// Returns the ordered entries for `frame`, recomputing only on change.
    pub fn advance(&mut self, frame: &FrameState, tracking: &TrackingState) -> &[RenderEntry] {
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |cached| cached.frame != *frame);

        if stale {
            let entries = compute_entries(&self.classifier, frame, tracking);
            self.recomputations += 1;
            debug!(
                y = frame.y,
                dimension = %frame.dimension,
                count = entries.len(),
                "Recomputed ore overlay"
            );
            self.cache = Some(CachedFrame {
                frame: frame.clone(),
                entries,
            });
        }

        match &self.cache {
            Some(cached) => &cached.entries,
            None => &[],
        }
    }

    /// Forces recomputation on the next [`advance`](Self::advance).
    ///
    /// Call whenever tracking, filter or display settings change.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Entries from the last computation, if still valid.
    #[must_use]
    pub fn cached(&self) -> Option<&[RenderEntry]> {
        self.cache.as_ref().map(|cached| cached.entries.as_slice())
    }

    /// Frame the cache was computed for.
    #[must_use]
    pub fn cached_frame(&self) -> Option<&FrameState> {
        self.cache.as_ref().map(|cached| &cached.frame)
    }

    /// How many times the entry list has been recomputed.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::DisplayFilter;
    use std::cell::Cell;

    #[derive(Debug, Default)]
    struct CountingClassifier {
        tier_calls: Cell<usize>,
    }

    impl Classifier for CountingClassifier {
        fn tier(&self, ore: Ore, y: i32, biome: Option<&BiomeId>) -> ProbabilityTier {
            self.tier_calls.set(self.tier_calls.get() + 1);
            OreDistribution.tier(ore, y, biome)
        }

        fn is_at_peak(&self, ore: Ore, y: i32) -> bool {
            OreDistribution.is_at_peak(ore, y)
        }
    }

    fn overworld(y: i32) -> FrameState {
        FrameState::new(y, Some(BiomeId::vanilla("plains")), Dimension::Overworld)
    }

    #[test]
    fn test_unchanged_frame_reuses_cache() {
        let mut overlay = OreOverlay::with_classifier(CountingClassifier::default());
        let tracking = TrackingState::new();
        let frame = overworld(-59);

        let first = overlay.advance(&frame, &tracking).to_vec();
        let calls = overlay.classifier().tier_calls.get();
        assert_eq!(calls, 8);

        let second = overlay.advance(&frame, &tracking).to_vec();
        assert_eq!(first, second);
        assert_eq!(overlay.classifier().tier_calls.get(), calls);
        assert_eq!(overlay.recomputations(), 1);
    }

    #[test]
    fn test_changes_trigger_recompute() {
        let mut overlay = OreOverlay::with_classifier(CountingClassifier::default());
        let tracking = TrackingState::new();

        overlay.advance(&overworld(10), &tracking);
        overlay.advance(&overworld(11), &tracking);
        assert_eq!(overlay.recomputations(), 2);

        let meadow = FrameState::new(11, Some(BiomeId::vanilla("meadow")), Dimension::Overworld);
        overlay.advance(&meadow, &tracking);
        assert_eq!(overlay.recomputations(), 3);

        let nether = FrameState::new(11, None, Dimension::Nether);
        overlay.advance(&nether, &tracking);
        assert_eq!(overlay.recomputations(), 4);
        assert_eq!(overlay.cached_frame(), Some(&nether));
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut overlay = OreOverlay::new();
        let mut tracking = TrackingState::new();
        let frame = overworld(-59);

        let all = overlay.advance(&frame, &tracking).len();
        tracking.set_filter(DisplayFilter::Green);

        // Stale until invalidated.
        assert_eq!(overlay.advance(&frame, &tracking).len(), all);

        overlay.invalidate();
        assert!(overlay.cached().is_none());
        let green = overlay.advance(&frame, &tracking);
        assert!(green.len() < all);
        assert!(green.iter().all(|e| e.tier == ProbabilityTier::Green));
    }

    #[test]
    fn test_deepslate_level_entries() {
        let mut overlay = OreOverlay::new();
        let entries = overlay.advance(&overworld(-59), &TrackingState::new());

        let ores: Vec<_> = entries.iter().map(|e| e.ore).collect();
        // Diamond and redstone are green, iron and lapis yellow, gold red.
        // Coal, copper and emerald do not spawn here.
        assert_eq!(
            ores,
            vec![Ore::Diamond, Ore::Redstone, Ore::Iron, Ore::Lapis, Ore::Gold]
        );
        let diamond = entries
            .iter()
            .find(|e| e.ore == Ore::Diamond)
            .expect("diamond listed");
        assert!(diamond.at_peak);
        assert_eq!(diamond.tier_color, ProbabilityTier::Green.color());
        assert_eq!(diamond.icon_item, "minecraft:diamond");
    }

    #[test]
    fn test_tracked_none_tier_has_no_peak() {
        let mut tracking = TrackingState::new();
        tracking.set_filter(DisplayFilter::TrackedOnly);
        tracking.set_tracked(Ore::Coal, true);

        let entries = compute_entries(&OreDistribution, &overworld(-59), &tracking);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ore, Ore::Coal);
        assert_eq!(entries[0].tier, ProbabilityTier::None);
        assert!(!entries[0].at_peak);
    }

    #[test]
    fn test_end_has_no_entries() {
        let frame = FrameState::new(64, None, Dimension::End);
        assert!(compute_entries(&OreDistribution, &frame, &TrackingState::new()).is_empty());
    }

    #[test]
    fn test_badlands_at_max_height() {
        let frame = FrameState::new(i32::MAX, Some(BiomeId::vanilla("badlands")), Dimension::Overworld);
        let mut overlay = OreOverlay::new();
        let entries = overlay.advance(&frame, &TrackingState::new());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ore, Ore::Gold);
        assert_eq!(entries[0].tier, ProbabilityTier::Green);
        assert!(!entries[0].at_peak);
    }
}
