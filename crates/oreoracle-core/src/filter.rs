//! Display filter policy: which classified ores reach the HUD, and in
//! what order.

use crate::ore::Ore;
use crate::tier::ProbabilityTier;
use crate::tracking::{DisplayFilter, TrackingState};

/// One ore's classification at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OreReading {
    /// The ore.
    pub ore: Ore,
    /// Its tier here.
    pub tier: ProbabilityTier,
    /// Whether the player stands at one of its indicated peaks.
    pub at_peak: bool,
}

/// Whether an ore at `tier` should be shown under `tracking`.
///
/// In explicit-tracking mode only tracked ores are shown, even at
/// [`ProbabilityTier::None`]. Otherwise tracking is ignored and the tier
/// must spawn and be at least as likely as the filter threshold.
#[must_use]
pub fn should_display(ore: Ore, tier: ProbabilityTier, tracking: &TrackingState) -> bool {
    match tracking.filter() {
        DisplayFilter::TrackedOnly => tracking.is_tracked(ore),
        filter => {
            tier.spawns() && filter.threshold().is_some_and(|threshold| tier <= threshold)
        }
    }
}

/// Sorts readings by tier priority, then catalog order.
pub fn order(readings: &mut [OreReading]) {
    readings.sort_by_key(|reading| (reading.tier, reading.ore));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_filter(filter: DisplayFilter) -> TrackingState {
        let mut state = TrackingState::new();
        state.set_filter(filter);
        state
    }

    #[test]
    fn test_yellow_filter() {
        let state = with_filter(DisplayFilter::Yellow);
        assert!(should_display(Ore::Coal, ProbabilityTier::Green, &state));
        assert!(should_display(Ore::Coal, ProbabilityTier::Yellow, &state));
        assert!(!should_display(Ore::Coal, ProbabilityTier::Red, &state));
        assert!(!should_display(Ore::Coal, ProbabilityTier::None, &state));
    }

    #[test]
    fn test_green_and_red_filters() {
        let green = with_filter(DisplayFilter::Green);
        assert!(should_display(Ore::Iron, ProbabilityTier::Green, &green));
        assert!(!should_display(Ore::Iron, ProbabilityTier::Yellow, &green));

        let red = with_filter(DisplayFilter::Red);
        assert!(should_display(Ore::Iron, ProbabilityTier::Red, &red));
        assert!(!should_display(Ore::Iron, ProbabilityTier::None, &red));
    }

    #[test]
    fn test_tier_filter_ignores_tracking() {
        let mut state = with_filter(DisplayFilter::Green);
        state.set_tracked(Ore::Gold, true);
        assert!(!should_display(Ore::Gold, ProbabilityTier::Red, &state));
    }

    #[test]
    fn test_tracked_only_mode() {
        let mut state = with_filter(DisplayFilter::TrackedOnly);
        state.set_tracked(Ore::Diamond, true);

        assert!(!should_display(Ore::Coal, ProbabilityTier::Green, &state));
        assert!(should_display(Ore::Diamond, ProbabilityTier::Red, &state));
        assert!(should_display(Ore::Diamond, ProbabilityTier::None, &state));
    }

    #[test]
    fn test_order_by_tier_then_catalog() {
        let reading = |ore, tier| OreReading {
            ore,
            tier,
            at_peak: false,
        };
        let mut readings = vec![
            reading(Ore::Lapis, ProbabilityTier::Red),
            reading(Ore::Redstone, ProbabilityTier::Green),
            reading(Ore::Gold, ProbabilityTier::None),
            reading(Ore::Copper, ProbabilityTier::Red),
            reading(Ore::Diamond, ProbabilityTier::Green),
            reading(Ore::Iron, ProbabilityTier::Yellow),
        ];
        order(&mut readings);

        let ores: Vec<_> = readings.iter().map(|r| r.ore).collect();
        assert_eq!(
            ores,
            vec![
                Ore::Diamond,
                Ore::Redstone,
                Ore::Iron,
                Ore::Copper,
                Ore::Lapis,
                Ore::Gold
            ]
        );
    }
}
