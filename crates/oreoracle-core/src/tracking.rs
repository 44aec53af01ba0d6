//! Per-world tracking state.
//!
//! Each server or save has its own set of explicitly tracked ores and a
//! display filter. The filter is either a cumulative tier threshold or the
//! explicit-tracking mode; being one enum, the two can never be active at
//! the same time.

use crate::ore::Ore;
use crate::tier::ProbabilityTier;
use oreoracle_common::CommandError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::warn;

/// Which ores the overlay shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayFilter {
    /// Only `Green` ores.
    #[serde(rename = "GREEN")]
    Green,
    /// `Green` and `Yellow` ores.
    #[serde(rename = "YELLOW")]
    Yellow,
    /// Every ore that spawns at the current level.
    #[default]
    #[serde(rename = "RED")]
    Red,
    /// Only explicitly tracked ores, whatever their tier.
    #[serde(rename = "NONE")]
    TrackedOnly,
}

impl DisplayFilter {
    /// All filters, tier thresholds first.
    pub const ALL: [Self; 4] = [Self::Green, Self::Yellow, Self::Red, Self::TrackedOnly];

    /// The least likely tier still shown, or `None` in explicit-tracking mode.
    #[must_use]
    pub const fn threshold(self) -> Option<ProbabilityTier> {
        match self {
            Self::Green => Some(ProbabilityTier::Green),
            Self::Yellow => Some(ProbabilityTier::Yellow),
            Self::Red => Some(ProbabilityTier::Red),
            Self::TrackedOnly => None,
        }
    }

    /// Whether this is the explicit-tracking mode.
    #[must_use]
    pub const fn is_tracked_only(self) -> bool {
        matches!(self, Self::TrackedOnly)
    }

    /// Label for selector buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "All",
            Self::TrackedOnly => "Tracked",
        }
    }
}

impl FromStr for DisplayFilter {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" | "all" => Ok(Self::Red),
            "tracked" | "specific" | "none" => Ok(Self::TrackedOnly),
            _ => Err(CommandError::UnknownFilter(s.to_string())),
        }
    }
}

/// Tracked ores and display filter for one server or save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingState {
    /// Explicitly tracked ores.
    #[serde(default, deserialize_with = "deserialize_tracked")]
    tracked_ores: BTreeSet<Ore>,
    /// Active display filter.
    #[serde(default, deserialize_with = "null_as_default")]
    probability_filter: DisplayFilter,
}

impl TrackingState {
    /// Empty tracking state with the default filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `ore` is explicitly tracked.
    #[must_use]
    pub fn is_tracked(&self, ore: Ore) -> bool {
        self.tracked_ores.contains(&ore)
    }

    /// Tracked ores in catalog order.
    pub fn tracked(&self) -> impl Iterator<Item = Ore> + '_ {
        self.tracked_ores.iter().copied()
    }

    /// Tracks or untracks `ore`. Returns whether anything changed.
    pub fn set_tracked(&mut self, ore: Ore, tracked: bool) -> bool {
        if tracked {
            self.tracked_ores.insert(ore)
        } else {
            self.tracked_ores.remove(&ore)
        }
    }

    /// Flips tracking for `ore`, returning the new state.
    pub fn toggle(&mut self, ore: Ore) -> bool {
        let tracked = !self.is_tracked(ore);
        self.set_tracked(ore, tracked);
        tracked
    }

    /// Active display filter.
    #[must_use]
    pub fn filter(&self) -> DisplayFilter {
        self.probability_filter
    }

    /// Replaces the display filter.
    pub fn set_filter(&mut self, filter: DisplayFilter) {
        self.probability_filter = filter;
    }
}

/// Reads ore ids, dropping any this build does not know.
fn deserialize_tracked<'de, D>(deserializer: D) -> Result<BTreeSet<Ore>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(ids
        .into_iter()
        .filter_map(|id| {
            let ore = Ore::from_id(&id);
            if ore.is_none() {
                warn!("Ignoring unknown tracked ore id {id:?}");
            }
            ore
        })
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_all_spawning_ores() {
        let state = TrackingState::new();
        assert_eq!(state.filter(), DisplayFilter::Red);
        assert_eq!(state.tracked().count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut state = TrackingState::new();
        assert!(state.toggle(Ore::Diamond));
        assert!(state.is_tracked(Ore::Diamond));
        assert!(!state.toggle(Ore::Diamond));
        assert!(!state.is_tracked(Ore::Diamond));
    }

    #[test]
    fn test_set_tracked_reports_change() {
        let mut state = TrackingState::new();
        assert!(state.set_tracked(Ore::Iron, true));
        assert!(!state.set_tracked(Ore::Iron, true));
        assert!(state.set_tracked(Ore::Iron, false));
    }

    #[test]
    fn test_json_shape() {
        let mut state = TrackingState::new();
        state.set_tracked(Ore::AncientDebris, true);
        state.set_tracked(Ore::Coal, true);
        state.set_filter(DisplayFilter::TrackedOnly);

        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "trackedOres": ["coal", "ancient_debris"],
                "probabilityFilter": "NONE"
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut state = TrackingState::new();
        state.set_tracked(Ore::Emerald, true);
        state.set_filter(DisplayFilter::Yellow);

        let json = serde_json::to_string_pretty(&state).expect("serialize");
        let loaded: TrackingState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_lenient_load() {
        let json = r#"{"trackedOres": ["iron", "mythril"], "probabilityFilter": null}"#;
        let state: TrackingState = serde_json::from_str(json).expect("deserialize");
        assert!(state.is_tracked(Ore::Iron));
        assert_eq!(state.tracked().count(), 1);
        assert_eq!(state.filter(), DisplayFilter::Red);

        let empty: TrackingState = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(empty, TrackingState::default());
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("GREEN".parse(), Ok(DisplayFilter::Green));
        assert_eq!("all".parse(), Ok(DisplayFilter::Red));
        assert_eq!("tracked".parse(), Ok(DisplayFilter::TrackedOnly));
        assert!("blue".parse::<DisplayFilter>().is_err());
    }
}
