//! Probability tiers.

use serde::{Deserialize, Serialize};

/// Discrete spawn-likelihood classification for an ore at a Y-level.
///
/// The derived ordering is display priority: `Green` sorts first and
/// `None` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbabilityTier {
    /// Peak concentration.
    Green,
    /// Moderate concentration.
    Yellow,
    /// Sparse.
    Red,
    /// Does not spawn here.
    None,
}

impl ProbabilityTier {
    /// All tiers in priority order.
    pub const ALL: [Self; 4] = [Self::Green, Self::Yellow, Self::Red, Self::None];

    /// ARGB color used for the tier indicator.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Green => 0xFF55_FF55,
            Self::Yellow => 0xFFFF_FF55,
            Self::Red => 0xFFFF_5555,
            Self::None => 0xFF88_8888,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::None => "None",
        }
    }

    /// Whether the ore spawns at all at this tier.
    #[must_use]
    pub const fn spawns(self) -> bool {
        !matches!(self, Self::None)
    }
}
