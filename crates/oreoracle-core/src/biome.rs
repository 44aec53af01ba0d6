//! Biome sets that change ore distribution.
//!
//! Only two vanilla rules matter: emerald ore generates exclusively in
//! mountain biomes, and gold ore gains an extra band above its normal
//! ceiling in badlands biomes. Anything else, including modded or unknown
//! biomes, is treated as ordinary.

use oreoracle_common::BiomeId;
use serde::{Deserialize, Serialize};

/// Vanilla mountain biomes where emerald ore generates.
pub const MOUNTAIN_BIOMES: [&str; 10] = [
    "meadow",
    "cherry_grove",
    "grove",
    "snowy_slopes",
    "jagged_peaks",
    "frozen_peaks",
    "stony_peaks",
    "windswept_hills",
    "windswept_gravelly_hills",
    "windswept_forest",
];

/// Vanilla badlands biomes where gold ore generates above Y 32.
pub const BADLANDS_BIOMES: [&str; 3] = ["badlands", "wooded_badlands", "eroded_badlands"];

/// Whether the biome is one of the mountain biomes.
#[must_use]
pub fn is_mountain(biome: Option<&BiomeId>) -> bool {
    biome.is_some_and(|id| MOUNTAIN_BIOMES.iter().any(|path| id.is_vanilla(path)))
}

/// Whether the biome is one of the badlands biomes.
#[must_use]
pub fn is_badlands(biome: Option<&BiomeId>) -> bool {
    biome.is_some_and(|id| BADLANDS_BIOMES.iter().any(|path| id.is_vanilla(path)))
}

/// How an ore's distribution depends on the biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeRule {
    /// Same distribution everywhere.
    Any,
    /// Generates only in mountain biomes.
    MountainOnly,
    /// Normal bands everywhere, plus `Green` above the ceiling in badlands.
    BadlandsExtended,
}

impl BiomeRule {
    /// Whether the biome input affects classification.
    #[must_use]
    pub const fn is_biome_dependent(self) -> bool {
        !matches!(self, Self::Any)
    }
}
