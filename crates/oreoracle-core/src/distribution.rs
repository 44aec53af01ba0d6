//! Ore distribution classifier.
//!
//! Each ore's spawn range is partitioned into contiguous, inclusive bands,
//! each assigned a [`ProbabilityTier`]. The tables below are derived from the
//! vanilla distribution curves; a boundary Y-level always belongs to the
//! greener of the two bands it separates. [`validate_tables`] checks every
//! table against the catalog and should run once at start-up.
//!
//! Two ores also take the biome into account:
//! - Emerald only generates in mountain biomes.
//! - Gold is `Green` at any Y above its normal ceiling in badlands biomes.

use crate::biome::{self, BiomeRule};
use crate::ore::{Ore, OreSpec};
use crate::tier::ProbabilityTier;
use oreoracle_common::{BiomeId, TableError};

use crate::tier::ProbabilityTier::{Green, Red, Yellow};

/// An inclusive Y-range assigned a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Lowest Y in the band.
    pub lo: i32,
    /// Highest Y in the band.
    pub hi: i32,
    /// Tier for every Y in the band.
    pub tier: ProbabilityTier,
}

impl Band {
    const fn new(lo: i32, hi: i32, tier: ProbabilityTier) -> Self {
        Self { lo, hi, tier }
    }

    /// Whether `y` falls in this band.
    #[must_use]
    pub const fn contains(&self, y: i32) -> bool {
        y >= self.lo && y <= self.hi
    }
}

const COAL_BANDS: &[Band] = &[
    Band::new(0, 39, Red),
    Band::new(40, 66, Yellow),
    Band::new(67, 125, Green),
    Band::new(126, 135, Yellow),
    Band::new(136, 320, Green),
];

const COPPER_BANDS: &[Band] = &[
    Band::new(-16, -1, Red),
    Band::new(0, 31, Yellow),
    Band::new(32, 64, Green),
    Band::new(65, 96, Yellow),
    Band::new(97, 112, Red),
];

// Two triangles: the main lower one and the mountain-peak one.
const IRON_BANDS: &[Band] = &[
    Band::new(-64, -9, Yellow),
    Band::new(-8, 32, Green),
    Band::new(33, 71, Yellow),
    Band::new(72, 199, Red),
    Band::new(200, 256, Green),
    Band::new(257, 384, Red),
];

const GOLD_BANDS: &[Band] = &[
    Band::new(-64, -55, Red),
    Band::new(-54, -48, Green),
    Band::new(-47, -31, Yellow),
    Band::new(-30, -5, Green),
    Band::new(-4, 8, Yellow),
    Band::new(9, 32, Red),
];

const DIAMOND_BANDS: &[Band] = &[
    Band::new(-64, -48, Green),
    Band::new(-47, -16, Yellow),
    Band::new(-15, 16, Red),
];

const REDSTONE_BANDS: &[Band] = &[Band::new(-64, -32, Green), Band::new(-31, 15, Yellow)];

const LAPIS_BANDS: &[Band] = &[
    Band::new(-64, -17, Yellow),
    Band::new(-16, 16, Green),
    Band::new(17, 64, Yellow),
];

const EMERALD_BANDS: &[Band] = &[
    Band::new(-16, 31, Red),
    Band::new(32, 63, Yellow),
    Band::new(64, 136, Green),
    Band::new(137, 200, Yellow),
    Band::new(201, 320, Red),
];

// Shared by nether quartz and nether gold: peaks at floor and ceiling.
const NETHER_BANDS: &[Band] = &[
    Band::new(10, 22, Green),
    Band::new(23, 35, Yellow),
    Band::new(36, 94, Red),
    Band::new(95, 104, Yellow),
    Band::new(105, 117, Green),
];

const ANCIENT_DEBRIS_BANDS: &[Band] = &[Band::new(8, 22, Green), Band::new(23, 119, Red)];

/// Band table for an ore, ascending by Y.
#[must_use]
pub fn bands(ore: Ore) -> &'static [Band] {
    match ore {
        Ore::Coal => COAL_BANDS,
        Ore::Copper => COPPER_BANDS,
        Ore::Iron => IRON_BANDS,
        Ore::Gold => GOLD_BANDS,
        Ore::Diamond => DIAMOND_BANDS,
        Ore::Redstone => REDSTONE_BANDS,
        Ore::Lapis => LAPIS_BANDS,
        Ore::Emerald => EMERALD_BANDS,
        Ore::NetherQuartz | Ore::NetherGold => NETHER_BANDS,
        Ore::AncientDebris => ANCIENT_DEBRIS_BANDS,
    }
}

/// Source of tier and peak classifications.
///
/// The overlay adapter is generic over this so tests can count calls.
pub trait Classifier {
    /// Probability tier for `ore` at `y` in `biome`.
    fn tier(&self, ore: Ore, y: i32, biome: Option<&BiomeId>) -> ProbabilityTier;

    /// Whether `y` is within one block of an indicated peak of `ore`.
    fn is_at_peak(&self, ore: Ore, y: i32) -> bool;
}

/// The vanilla distribution tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OreDistribution;

impl Classifier for OreDistribution {
    fn tier(&self, ore: Ore, y: i32, biome: Option<&BiomeId>) -> ProbabilityTier {
        tier(ore, y, biome)
    }

    fn is_at_peak(&self, ore: Ore, y: i32) -> bool {
        is_at_peak(ore, y)
    }
}

/// Probability tier for `ore` at `y`, given the biome the player stands in.
///
/// Total over its inputs: out-of-range Y-levels and unknown biomes yield
/// ordinary results, never errors.
#[must_use]
pub fn tier(ore: Ore, y: i32, biome: Option<&BiomeId>) -> ProbabilityTier {
    let spec = ore.spec();
    match spec.biome_rule {
        BiomeRule::MountainOnly if !biome::is_mountain(biome) => return ProbabilityTier::None,
        BiomeRule::BadlandsExtended if y > spec.max_y && biome::is_badlands(biome) => {
            return Green;
        },
        _ => {},
    }

    bands(ore)
        .iter()
        .find(|band| band.contains(y))
        .map_or(ProbabilityTier::None, |band| band.tier)
}

/// Whether `y` is within ±1 of one of the ore's indicated peaks.
#[must_use]
pub fn is_at_peak(ore: Ore, y: i32) -> bool {
    let spec = ore.spec();
    spec.peak_indicator
        && spec
            .peaks
            .iter()
            .filter(|peak| peak.indicates)
            .any(|peak| y.abs_diff(peak.y) <= 1)
}

/// Checks one ore's band and peak tables against its catalog entry.
pub fn validate(ore: Ore) -> Result<(), TableError> {
    validate_table(ore.spec(), bands(ore))
}

/// Checks that `table` partitions exactly `spec`'s range into ascending,
/// contiguous bands and that the peaks are ordered and inside the range.
pub fn validate_table(spec: &OreSpec, table: &[Band]) -> Result<(), TableError> {
    let id = spec.id;

    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return Err(TableError::Empty { ore: id });
    };

    for band in table {
        if band.lo > band.hi {
            return Err(TableError::InvertedBand {
                ore: id,
                lo: band.lo,
                hi: band.hi,
            });
        }
        if band.tier == ProbabilityTier::None {
            return Err(TableError::NoneBand {
                ore: id,
                lo: band.lo,
                hi: band.hi,
            });
        }
    }

    for pair in table.windows(2) {
        let expected = pair[0].hi + 1;
        if pair[1].lo != expected {
            return Err(TableError::Discontinuous {
                ore: id,
                expected,
                found: pair[1].lo,
            });
        }
    }

    if first.lo != spec.min_y || last.hi != spec.max_y {
        return Err(TableError::RangeMismatch {
            ore: id,
            lo: first.lo,
            hi: last.hi,
            min_y: spec.min_y,
            max_y: spec.max_y,
        });
    }

    let mut previous = None;
    for peak in spec.peaks {
        let ordered = previous.map_or(true, |prev| peak.y > prev);
        if !spec.in_range(peak.y) || !ordered {
            return Err(TableError::MisplacedPeak { ore: id, y: peak.y });
        }
        previous = Some(peak.y);
    }

    Ok(())
}

/// Validates every ore in the catalog.
pub fn validate_tables() -> Result<(), TableError> {
    Ore::ALL.into_iter().try_for_each(validate)
}
