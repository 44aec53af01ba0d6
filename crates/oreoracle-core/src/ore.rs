//! Ore catalog.
//!
//! A static, immutable table of every ore the overlay knows about: its
//! dimension, spawn range, peak Y-levels and biome rule. Declaration order
//! of [`Ore`] is the catalog order used to break ties when sorting.

use crate::biome::BiomeRule;
use oreoracle_common::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vanilla ore tracked by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ore {
    /// Coal ore.
    Coal,
    /// Copper ore.
    Copper,
    /// Iron ore.
    Iron,
    /// Gold ore (extra band in badlands).
    Gold,
    /// Diamond ore.
    Diamond,
    /// Redstone ore.
    Redstone,
    /// Lapis lazuli ore.
    Lapis,
    /// Emerald ore (mountain biomes only).
    Emerald,
    /// Nether quartz ore.
    NetherQuartz,
    /// Nether gold ore.
    NetherGold,
    /// Ancient debris.
    AncientDebris,
}

/// A local density maximum for an ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Peak {
    /// Y-level of the peak.
    pub y: i32,
    /// Whether the HUD shows the peak indicator near this level.
    pub indicates: bool,
}

impl Peak {
    /// A peak that shows the indicator.
    #[must_use]
    pub const fn new(y: i32) -> Self {
        Self { y, indicates: true }
    }

    /// A peak that is recorded but never indicated.
    #[must_use]
    pub const fn silent(y: i32) -> Self {
        Self { y, indicates: false }
    }
}

/// Static description of one ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OreSpec {
    /// Stable identifier used in persisted tracking files.
    pub id: &'static str,
    /// Name shown in the HUD.
    pub display_name: &'static str,
    /// Item rendered in icon mode.
    pub icon_item: &'static str,
    /// Dimension the ore generates in.
    pub dimension: Dimension,
    /// Lowest Y-level it generates at (inclusive).
    pub min_y: i32,
    /// Highest Y-level it generates at (inclusive).
    pub max_y: i32,
    /// Peaks in ascending Y order.
    pub peaks: &'static [Peak],
    /// Whether the ore shows a peak indicator at all.
    pub peak_indicator: bool,
    /// How the biome affects distribution.
    pub biome_rule: BiomeRule,
}

impl OreSpec {
    /// Whether `y` lies in the normal spawn range.
    #[must_use]
    pub const fn in_range(&self, y: i32) -> bool {
        y >= self.min_y && y <= self.max_y
    }
}

static COAL: OreSpec = OreSpec {
    id: "coal",
    display_name: "Coal",
    icon_item: "minecraft:coal",
    dimension: Dimension::Overworld,
    min_y: 0,
    max_y: 320,
    peaks: &[Peak::new(96)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static COPPER: OreSpec = OreSpec {
    id: "copper",
    display_name: "Copper",
    icon_item: "minecraft:raw_copper",
    dimension: Dimension::Overworld,
    min_y: -16,
    max_y: 112,
    peaks: &[Peak::new(48)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

// Upper mountain peak is kept in the table but not indicated.
static IRON: OreSpec = OreSpec {
    id: "iron",
    display_name: "Iron",
    icon_item: "minecraft:raw_iron",
    dimension: Dimension::Overworld,
    min_y: -64,
    max_y: 384,
    peaks: &[Peak::new(16), Peak::silent(232)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static GOLD: OreSpec = OreSpec {
    id: "gold",
    display_name: "Gold",
    icon_item: "minecraft:raw_gold",
    dimension: Dimension::Overworld,
    min_y: -64,
    max_y: 32,
    peaks: &[Peak::new(-16)],
    peak_indicator: true,
    biome_rule: BiomeRule::BadlandsExtended,
};

static DIAMOND: OreSpec = OreSpec {
    id: "diamond",
    display_name: "Diamond",
    icon_item: "minecraft:diamond",
    dimension: Dimension::Overworld,
    min_y: -64,
    max_y: 16,
    peaks: &[Peak::new(-59)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static REDSTONE: OreSpec = OreSpec {
    id: "redstone",
    display_name: "Redstone",
    icon_item: "minecraft:redstone",
    dimension: Dimension::Overworld,
    min_y: -64,
    max_y: 15,
    peaks: &[Peak::new(-59)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static LAPIS: OreSpec = OreSpec {
    id: "lapis",
    display_name: "Lapis",
    icon_item: "minecraft:lapis_lazuli",
    dimension: Dimension::Overworld,
    min_y: -64,
    max_y: 64,
    peaks: &[Peak::new(0)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static EMERALD: OreSpec = OreSpec {
    id: "emerald",
    display_name: "Emerald",
    icon_item: "minecraft:emerald",
    dimension: Dimension::Overworld,
    min_y: -16,
    max_y: 320,
    peaks: &[Peak::new(100)],
    peak_indicator: true,
    biome_rule: BiomeRule::MountainOnly,
};

static NETHER_QUARTZ: OreSpec = OreSpec {
    id: "nether_quartz",
    display_name: "Nether Quartz",
    icon_item: "minecraft:quartz",
    dimension: Dimension::Nether,
    min_y: 10,
    max_y: 117,
    peaks: &[Peak::new(14), Peak::new(114)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static NETHER_GOLD: OreSpec = OreSpec {
    id: "nether_gold",
    display_name: "Nether Gold",
    icon_item: "minecraft:gold_nugget",
    dimension: Dimension::Nether,
    min_y: 10,
    max_y: 117,
    peaks: &[Peak::new(14), Peak::new(114)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

static ANCIENT_DEBRIS: OreSpec = OreSpec {
    id: "ancient_debris",
    display_name: "Ancient Debris",
    icon_item: "minecraft:ancient_debris",
    dimension: Dimension::Nether,
    min_y: 8,
    max_y: 119,
    peaks: &[Peak::new(15)],
    peak_indicator: true,
    biome_rule: BiomeRule::Any,
};

impl Ore {
    /// Every ore in catalog order.
    pub const ALL: [Self; 11] = [
        Self::Coal,
        Self::Copper,
        Self::Iron,
        Self::Gold,
        Self::Diamond,
        Self::Redstone,
        Self::Lapis,
        Self::Emerald,
        Self::NetherQuartz,
        Self::NetherGold,
        Self::AncientDebris,
    ];

    /// Static description of this ore.
    #[must_use]
    pub fn spec(self) -> &'static OreSpec {
        match self {
            Self::Coal => &COAL,
            Self::Copper => &COPPER,
            Self::Iron => &IRON,
            Self::Gold => &GOLD,
            Self::Diamond => &DIAMOND,
            Self::Redstone => &REDSTONE,
            Self::Lapis => &LAPIS,
            Self::Emerald => &EMERALD,
            Self::NetherQuartz => &NETHER_QUARTZ,
            Self::NetherGold => &NETHER_GOLD,
            Self::AncientDebris => &ANCIENT_DEBRIS,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Name shown in the HUD.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    /// Dimension the ore generates in.
    #[must_use]
    pub fn dimension(self) -> Dimension {
        self.spec().dimension
    }

    /// Whether the biome changes this ore's distribution (gold, emerald).
    #[must_use]
    pub fn requires_biome_check(self) -> bool {
        self.spec().biome_rule.is_biome_dependent()
    }

    /// Looks up an ore by its stable identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ore| ore.id() == id)
    }

    /// Ores of one dimension, in catalog order.
    pub fn in_dimension(dimension: Dimension) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |ore| ore.dimension() == dimension)
    }
}

impl fmt::Display for Ore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
