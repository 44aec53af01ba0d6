//! Dimensions the host can place the player in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three vanilla dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    /// The overworld (`minecraft:overworld`).
    Overworld,
    /// The nether (`minecraft:the_nether`).
    Nether,
    /// The end (`minecraft:the_end`).
    End,
}

impl Dimension {
    /// All dimensions, in registry order.
    pub const ALL: [Self; 3] = [Self::Overworld, Self::Nether, Self::End];

    /// Registry path of the world key (without namespace).
    #[must_use]
    pub const fn key_path(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "the_nether",
            Self::End => "the_end",
        }
    }

    /// Resolves a world registry key such as `minecraft:the_nether`.
    ///
    /// A bare path is read in the `minecraft` namespace. Keys from other
    /// namespaces are modded dimensions and resolve to `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let (namespace, path) = key.split_once(':').unwrap_or(("minecraft", key));
        if namespace != "minecraft" {
            return None;
        }
        Self::ALL.into_iter().find(|dim| dim.key_path() == path)
    }

    /// Short tag used next to ore names outside the overworld.
    #[must_use]
    pub const fn short_tag(self) -> char {
        match self {
            Self::Overworld => 'O',
            Self::Nether => 'N',
            Self::End => 'E',
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.key_path())
    }
}
