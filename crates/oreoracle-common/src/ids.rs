//! Identifier types for biomes and world identities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace assumed when an identifier has none.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespaced biome identifier, e.g. `minecraft:meadow`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomeId(String);

impl BiomeId {
    /// Parses an identifier, adding the `minecraft` namespace when missing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.contains(':') {
            Self(raw.to_string())
        } else {
            Self(format!("{DEFAULT_NAMESPACE}:{raw}"))
        }
    }

    /// Builds a vanilla biome identifier from its path.
    #[must_use]
    pub fn vanilla(path: &str) -> Self {
        Self(format!("{DEFAULT_NAMESPACE}:{path}"))
    }

    /// Full `namespace:path` form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or(DEFAULT_NAMESPACE, |(ns, _)| ns)
    }

    /// Path part.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, path)| path)
    }

    /// Whether this is the vanilla biome with the given path.
    #[must_use]
    pub fn is_vanilla(&self, path: &str) -> bool {
        self.namespace() == DEFAULT_NAMESPACE && self.path() == path
    }
}

impl fmt::Display for BiomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of the server or save the player is in.
///
/// Tracking preferences are stored per identity, so two servers never
/// share a tracked-ore selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorldIdentity {
    /// Multiplayer server, keyed by its address.
    Server(String),
    /// Singleplayer save, keyed by its level name.
    Singleplayer(String),
}

impl WorldIdentity {
    /// Identity for a multiplayer server address.
    #[must_use]
    pub fn server(address: impl Into<String>) -> Self {
        Self::Server(address.into())
    }

    /// Identity for a singleplayer save name.
    #[must_use]
    pub fn singleplayer(level_name: impl Into<String>) -> Self {
        Self::Singleplayer(level_name.into())
    }

    /// Filesystem-safe, lower-cased file stem for this identity.
    #[must_use]
    pub fn file_stem(&self) -> String {
        match self {
            Self::Server(address) => sanitize(address),
            Self::Singleplayer(name) => format!("singleplayer_{}", sanitize(name)),
        }
    }
}

impl fmt::Display for WorldIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(address) => write!(f, "server {address}"),
            Self::Singleplayer(name) => write!(f, "world {name}"),
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_` and lower-cases.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
