//! Error types for Ore Oracle.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Ore Oracle operations.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Distribution table defects
    #[error("Distribution table error: {0}")]
    Table(#[from] TableError),

    /// Command parsing errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors reading or writing persisted config and tracking files.
///
/// These are recoverable: callers log them and continue with defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    /// Wraps an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Defects found while validating an ore's band or peak table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table has no bands at all
    #[error("{ore}: band table is empty")]
    Empty {
        /// Ore id
        ore: &'static str,
    },

    /// A band's lower bound is above its upper bound
    #[error("{ore}: band {lo}..={hi} is inverted")]
    InvertedBand {
        /// Ore id
        ore: &'static str,
        /// Lower bound
        lo: i32,
        /// Upper bound
        hi: i32,
    },

    /// Two neighbouring bands leave a gap or overlap
    #[error("{ore}: band starting at {found} should start at {expected}")]
    Discontinuous {
        /// Ore id
        ore: &'static str,
        /// Expected lower bound (previous upper bound + 1)
        expected: i32,
        /// Actual lower bound
        found: i32,
    },

    /// The bands do not cover exactly the ore's spawn range
    #[error("{ore}: bands cover {lo}..={hi} but the ore spans {min_y}..={max_y}")]
    RangeMismatch {
        /// Ore id
        ore: &'static str,
        /// First band's lower bound
        lo: i32,
        /// Last band's upper bound
        hi: i32,
        /// Catalog minimum Y
        min_y: i32,
        /// Catalog maximum Y
        max_y: i32,
    },

    /// A band is assigned the no-spawn tier
    #[error("{ore}: band {lo}..={hi} is marked as not spawning")]
    NoneBand {
        /// Ore id
        ore: &'static str,
        /// Lower bound
        lo: i32,
        /// Upper bound
        hi: i32,
    },

    /// A peak lies outside the spawn range or peaks are out of order
    #[error("{ore}: peak at Y {y} is misplaced")]
    MisplacedPeak {
        /// Ore id
        ore: &'static str,
        /// Peak Y-level
        y: i32,
    },
}

/// Errors parsing user commands and script input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input was empty
    #[error("empty command")]
    Empty,

    /// Command root or subcommand not recognised
    #[error("unknown command: {0}")]
    Unknown(String),

    /// Ore id not in the catalog
    #[error("unknown ore: {0}")]
    UnknownOre(String),

    /// Filter name not recognised
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Argument missing or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for Ore Oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Result type alias for persistence operations.
pub type StorageResult<T> = Result<T, StorageError>;
