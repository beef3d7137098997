use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – everything the data layer can fail with
// ---------------------------------------------------------------------------

/// Errors produced by the import, query, and transform operations.
///
/// All failures are surfaced to the immediate caller; nothing is retried or
/// swallowed inside the data layer, and no operation leaves a table
/// partially modified.
#[derive(Debug, Error)]
pub enum TableError {
    /// Source file missing, unreadable, or not parseable as delimited text.
    #[error("failed to read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Caller asked for a group name outside the fixed set.
    #[error("unknown column group '{0}'")]
    UnknownGroup(String),

    /// Expansion needs exactly one consolidated x column.
    #[error("expected a single x column to expand, found {0}")]
    MultipleXColumns(usize),

    /// The supplied header list disagrees with a stored vector's length.
    #[error("row {row}: x vector holds {found} values but {expected} headers were given")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
