//! Layout pipeline errors.

use thiserror::Error;

/// Errors raised while reading book metadata or writing layout artifacts.
///
/// The layout computation itself is total; only the IO edges of the
/// pipeline can fail.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Filesystem error while reading input or writing artifacts.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the metadata file is not a valid book record.
    #[error("malformed book record at line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the JSONL input.
        line: usize,
        /// The underlying decode failure.
        source: serde_json::Error,
    },

    /// A layout artifact could not be serialized.
    #[error("artifact serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
