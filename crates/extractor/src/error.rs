//! Error types for archive extraction.

use thiserror::Error;

/// Errors local to one archive. The catalog scan records these and continues;
/// none of them aborts a pass.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The container is corrupt, or the path does not exist or cannot be read.
    #[error("failed to read archive: {0}")]
    ArchiveUnreadable(String),

    /// No member matches the SLC metadata naming rule. Expected for product
    /// variants that ship without the detailed document.
    #[error("no SLC metadata document in archive")]
    MetadataNotFound,

    /// The metadata member exists but is not well-formed XML.
    #[error("metadata document malformed: {0}")]
    MetadataMalformed(String),

    /// One or more footprint corner fields absent or unparsable; no
    /// partial-geometry record is ever produced.
    #[error("incomplete footprint, missing: {0}")]
    IncompleteFootprint(String),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
