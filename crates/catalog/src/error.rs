//! Error types for catalog scanning.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan errors. Everything else during a pass is recorded per item on
/// the index and skipped.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The scan root does not exist or is not a directory. Rejected before
    /// any scanning begins.
    #[error("invalid catalog root: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// The scan root exists but cannot be enumerated.
    #[error("failed to read catalog root {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
