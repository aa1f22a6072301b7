//! Catalog construction over a directory tree of product archives.
//!
//! The scanner walks one level of catalog folders under a root, runs the
//! extractor on every archive it finds, and accumulates an ordered
//! [`CatalogIndex`] of footprint records. Per-archive and per-folder failures
//! are logged and recorded on the index; only an unusable root aborts a scan.
//!
//! The index is rebuilt from scratch on every pass and handed to the
//! rendering collaborator as one replaceable unit, serialized as GeoJSON via
//! [`geojson::feature_collection`].

pub mod error;
pub mod geojson;
pub mod index;
pub mod scanner;

// Re-exports
pub use error::CatalogError;
pub use index::{CatalogIndex, ScanFailure};
pub use scanner::{list_archives, list_catalogs, Scanner};
