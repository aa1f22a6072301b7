//! Archive metadata extraction.
//!
//! Opens one product archive at a time, locates the detailed (SLC) metadata
//! document among its members, and turns it into a normalized
//! [`ArchiveRecord`](sar_common::ArchiveRecord): a four-corner footprint plus
//! a schema-ordered attribute tuple. Also resolves the raster and preview
//! members the host mapping application loads.
//!
//! Every failure is local to the archive being read; the catalog scan logs the
//! outcome and moves on.

pub mod conventions;
pub mod error;
mod extract;
mod members;
mod xml;

// Re-exports
pub use conventions::Conventions;
pub use error::{ExtractError, Result};
pub use extract::{raster_virtual_path, Extractor};
pub use members::{select_metadata_member, select_preview_member, select_raster_member};
pub use xml::{parse_coord, TagIndex};
