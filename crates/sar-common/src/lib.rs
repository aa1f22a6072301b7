//! Common types shared across the SAR archive catalog crates.

pub mod bbox;
pub mod footprint;
pub mod record;
pub mod schema;

pub use bbox::BoundingBox;
pub use footprint::{Footprint, GeoPoint};
pub use record::ArchiveRecord;
pub use schema::{AttrValue, AttributeSchema, FieldKind, FieldSpec, TEXT_DEFAULT};
