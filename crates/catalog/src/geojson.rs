//! GeoJSON export of the catalog index.
//!
//! The rendering collaborator consumes the index as a single replaceable
//! polygon layer; a FeatureCollection is the wire form of that layer. Each
//! record becomes a Polygon feature whose properties carry the source path
//! and the schema attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use sar_common::{ArchiveRecord, AttrValue};

use crate::index::CatalogIndex;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// One feature per indexed archive.
    pub features: Vec<Feature>,
}

/// A GeoJSON Feature wrapping one archive footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: Geometry,

    /// Source path plus the schema attributes.
    pub properties: Map<String, Value>,
}

/// A GeoJSON Polygon geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// Type identifier (always "Polygon").
    #[serde(rename = "type")]
    pub type_: String,

    /// One closed linear ring of [lon, lat] pairs.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Serialize the whole index as a FeatureCollection.
pub fn feature_collection(index: &CatalogIndex) -> FeatureCollection {
    FeatureCollection {
        type_: "FeatureCollection".to_string(),
        features: index.iter().map(feature).collect(),
    }
}

/// One record as a Polygon feature.
pub fn feature(record: &ArchiveRecord) -> Feature {
    let mut properties = Map::new();
    properties.insert(
        "source_path".to_string(),
        Value::String(record.source_path().display().to_string()),
    );
    for (name, value) in record.ordered_attributes() {
        let json = match value {
            AttrValue::Text(text) => Value::String(text.clone()),
            AttrValue::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
        };
        properties.insert(name.to_string(), json);
    }

    Feature {
        type_: "Feature".to_string(),
        geometry: Geometry {
            type_: "Polygon".to_string(),
            coordinates: vec![record.footprint().closed_ring_lonlat()],
        },
        properties,
    }
}
