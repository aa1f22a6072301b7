//! Attribute schemas for archive records.
//!
//! The metadata document inside an archive carries far more fields than the
//! catalog exposes; a schema declares which fields one catalog pass populates,
//! the XML tag each is read from, and its value type. Two schemas exist: the
//! legacy narrow set and the canonical extended set. Records are
//! attribute-complete: a field whose source tag is absent gets the type's
//! neutral default instead of being dropped.

use serde::{Deserialize, Serialize};

/// Neutral default for text fields whose source tag is absent.
pub const TEXT_DEFAULT: &str = "N/D";

/// Value type of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    /// Neutral default used when the source field is absent or unparsable.
    pub fn default_value(self) -> AttrValue {
        match self {
            FieldKind::Text => AttrValue::Text(TEXT_DEFAULT.to_string()),
            FieldKind::Number => AttrValue::Number(0.0),
        }
    }
}

/// One attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Text(_) => None,
            AttrValue::Number(value) => Some(*value),
        }
    }
}

/// One schema field: record field name, source XML tag, value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub tag: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str, tag: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        tag,
        kind: FieldKind::Text,
    }
}

const fn number(name: &'static str, tag: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        tag,
        kind: FieldKind::Number,
    }
}

/// Legacy narrow attribute set.
const NARROW_FIELDS: &[FieldSpec] = &[
    text("product_type", "productType"),
    text("satellite_name", "satellite"),
    text("acquisition_mode", "acquisitionMode"),
    text("look_side", "lookSide"),
    text("orbit_direction", "orbitDirection"),
    text("polarization", "polarization"),
    number("satellite_look_angle", "satelliteLookAngle"),
    text("acquisition_start_utc", "acquisitionStartTimeUTC"),
    number("incidence_center", "incidenceAngleCenter"),
];

/// Canonical extended attribute set: the narrow fields plus product file,
/// resolution, and incidence detail.
const EXTENDED_FIELDS: &[FieldSpec] = &[
    text("product_type", "productType"),
    text("satellite_name", "satellite"),
    text("acquisition_mode", "acquisitionMode"),
    text("look_side", "lookSide"),
    text("orbit_direction", "orbitDirection"),
    text("polarization", "polarization"),
    number("satellite_look_angle", "satelliteLookAngle"),
    text("acquisition_start_utc", "acquisitionStartTimeUTC"),
    number("incidence_center", "incidenceAngleCenter"),
    text("product_file", "productFile"),
    number("range_resolution_near", "rangeResolutionNear"),
    number("range_resolution_center", "rangeResolutionCenter"),
    number("range_resolution_far", "rangeResolutionFar"),
    text("product_level", "productLevel"),
    number("azimuth_resolution", "azimuthResolution"),
    number("incidence_near", "incidenceAngleNear"),
    number("incidence_far", "incidenceAngleFar"),
    text("acquisition_id", "acquisitionId"),
];

/// Which attribute set one catalog pass populates.
///
/// Consumers address attributes positionally, so the declared field order is
/// part of the contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeSchema {
    /// Legacy subset kept for older layer definitions.
    Narrow,
    /// Canonical target schema.
    #[default]
    Extended,
}

impl AttributeSchema {
    /// The declared fields, in contract order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            AttributeSchema::Narrow => NARROW_FIELDS,
            AttributeSchema::Extended => EXTENDED_FIELDS,
        }
    }

    /// Position of a field within this schema, if declared.
    pub fn field_index(self, name: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.name == name)
    }
}
