//! Normalized per-archive records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::footprint::Footprint;
use crate::schema::{AttrValue, AttributeSchema, TEXT_DEFAULT};

/// One successfully parsed archive: source path, schema-ordered attributes,
/// four-corner footprint.
///
/// The attribute vector is aligned with the schema's declared field order, so
/// downstream consumers may address values positionally as well as by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRecord {
    source_path: PathBuf,
    schema: AttributeSchema,
    attributes: Vec<AttrValue>,
    footprint: Footprint,
}

impl ArchiveRecord {
    /// Build a record. `attributes` must hold one value per schema field, in
    /// declaration order.
    pub fn new(
        source_path: PathBuf,
        schema: AttributeSchema,
        attributes: Vec<AttrValue>,
        footprint: Footprint,
    ) -> Self {
        debug_assert_eq!(attributes.len(), schema.fields().len());
        Self {
            source_path,
            schema,
            attributes,
            footprint,
        }
    }

    /// Absolute path of the source archive; unique within one catalog pass.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn schema(&self) -> AttributeSchema {
        self.schema
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// The attribute values in schema order.
    pub fn attributes(&self) -> &[AttrValue] {
        &self.attributes
    }

    /// (field name, value) pairs in schema order.
    pub fn ordered_attributes(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.schema
            .fields()
            .iter()
            .zip(self.attributes.iter())
            .map(|(field, value)| (field.name, value))
    }

    /// Look one attribute up by field name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.schema
            .field_index(name)
            .and_then(|i| self.attributes.get(i))
    }

    /// Best-effort parse of the raw `acquisition_start_utc` text into a UTC
    /// timestamp. Returns `None` when the field is defaulted or in a spelling
    /// none of the known products use.
    pub fn acquisition_datetime(&self) -> Option<DateTime<Utc>> {
        let text = self.attribute("acquisition_start_utc")?.as_text()?.trim();
        if text.is_empty() || text == TEXT_DEFAULT {
            return None;
        }
        parse_time_flexible(text)
    }
}

/// Accept the timestamp spellings seen across product generations.
fn parse_time_flexible(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%d-%b-%Y %H:%M:%S%.f",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::GeoPoint;
    use crate::schema::FieldKind;
    use chrono::Timelike;

    fn record_with_start(start: &str) -> ArchiveRecord {
        let schema = AttributeSchema::Narrow;
        let attributes = schema
            .fields()
            .iter()
            .map(|field| {
                if field.name == "acquisition_start_utc" {
                    AttrValue::Text(start.to_string())
                } else {
                    field.kind.default_value()
                }
            })
            .collect();
        let corner = GeoPoint::new(0.0, 0.0);
        ArchiveRecord::new(
            PathBuf::from("/data/catalog/product.zip"),
            schema,
            attributes,
            Footprint {
                first_near: corner,
                first_far: corner,
                last_near: corner,
                last_far: corner,
            },
        )
    }

    #[test]
    fn test_attribute_lookup_by_name_and_position() {
        let record = record_with_start("N/D");
        assert_eq!(
            record.attribute("product_type"),
            Some(&AttrValue::Text("N/D".to_string()))
        );
        let ordered: Vec<&'static str> = record.ordered_attributes().map(|(n, _)| n).collect();
        assert_eq!(ordered[0], "product_type");
        assert_eq!(ordered.len(), record.attributes().len());
        assert!(record.attribute("range_resolution_near").is_none());
    }

    #[test]
    fn test_acquisition_datetime_formats() {
        for text in [
            "2023-05-12T04:05:06.123456Z",
            "2023-05-12T04:05:06.123456",
            "2023-05-12 04:05:06.123",
            "12-MAY-2023 04:05:06.12",
        ] {
            let parsed = record_with_start(text).acquisition_datetime();
            let parsed = parsed.unwrap_or_else(|| panic!("failed to parse {text:?}"));
            assert_eq!(parsed.hour(), 4);
            assert_eq!(parsed.minute(), 5);
        }
    }

    #[test]
    fn test_acquisition_datetime_defaulted_or_garbage() {
        assert!(record_with_start("N/D").acquisition_datetime().is_none());
        assert!(record_with_start("yesterday").acquisition_datetime().is_none());
    }

    #[test]
    fn test_field_kinds_drive_defaults() {
        let record = record_with_start("N/D");
        for (field, value) in AttributeSchema::Narrow
            .fields()
            .iter()
            .zip(record.attributes())
        {
            match field.kind {
                FieldKind::Text => assert!(value.as_text().is_some()),
                FieldKind::Number => assert!(value.as_number().is_some()),
            }
        }
    }
}
