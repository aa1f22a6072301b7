//! Flattened local-name view of a metadata document.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use sar_common::GeoPoint;

use crate::error::{ExtractError, Result};

/// Text content of a metadata document indexed by element local name.
///
/// Lookups are depth-unconstrained: the first occurrence of a local name in
/// document order wins, matching an "anywhere in the tree" search. Matching by
/// local name makes a declared default namespace (or any prefix) irrelevant,
/// so documents from different processor generations resolve identically.
#[derive(Debug, Default)]
pub struct TagIndex {
    text_by_name: HashMap<String, String>,
}

impl TagIndex {
    /// Parse a document into the flattened view.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut text_by_name = HashMap::new();
        let mut stack: Vec<String> = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| ExtractError::MetadataMalformed(e.to_string()))?;
                    record_text(&mut text_by_name, &stack, text.trim());
                }
                Ok(Event::CData(t)) => {
                    let raw = t.into_inner();
                    let text = String::from_utf8_lossy(&raw);
                    record_text(&mut text_by_name, &stack, text.trim());
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ExtractError::MetadataMalformed(e.to_string())),
            }
        }
        Ok(Self { text_by_name })
    }

    /// Text of the first element with this local name, if any.
    pub fn text(&self, local_name: &str) -> Option<&str> {
        self.text_by_name.get(local_name).map(String::as_str)
    }

    /// Float value of the first element with this local name. `None` covers
    /// both absence and unparsable text; callers decide the fallback.
    pub fn number(&self, local_name: &str) -> Option<f64> {
        self.text(local_name)?.trim().parse().ok()
    }

    /// Corner coordinate of the first element with this local name.
    pub fn coord(&self, local_name: &str) -> Option<GeoPoint> {
        parse_coord(self.text(local_name)?)
    }
}

fn record_text(text_by_name: &mut HashMap<String, String>, stack: &[String], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(name) = stack.last() {
        text_by_name
            .entry(name.clone())
            .or_insert_with(|| text.to_string());
    }
}

/// Parse a corner field's text into (lat, lon).
///
/// Corner fields may carry leading tokens (an altitude in some products); the
/// last two whitespace-separated tokens are latitude then longitude.
pub fn parse_coord(text: &str) -> Option<GeoPoint> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let lat: f64 = tokens[tokens.len() - 2].parse().ok()?;
    let lon: f64 = tokens[tokens.len() - 1].parse().ok()?;
    Some(GeoPoint::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_takes_last_two_tokens() {
        let point = parse_coord("  10.0 20.0 45.123456 -23.654321  ").unwrap();
        assert_eq!(point.lat, 45.123456);
        assert_eq!(point.lon, -23.654321);
    }

    #[test]
    fn test_parse_coord_rejects_short_or_garbage_text() {
        assert!(parse_coord("45.0").is_none());
        assert!(parse_coord("").is_none());
        assert!(parse_coord("45.0 east").is_none());
    }

    #[test]
    fn test_lookup_is_depth_unconstrained() {
        let doc = TagIndex::parse(
            r#"<product><header><satellite>CSKS2</satellite></header>
               <coord_first_near>812.1 44.10 -10.20</coord_first_near></product>"#,
        )
        .unwrap();
        assert_eq!(doc.text("satellite"), Some("CSKS2"));
        let corner = doc.coord("coord_first_near").unwrap();
        assert_eq!(corner.lat, 44.10);
        assert_eq!(corner.lon, -10.20);
    }

    #[test]
    fn test_default_namespace_is_ignored() {
        let doc = TagIndex::parse(
            r#"<product xmlns="http://example.com/sar/v2">
                 <satellite>CSKS4</satellite>
               </product>"#,
        )
        .unwrap();
        assert_eq!(doc.text("satellite"), Some("CSKS4"));
    }

    #[test]
    fn test_prefixed_names_match_by_local_part() {
        let doc = TagIndex::parse(
            r#"<s:product xmlns:s="http://example.com/sar/v2">
                 <s:lookSide>RIGHT</s:lookSide>
               </s:product>"#,
        )
        .unwrap();
        assert_eq!(doc.text("lookSide"), Some("RIGHT"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let doc = TagIndex::parse(
            "<root><polarization>HH</polarization><polarization>VV</polarization></root>",
        )
        .unwrap();
        assert_eq!(doc.text("polarization"), Some("HH"));
    }

    #[test]
    fn test_malformed_document_errors() {
        let err = TagIndex::parse("<root><unclosed></root>").unwrap_err();
        assert!(matches!(err, ExtractError::MetadataMalformed(_)));
    }

    #[test]
    fn test_number_parse_failure_is_none() {
        let doc = TagIndex::parse("<r><incidenceAngleCenter>n/a</incidenceAngleCenter></r>").unwrap();
        assert_eq!(doc.number("incidenceAngleCenter"), None);
        assert_eq!(doc.number("absent"), None);
    }
}
