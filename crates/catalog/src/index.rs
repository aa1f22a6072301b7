//! The catalog index accumulated during one scan.

use std::path::{Path, PathBuf};

use extractor::ExtractError;
use sar_common::{ArchiveRecord, BoundingBox};

/// Why one item was skipped during a scan.
#[derive(Debug)]
pub enum ScanFailure {
    /// An archive the extractor rejected.
    Archive {
        path: PathBuf,
        error: ExtractError,
    },
    /// A catalog folder that could not be enumerated.
    Directory {
        path: PathBuf,
        error: std::io::Error,
    },
}

impl ScanFailure {
    /// Path of the archive or folder that was skipped.
    pub fn path(&self) -> &Path {
        match self {
            ScanFailure::Archive { path, .. } => path,
            ScanFailure::Directory { path, .. } => path,
        }
    }
}

/// Ordered accumulation of one full catalog pass.
///
/// Append-only while a scan runs, rebuilt from scratch on the next pass; the
/// consumer replaces its previous index (and whatever it rendered from it) as
/// one unit. Every record carries a complete four-corner footprint.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    records: Vec<ArchiveRecord>,
    failures: Vec<ScanFailure>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn push(&mut self, record: ArchiveRecord) {
        self.records.push(record);
    }

    /// Record one skipped item.
    pub fn record_failure(&mut self, failure: ScanFailure) {
        self.failures.push(failure);
    }

    /// All records, in scan order.
    pub fn records(&self) -> &[ArchiveRecord] {
        &self.records
    }

    /// Items skipped during the scan, in encounter order.
    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchiveRecord> {
        self.records.iter()
    }

    /// Records whose footprint bounds intersect the query box.
    pub fn intersecting(&self, query: &BoundingBox) -> Vec<&ArchiveRecord> {
        self.records
            .iter()
            .filter(|record| record.footprint().bounds().intersects(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sar_common::{AttributeSchema, Footprint, GeoPoint};

    fn record_at(path: &str, lat: f64, lon: f64) -> ArchiveRecord {
        let schema = AttributeSchema::Narrow;
        let attributes = schema
            .fields()
            .iter()
            .map(|f| f.kind.default_value())
            .collect();
        let footprint = Footprint {
            first_near: GeoPoint::new(lat, lon),
            first_far: GeoPoint::new(lat, lon + 0.5),
            last_near: GeoPoint::new(lat - 0.5, lon),
            last_far: GeoPoint::new(lat - 0.5, lon + 0.5),
        };
        ArchiveRecord::new(PathBuf::from(path), schema, attributes, footprint)
    }

    #[test]
    fn test_intersecting_filters_by_footprint_bounds() {
        let mut index = CatalogIndex::new();
        index.push(record_at("/a.zip", 44.0, -10.0));
        index.push(record_at("/b.zip", 10.0, 30.0));

        let hits = index.intersecting(&BoundingBox::new(-11.0, 43.0, -9.0, 45.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].source_path(), Path::new("/a.zip"));

        let none = index.intersecting(&BoundingBox::new(100.0, -5.0, 110.0, 5.0));
        assert!(none.is_empty());
    }

    #[test]
    fn test_records_keep_scan_order() {
        let mut index = CatalogIndex::new();
        index.push(record_at("/c1/a.zip", 44.0, -10.0));
        index.push(record_at("/c1/b.zip", 45.0, -10.0));
        let paths: Vec<_> = index.iter().map(|r| r.source_path().to_owned()).collect();
        assert_eq!(paths, [PathBuf::from("/c1/a.zip"), PathBuf::from("/c1/b.zip")]);
    }
}
