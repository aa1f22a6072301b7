//! Directory tree scanning.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use extractor::{Conventions, ExtractError, Extractor};

use crate::error::{CatalogError, Result};
use crate::index::{CatalogIndex, ScanFailure};

/// Walks a catalog root and builds the index, one archive at a time.
///
/// The scan is synchronous and single-threaded: it runs to completion within
/// one call, and each archive is fully processed before the next is opened.
#[derive(Debug, Clone)]
pub struct Scanner {
    extractor: Extractor,
}

impl Scanner {
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Scan the whole tree under `root`.
    ///
    /// The only fatal condition is an unusable root; every per-item failure
    /// is logged, recorded on the index, and skipped. An empty root yields an
    /// empty index.
    pub fn scan(&self, root: &Path) -> Result<CatalogIndex> {
        let catalogs = list_catalogs(root)?;
        info!(root = %root.display(), catalogs = catalogs.len(), "starting catalog scan");

        let mut index = CatalogIndex::new();
        for catalog in catalogs {
            self.scan_catalog(&catalog, &mut index);
        }

        info!(
            records = index.len(),
            skipped = index.failures().len(),
            "catalog scan complete"
        );
        Ok(index)
    }

    fn scan_catalog(&self, catalog: &Path, index: &mut CatalogIndex) {
        let archives = match list_archives(catalog, self.extractor.conventions()) {
            Ok(archives) => archives,
            Err(err) => {
                warn!(catalog = %catalog.display(), %err, "catalog folder unreadable, skipping");
                index.record_failure(ScanFailure::Directory {
                    path: catalog.to_path_buf(),
                    error: err,
                });
                return;
            }
        };

        for archive in archives {
            match self.extractor.extract(&archive) {
                Ok(record) => {
                    debug!(archive = %archive.display(), "indexed");
                    index.push(record);
                }
                Err(err) => {
                    match &err {
                        ExtractError::MetadataNotFound => {
                            debug!(archive = %archive.display(), "no SLC metadata, skipping");
                        }
                        ExtractError::MetadataMalformed(_) => {
                            error!(archive = %archive.display(), %err, "skipping archive");
                        }
                        _ => {
                            warn!(archive = %archive.display(), %err, "skipping archive");
                        }
                    }
                    index.record_failure(ScanFailure::Archive {
                        path: archive,
                        error: err,
                    });
                }
            }
        }
    }
}

/// Immediate subdirectories of the root ("catalogs"), sorted by name.
pub fn list_catalogs(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CatalogError::InvalidRoot(root.to_path_buf()));
    }
    let mut catalogs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CatalogError::RootUnreadable {
            path: root.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_dir() {
            catalogs.push(entry.into_path());
        }
    }
    Ok(catalogs)
}

/// Archive files directly inside one catalog folder, sorted by name.
/// Matching on the archive suffix is case-insensitive.
pub fn list_archives(catalog: &Path, conventions: &Conventions) -> std::io::Result<Vec<PathBuf>> {
    let suffix = conventions.archive_suffix.to_lowercase();
    let mut archives = Vec::new();
    for entry in WalkDir::new(catalog)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.ends_with(&suffix) {
            archives.push(entry.into_path());
        }
    }
    Ok(archives)
}
