//! Archive member naming conventions.

use serde::Deserialize;

/// Naming rules that identify members inside a product archive and archives
/// inside a catalog folder. All matching is case-insensitive.
///
/// The defaults cover the stripmap SAR product family this catalog was built
/// for; sibling families only differ in these strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Suffix of archive files inside a catalog folder.
    pub archive_suffix: String,
    /// Suffix of the metadata document member.
    pub metadata_suffix: String,
    /// Substring marking the detailed (SLC) metadata document.
    pub metadata_marker: String,
    /// Suffix of raster product members.
    pub raster_suffix: String,
    /// Substring marking the ground-range-detected raster member.
    pub raster_marker: String,
    /// Suffix of the preview image member.
    pub preview_suffix: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            archive_suffix: ".zip".to_string(),
            metadata_suffix: ".xml".to_string(),
            metadata_marker: "slc".to_string(),
            raster_suffix: ".tif".to_string(),
            raster_marker: "grd".to_string(),
            preview_suffix: ".png".to_string(),
        }
    }
}
