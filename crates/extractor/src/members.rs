//! Member selection rules.
//!
//! Pure name matching over an archive's member list; archives carry their
//! members in central-directory order and "first" always means that order.

use crate::conventions::Conventions;

/// The metadata document: first member whose name carries the SLC marker and
/// ends with the metadata suffix.
pub fn select_metadata_member<'a>(names: &'a [String], conv: &Conventions) -> Option<&'a str> {
    names
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            lower.contains(&conv.metadata_marker) && lower.ends_with(&conv.metadata_suffix)
        })
        .map(String::as_str)
}

/// The raster member the host application should load: a GRD-marked raster if
/// present, otherwise the first member with the raster suffix.
pub fn select_raster_member<'a>(names: &'a [String], conv: &Conventions) -> Option<&'a str> {
    let rasters = || {
        names
            .iter()
            .filter(|name| name.to_lowercase().ends_with(&conv.raster_suffix))
    };
    rasters()
        .find(|name| name.to_lowercase().contains(&conv.raster_marker))
        .or_else(|| rasters().next())
        .map(String::as_str)
}

/// The preview image: first member with the preview suffix.
pub fn select_preview_member<'a>(names: &'a [String], conv: &Conventions) -> Option<&'a str> {
    names
        .iter()
        .find(|name| name.to_lowercase().ends_with(&conv.preview_suffix))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metadata_requires_marker_and_suffix() {
        let conv = Conventions::default();
        let members = names(&[
            "product/summary.xml",
            "product/CSK_SLC_B.attribs.xml",
            "product/image.tif",
        ]);
        assert_eq!(
            select_metadata_member(&members, &conv),
            Some("product/CSK_SLC_B.attribs.xml")
        );

        let without = names(&["product/summary.xml", "product/slc_notes.txt"]);
        assert_eq!(select_metadata_member(&without, &conv), None);
    }

    #[test]
    fn test_metadata_match_is_case_insensitive() {
        let conv = Conventions::default();
        let members = names(&["PRODUCT/CSK_slc.XML"]);
        assert_eq!(
            select_metadata_member(&members, &conv),
            Some("PRODUCT/CSK_slc.XML")
        );
    }

    #[test]
    fn test_raster_prefers_grd_member() {
        let conv = Conventions::default();
        let members = names(&["a_slc.tif", "b_GRD.tif", "preview.png"]);
        assert_eq!(select_raster_member(&members, &conv), Some("b_GRD.tif"));
    }

    #[test]
    fn test_raster_falls_back_to_first() {
        let conv = Conventions::default();
        let members = names(&["a_slc.tif", "b_slc.tif"]);
        assert_eq!(select_raster_member(&members, &conv), Some("a_slc.tif"));
        assert_eq!(select_raster_member(&names(&["meta.xml"]), &conv), None);
    }

    #[test]
    fn test_preview_takes_first_png() {
        let conv = Conventions::default();
        let members = names(&["meta.xml", "quicklook.PNG", "other.png"]);
        assert_eq!(select_preview_member(&members, &conv), Some("quicklook.PNG"));
    }
}
