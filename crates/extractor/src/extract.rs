//! The archive metadata extractor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bytes::Bytes;
use tracing::debug;
use zip::ZipArchive;

use sar_common::{ArchiveRecord, AttrValue, AttributeSchema, FieldKind, Footprint};

use crate::conventions::Conventions;
use crate::error::{ExtractError, Result};
use crate::members;
use crate::xml::TagIndex;

/// Extracts normalized records from product archives.
///
/// One extraction opens the archive, reads the members it needs fully into
/// memory, and closes the container before returning; no archive handle
/// outlives a single call.
#[derive(Debug, Clone)]
pub struct Extractor {
    schema: AttributeSchema,
    conventions: Conventions,
}

impl Extractor {
    /// Create an extractor populating the given attribute schema, with the
    /// default member naming conventions.
    pub fn new(schema: AttributeSchema) -> Self {
        Self {
            schema,
            conventions: Conventions::default(),
        }
    }

    /// Create an extractor with custom naming conventions.
    pub fn with_conventions(schema: AttributeSchema, conventions: Conventions) -> Self {
        Self {
            schema,
            conventions,
        }
    }

    pub fn schema(&self) -> AttributeSchema {
        self.schema
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Extract the normalized record for one archive.
    pub fn extract(&self, archive_path: &Path) -> Result<ArchiveRecord> {
        let mut archive = self.open(archive_path)?;
        let names = member_names(&mut archive)?;
        let metadata_member = members::select_metadata_member(&names, &self.conventions)
            .ok_or(ExtractError::MetadataNotFound)?
            .to_string();
        debug!(
            archive = %archive_path.display(),
            member = %metadata_member,
            "reading metadata document"
        );
        let xml = read_member_string(&mut archive, &metadata_member)?;
        drop(archive);

        let doc = TagIndex::parse(&xml)?;
        let footprint = extract_footprint(&doc)?;
        let attributes = self.extract_attributes(&doc);
        Ok(ArchiveRecord::new(
            archive_path.to_path_buf(),
            self.schema,
            attributes,
            footprint,
        ))
    }

    /// Name of the raster member the host application should load, if any.
    pub fn raster_member(&self, archive_path: &Path) -> Result<Option<String>> {
        let mut archive = self.open(archive_path)?;
        let names = member_names(&mut archive)?;
        Ok(members::select_raster_member(&names, &self.conventions).map(str::to_string))
    }

    /// Raw encoded preview image bytes, if the archive carries a preview
    /// member. No decoding happens here.
    pub fn preview_bytes(&self, archive_path: &Path) -> Result<Option<Bytes>> {
        let mut archive = self.open(archive_path)?;
        let names = member_names(&mut archive)?;
        match members::select_preview_member(&names, &self.conventions) {
            Some(member) => {
                let member = member.to_string();
                let data = read_member_bytes(&mut archive, &member)?;
                Ok(Some(Bytes::from(data)))
            }
            None => Ok(None),
        }
    }

    fn open(&self, archive_path: &Path) -> Result<ZipArchive<File>> {
        let file = File::open(archive_path).map_err(|e| {
            ExtractError::ArchiveUnreadable(format!("{}: {}", archive_path.display(), e))
        })?;
        ZipArchive::new(file).map_err(|e| {
            ExtractError::ArchiveUnreadable(format!("{}: {}", archive_path.display(), e))
        })
    }

    fn extract_attributes(&self, doc: &TagIndex) -> Vec<AttrValue> {
        self.schema
            .fields()
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Text => doc
                        .text(field.tag)
                        .map(|text| AttrValue::Text(text.to_string())),
                    FieldKind::Number => doc.number(field.tag).map(AttrValue::Number),
                };
                value.unwrap_or_else(|| field.kind.default_value())
            })
            .collect()
    }
}

/// Compose the virtual path the host application uses to open a raster member
/// in place (GDAL /vsizip/ convention), without extracting it to disk.
pub fn raster_virtual_path(archive_path: &Path, member: &str) -> String {
    format!("/vsizip/{}/{}", archive_path.display(), member)
}

/// The four corner fields of the footprint, by metadata tag.
const CORNER_TAGS: [&str; 4] = [
    "coord_first_near",
    "coord_first_far",
    "coord_last_near",
    "coord_last_far",
];

fn extract_footprint(doc: &TagIndex) -> Result<Footprint> {
    let corners: Vec<_> = CORNER_TAGS.iter().map(|tag| doc.coord(tag)).collect();
    match (corners[0], corners[1], corners[2], corners[3]) {
        (Some(first_near), Some(first_far), Some(last_near), Some(last_far)) => Ok(Footprint {
            first_near,
            first_far,
            last_near,
            last_far,
        }),
        _ => {
            let missing: Vec<&str> = CORNER_TAGS
                .iter()
                .zip(&corners)
                .filter(|(_, corner)| corner.is_none())
                .map(|(tag, _)| *tag)
                .collect();
            Err(ExtractError::IncompleteFootprint(missing.join(", ")))
        }
    }
}

/// Member names in central-directory order.
fn member_names(archive: &mut ZipArchive<File>) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let member = archive
            .by_index(i)
            .map_err(|e| ExtractError::ArchiveUnreadable(format!("member {i}: {e}")))?;
        names.push(member.name().to_string());
    }
    Ok(names)
}

fn read_member_bytes(archive: &mut ZipArchive<File>, member: &str) -> Result<Vec<u8>> {
    let mut file = archive
        .by_name(member)
        .map_err(|e| ExtractError::ArchiveUnreadable(format!("{member}: {e}")))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| ExtractError::ArchiveUnreadable(format!("{member}: {e}")))?;
    Ok(data)
}

fn read_member_string(archive: &mut ZipArchive<File>, member: &str) -> Result<String> {
    let data = read_member_bytes(archive, member)?;
    String::from_utf8(data)
        .map_err(|e| ExtractError::MetadataMalformed(format!("{member}: {e}")))
}
