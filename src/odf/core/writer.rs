//! Package assembly boundary.
//!
//! Bundling a document into an `.odt` archive is left to the caller. A
//! [`PackageSink`] receives the MIME type, the generated XML parts and every
//! referenced media file; [`MemoryPackage`] is a sink that simply records them.

use super::media::MediaRef;
use crate::common::{Error, Result};
use std::path::PathBuf;

/// Receives the parts of a serialized document.
pub trait PackageSink {
    /// Set the MIME type of the package
    fn set_mimetype(&mut self, mimetype: &str) -> Result<()>;

    /// Add a generated XML part
    fn add_xml(&mut self, path: &str, xml: &str) -> Result<()>;

    /// Add a media file referenced from the XML
    fn add_media(&mut self, media: &MediaRef) -> Result<()>;
}

/// Content of a recorded part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    Xml(String),
    /// File still on disk, to be copied by whoever writes the archive
    File(PathBuf),
}

/// Entry recorded by [`MemoryPackage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    pub full_path: String,
    pub media_type: String,
    pub content: PartContent,
}

/// Package sink that keeps every part in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPackage {
    mimetype: Option<String>,
    parts: Vec<PackagePart>,
}

impl MemoryPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    pub fn parts(&self) -> &[PackagePart] {
        &self.parts
    }

    /// Get a part by its path inside the package
    pub fn get_part(&self, full_path: &str) -> Option<&PackagePart> {
        self.parts.iter().find(|part| part.full_path == full_path)
    }

    fn push(&mut self, part: PackagePart) -> Result<()> {
        if self.get_part(&part.full_path).is_some() {
            return Err(Error::Other(format!(
                "duplicate package entry: {}",
                part.full_path
            )));
        }
        self.parts.push(part);
        Ok(())
    }
}

impl PackageSink for MemoryPackage {
    fn set_mimetype(&mut self, mimetype: &str) -> Result<()> {
        self.mimetype = Some(mimetype.to_string());
        Ok(())
    }

    fn add_xml(&mut self, path: &str, xml: &str) -> Result<()> {
        self.push(PackagePart {
            full_path: path.to_string(),
            media_type: "text/xml".to_string(),
            content: PartContent::Xml(xml.to_string()),
        })
    }

    fn add_media(&mut self, media: &MediaRef) -> Result<()> {
        self.push(PackagePart {
            full_path: media.storage_path.clone(),
            media_type: media.media_type.to_string(),
            content: PartContent::File(media.source.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_package_records_parts_in_order() {
        let mut package = MemoryPackage::new();
        package.set_mimetype("application/vnd.oasis.opendocument.text").unwrap();
        package.add_xml("content.xml", "<office:document-content/>").unwrap();
        package
            .add_media(&MediaRef {
                source: PathBuf::from("logo.png"),
                storage_path: "Pictures/logo.png".to_string(),
                media_type: "image/png",
            })
            .unwrap();

        assert_eq!(package.mimetype(), Some("application/vnd.oasis.opendocument.text"));
        let paths: Vec<_> = package.parts().iter().map(|p| p.full_path.as_str()).collect();
        assert_eq!(paths, vec!["content.xml", "Pictures/logo.png"]);
        assert_eq!(package.get_part("Pictures/logo.png").unwrap().media_type, "image/png");
    }

    #[test]
    fn test_duplicate_entries_are_rejected() {
        let mut package = MemoryPackage::new();
        package.add_xml("content.xml", "<a/>").unwrap();
        assert!(package.add_xml("content.xml", "<b/>").is_err());
    }
}
