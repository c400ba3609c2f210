//! Referenced media and the image-source boundary.
//!
//! The DOM never reads image bytes. An [`ImageSource`] describes the asset
//! behind a path (pixel size, storage path inside the package) and the
//! [`MediaCatalog`] records each referenced file once, in first-use order, so a
//! packaging step can copy them into the archive.

use crate::common::{Error, Result};
use crate::odf::constants::{ODF_PICTURES_DIR, get_image_media_type};
use std::path::{Path, PathBuf};

/// What the emitter needs to know about an image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub width_px: u32,
    pub height_px: u32,
    /// Path of the asset inside the package, e.g. `Pictures/logo.png`
    pub storage_path: String,
}

/// Describes image files referenced from a document.
pub trait ImageSource {
    fn describe(&self, path: &Path) -> Result<ImageAsset>;
}

/// Image source that rejects every image
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageSource;

impl ImageSource for NoImageSource {
    fn describe(&self, path: &Path) -> Result<ImageAsset> {
        Err(Error::Image(format!(
            "no image source configured for {}",
            path.display()
        )))
    }
}

/// Image source reading image headers from the filesystem.
#[cfg(feature = "fs-images")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSource;

#[cfg(feature = "fs-images")]
impl ImageSource for FsImageSource {
    fn describe(&self, path: &Path) -> Result<ImageAsset> {
        let (width_px, height_px) = image::image_dimensions(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::Image(format!("invalid image file name: {}", path.display())))?;
        log::debug!("read {} header: {}x{}", path.display(), width_px, height_px);
        Ok(ImageAsset {
            width_px,
            height_px,
            storage_path: format!("{}/{}", ODF_PICTURES_DIR, file_name),
        })
    }
}

/// Image source used by documents that are not given one explicitly
pub fn default_image_source() -> Box<dyn ImageSource> {
    #[cfg(feature = "fs-images")]
    {
        Box::new(FsImageSource)
    }
    #[cfg(not(feature = "fs-images"))]
    {
        Box::new(NoImageSource)
    }
}

/// A media file referenced by the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    /// Path the caller gave for the file
    pub source: PathBuf,
    /// Unique path inside the package
    pub storage_path: String,
    pub media_type: &'static str,
}

/// Ordered, de-duplicated list of referenced media.
#[derive(Debug, Clone, Default)]
pub struct MediaCatalog {
    entries: Vec<MediaRef>,
}

impl MediaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `source`, returning its entry.
    ///
    /// The same source path always maps to the same entry. Distinct sources
    /// whose storage paths collide get a numeric suffix.
    pub fn register(&mut self, source: &Path, asset: &ImageAsset) -> &MediaRef {
        if let Some(index) = self.entries.iter().position(|entry| entry.source == source) {
            return &self.entries[index];
        }

        let storage_path = self.unique_storage_path(&asset.storage_path);
        let media_type = Path::new(&storage_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(get_image_media_type)
            .unwrap_or("application/octet-stream");

        self.entries.push(MediaRef {
            source: source.to_path_buf(),
            storage_path,
            media_type,
        });
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    fn unique_storage_path(&self, wanted: &str) -> String {
        let taken = |path: &str| self.entries.iter().any(|entry| entry.storage_path == path);
        if !taken(wanted) {
            return wanted.to_string();
        }

        let (stem, ext) = match wanted.rfind('.') {
            Some(dot) if dot > wanted.rfind('/').map_or(0, |slash| slash + 1) => {
                (&wanted[..dot], &wanted[dot..])
            },
            _ => (wanted, ""),
        };
        let mut buffer = itoa::Buffer::new();
        let mut n: u32 = 1;
        loop {
            let candidate = format!("{}-{}{}", stem, buffer.format(n), ext);
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn entries(&self) -> &[MediaRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<MediaRef> {
        self.entries
    }
}
