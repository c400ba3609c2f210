//! Collaborator boundaries and serialization settings.
//!
//! - `config.rs`: [`SerializeOptions`] controlling the XML output
//! - `media.rs`: the [`ImageSource`] boundary and the [`MediaCatalog`] of referenced files
//! - `writer.rs`: the [`PackageSink`] boundary for package assembly

/// Serialization options
mod config;
/// Image sources and referenced media
mod media;
/// Package assembly boundary
mod writer;

pub use config::{OfficeVersion, SerializeOptions};
#[cfg(feature = "fs-images")]
pub use media::FsImageSource;
pub use media::{ImageAsset, ImageSource, MediaCatalog, MediaRef, NoImageSource, default_image_source};
pub use writer::{MemoryPackage, PackagePart, PackageSink, PartContent};
