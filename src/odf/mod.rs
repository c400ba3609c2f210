//! OpenDocument Format (ODF) text documents.
//!
//! - `elements`: the node types, the element tree and the emission protocol
//! - `core`: serialization options and the image-source and package-sink boundaries
//! - `odt`: the [`TextDocument`] root
//! - `constants`: MIME types, part paths, element and attribute names
//!
//! # Example
//!
//! ```
//! use longan::odf::{ParagraphStyleBuilder, TextDocument};
//!
//! # fn main() -> longan::Result<()> {
//! let mut doc = TextDocument::new();
//! let bold = ParagraphStyleBuilder::new().bold().build();
//! doc.add_paragraph("Important").set_style(Some(bold.clone()));
//! doc.add_paragraph("Also important").set_style(Some(bold));
//!
//! let xml = doc.to_xml_string()?;
//! assert_eq!(xml.matches("<style:style ").count(), 1);
//! # Ok(())
//! # }
//! ```

/// ODF constants and lookup tables
pub mod constants;
/// Serialization options and collaborator boundaries
pub mod core;
/// ODF element tree
pub mod elements;
/// ODF text document (.odt) support
pub mod odt;

/// Re-export the main APIs
pub use self::core::{
    ImageAsset, ImageSource, MediaRef, MemoryPackage, NoImageSource, OfficeVersion, PackageSink,
    SerializeOptions,
};
#[cfg(feature = "fs-images")]
pub use self::core::FsImageSource;
pub use elements::{
    AnchorType, Block, Container, Heading, HorizontalAlignment, Hyperlink, Image, Inline,
    ItemContent, List, ListItem, Paragraph, ParagraphStyleBuilder, Style, StyleBuilder,
    StyleFamily, StyleId, TextRun, Underline,
};
pub use odt::{SerializedDocument, TextDocument};
