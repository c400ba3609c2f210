//! ODF element tree.
//!
//! Document nodes own their children through [`ElementList`] and take part in
//! serialization through [`OdfElement`]. Emission materializes an
//! [`XmlElement`] tree that is written out with `quick-xml`.

/// Ordered child storage and positional operations
pub mod container;
/// Drawing elements (images in frames)
pub mod draw;
/// Materialized XML elements
pub mod element;
/// The emission protocol and its per-pass context
pub mod emit;
/// Namespace handling utilities
pub mod namespace;
/// Per-pass style registry
pub mod registry;
/// Style elements
pub mod style;
/// Style builders
pub mod style_builder;
/// Text-related elements (paragraphs, headings, hyperlinks, lists)
pub mod text;

pub use container::{Container, ElementList};
pub use draw::{AnchorType, Image};
pub use element::{XmlElement, XmlNode};
pub use emit::{Children, EmitContext, NamespaceSet, OdfElement, ResolvedImage, reserve_style_names};
pub use namespace::Namespace;
pub use registry::StyleRegistry;
pub use style::{
    HorizontalAlignment, ParagraphProperties, Style, StyleFamily, StyleId, TextProperties,
    Underline,
};
pub use style_builder::{ParagraphStyleBuilder, StyleBuilder};
pub use text::{Block, Heading, Hyperlink, Inline, ItemContent, List, ListItem, Paragraph, TextRun};
