//! Longan - A Rust library for building OpenDocument text documents
//!
//! This library provides an in-memory document object model for OpenDocument
//! text (.odt) documents. Paragraphs, headings, lists, hyperlinks, images and
//! styles are assembled as a tree, which is then serialized to ODF XML.
//!
//! # Features
//!
//! - **Element tree**: every container shares the same positional operations
//!   (append, clamped insert, lookup, removal)
//! - **Text runs**: adjacent text insertions merge into a single run
//! - **Styles**: each style is defined once per document however many nodes use
//!   it; default styles are never referenced by name
//! - **Images**: sizes come from an [`ImageSource`](odf::ImageSource); referenced
//!   files are reported for packaging
//!
//! # Example
//!
//! ```
//! use longan::odf::{Container, StyleBuilder, TextDocument};
//!
//! # fn main() -> longan::Result<()> {
//! let mut doc = TextDocument::new();
//! doc.add_heading("Shopping", 1);
//!
//! let list = doc.add_list();
//! list.add_item("apples");
//! list.add_item("pears");
//!
//! let paragraph = doc.add_paragraph("Order from ");
//! paragraph.add_hyperlink("the shop", "https://example.com");
//! paragraph
//!     .add_hyperlink("today", "https://example.com/today")
//!     .set_style(Some(StyleBuilder::new().italic().build()));
//! assert_eq!(paragraph.text(), "Order from the shoptoday");
//!
//! assert_eq!(doc.size(), 3);
//! let xml = doc.to_xml_string()?;
//! assert!(xml.contains("<text:list-item><text:p>pears</text:p></text:list-item>"));
//! # Ok(())
//! # }
//! ```

/// Common types, errors and units
pub mod common;

/// OpenDocument text documents
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use odf::TextDocument;
