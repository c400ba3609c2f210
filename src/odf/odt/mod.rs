//! OpenDocument Text (.odt) document root.
//!
//! [`TextDocument`] owns the body blocks and drives serialization: one
//! emission pass over the tree, then assembly of the flat XML document or of
//! the package parts handed to a [`PackageSink`](crate::odf::core::PackageSink).

mod document;

pub use document::{SerializedDocument, TextDocument};
