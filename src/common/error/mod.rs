//! Unified error types for the longan library.
//!
//! Building a document tree never fails; errors only surface while a tree is
//! serialized (image probing, XML writing) or when a style invariant is broken.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
