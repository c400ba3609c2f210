//! Common types and utilities shared across the crate.
//!
//! Errors, measurement units and the small value types (lengths, colors) that
//! style properties are expressed in.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
