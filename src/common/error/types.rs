//! Error type shared by every module of the crate.
use thiserror::Error;

use crate::odf::StyleId;

/// Main error type for longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// An image could not be described by the image source
    #[error("Image error: {0}")]
    Image(String),

    /// A style was renamed after its definition had already been emitted.
    ///
    /// This is a logic error in the calling code, not a recoverable condition.
    #[error("Style {id} was emitted as '{emitted}' but is now named '{current}'")]
    StaleStyle {
        id: StyleId,
        emitted: String,
        current: String,
    },

    /// A style was flagged default or had its properties changed after its
    /// definition had already been emitted in the same pass
    #[error("Style {id} ('{name}') was changed after its definition was emitted")]
    ModifiedStyle { id: StyleId, name: String },

    /// Two distinct styles share the same explicit name
    #[error("Style name '{0}' is used by more than one style")]
    DuplicateStyleName(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for longan operations.
pub type Result<T> = std::result::Result<T, Error>;
