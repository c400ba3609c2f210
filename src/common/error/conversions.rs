//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from dependency
//! error types to the unified Error type.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(feature = "fs-images")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::XmlError(format!("Serialized XML is not valid UTF-8: {}", err))
    }
}
