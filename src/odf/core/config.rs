//! Serialization options.

use crate::odf::constants::OFFICE_VERSION;

/// ODF version written to `office:version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfficeVersion {
    V1_1,
    #[default]
    V1_2,
    V1_3,
}

impl OfficeVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_1 => "1.1",
            Self::V1_2 => OFFICE_VERSION,
            Self::V1_3 => "1.3",
        }
    }
}

/// Configuration options for serializing a document.
///
/// # Examples
///
/// ```rust
/// use longan::odf::{OfficeVersion, SerializeOptions};
///
/// let options = SerializeOptions::new()
///     .with_xml_declaration(false)
///     .with_office_version(OfficeVersion::V1_3);
/// assert!(!options.xml_declaration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Whether to start the output with an `<?xml ...?>` declaration
    pub xml_declaration: bool,
    /// Version written to the root element
    pub office_version: OfficeVersion,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            office_version: OfficeVersion::default(),
        }
    }
}

impl SerializeOptions {
    /// Create a new `SerializeOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the XML declaration.
    #[inline]
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set the ODF version written to `office:version`.
    #[inline]
    pub fn with_office_version(mut self, version: OfficeVersion) -> Self {
        self.office_version = version;
        self
    }
}
