//! Namespace handling for emitted ODF XML.
//!
//! Every qualified name the emitter writes carries a prefix from the closed set
//! below. The first element or attribute using a prefix causes its
//! declaration to be added to the document root.

use phf::{Map, phf_map};
use std::fmt;

/// Office namespace
pub const OFFICENS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";

/// Style namespace
pub const STYLENS: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";

/// Text namespace
pub const TEXTNS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";

/// XSL-FO compatible namespace
pub const FONS: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";

/// XLink namespace
pub const XLINKNS: &str = "http://www.w3.org/1999/xlink";

/// Drawing namespace
pub const DRAWNS: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";

/// SVG compatible namespace
pub const SVGNS: &str = "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0";

/// Vocabulary used by a qualified name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Office,
    Style,
    Text,
    Fo,
    Xlink,
    Draw,
    Svg,
}

/// Prefix to namespace mapping (compile-time perfect hash map)
static PREFIX_TO_NAMESPACE: Map<&'static str, Namespace> = phf_map! {
    "office" => Namespace::Office,
    "style" => Namespace::Style,
    "text" => Namespace::Text,
    "fo" => Namespace::Fo,
    "xlink" => Namespace::Xlink,
    "draw" => Namespace::Draw,
    "svg" => Namespace::Svg,
};

impl Namespace {
    /// Conventional prefix for this namespace
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Style => "style",
            Self::Text => "text",
            Self::Fo => "fo",
            Self::Xlink => "xlink",
            Self::Draw => "draw",
            Self::Svg => "svg",
        }
    }

    /// Namespace URI
    pub fn uri(self) -> &'static str {
        match self {
            Self::Office => OFFICENS,
            Self::Style => STYLENS,
            Self::Text => TEXTNS,
            Self::Fo => FONS,
            Self::Xlink => XLINKNS,
            Self::Draw => DRAWNS,
            Self::Svg => SVGNS,
        }
    }

    /// Name of the `xmlns:*` attribute declaring this namespace
    pub fn declaration_name(self) -> &'static str {
        match self {
            Self::Office => "xmlns:office",
            Self::Style => "xmlns:style",
            Self::Text => "xmlns:text",
            Self::Fo => "xmlns:fo",
            Self::Xlink => "xmlns:xlink",
            Self::Draw => "xmlns:draw",
            Self::Svg => "xmlns:svg",
        }
    }

    /// Look up a namespace by prefix
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        PREFIX_TO_NAMESPACE.get(prefix).copied()
    }

    /// Namespace of a qualified name such as `text:p`.
    ///
    /// Returns `None` for unprefixed names and unknown prefixes.
    pub fn of_qualified(name: &str) -> Option<Self> {
        name.split_once(':')
            .and_then(|(prefix, _)| Self::from_prefix(prefix))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for ns in [
            Namespace::Office,
            Namespace::Style,
            Namespace::Text,
            Namespace::Fo,
            Namespace::Xlink,
            Namespace::Draw,
            Namespace::Svg,
        ] {
            assert_eq!(Namespace::from_prefix(ns.prefix()), Some(ns));
        }
    }

    #[test]
    fn test_of_qualified() {
        assert_eq!(Namespace::of_qualified("text:p"), Some(Namespace::Text));
        assert_eq!(Namespace::of_qualified("xlink:href"), Some(Namespace::Xlink));
        assert_eq!(Namespace::of_qualified("p"), None);
        assert_eq!(Namespace::of_qualified("table:table"), None);
    }

    #[test]
    fn test_declaration_name() {
        assert_eq!(Namespace::Text.declaration_name(), "xmlns:text");
        assert_eq!(Namespace::Text.uri(), TEXTNS);
    }
}
