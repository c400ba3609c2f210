//! ODF constants: MIME types, part paths, element and attribute names.
//!
//! Every qualified name written by the emitter is defined here so node
//! implementations never spell markup inline.

use phf::{Map, phf_map};

/// ODF specification version written when no other version is configured
pub const OFFICE_VERSION: &str = "1.2";

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Text (.odt)
pub const ODF_TEXT: &str = "application/vnd.oasis.opendocument.text";

/// Image file extensions mapped to the media type recorded for the package
pub static IMAGE_EXTENSION_TO_MIME: Map<&'static str, &'static str> = phf_map! {
    "png" => "image/png",
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "bmp" => "image/bmp",
    "svg" => "image/svg+xml",
};

// ============================================================================
// PACKAGE PATHS
// ============================================================================

/// Main content part
pub const ODF_CONTENT: &str = "content.xml";

/// Common styles part
pub const ODF_STYLES: &str = "styles.xml";

/// Directory holding embedded pictures
pub const ODF_PICTURES_DIR: &str = "Pictures";

// ============================================================================
// ELEMENT NAMES
// ============================================================================

pub const OFFICE_DOCUMENT: &str = "office:document";
pub const OFFICE_DOCUMENT_CONTENT: &str = "office:document-content";
pub const OFFICE_DOCUMENT_STYLES: &str = "office:document-styles";
pub const OFFICE_BODY: &str = "office:body";
pub const OFFICE_TEXT: &str = "office:text";
pub const OFFICE_STYLES: &str = "office:styles";
pub const OFFICE_AUTOMATIC_STYLES: &str = "office:automatic-styles";

pub const STYLE_STYLE: &str = "style:style";
pub const STYLE_DEFAULT_STYLE: &str = "style:default-style";
pub const STYLE_PARAGRAPH_PROPERTIES: &str = "style:paragraph-properties";
pub const STYLE_TEXT_PROPERTIES: &str = "style:text-properties";

pub const TEXT_P: &str = "text:p";
pub const TEXT_H: &str = "text:h";
pub const TEXT_LIST: &str = "text:list";
pub const TEXT_LIST_ITEM: &str = "text:list-item";
pub const TEXT_A: &str = "text:a";
pub const TEXT_LINE_BREAK: &str = "text:line-break";
pub const TEXT_TAB: &str = "text:tab";
pub const TEXT_S: &str = "text:s";

pub const DRAW_FRAME: &str = "draw:frame";
pub const DRAW_IMAGE: &str = "draw:image";

// ============================================================================
// ATTRIBUTE NAMES
// ============================================================================

pub const ATTR_OFFICE_MIMETYPE: &str = "office:mimetype";
pub const ATTR_OFFICE_VERSION: &str = "office:version";

pub const ATTR_STYLE_NAME: &str = "style:name";
pub const ATTR_STYLE_FAMILY: &str = "style:family";
pub const ATTR_STYLE_FONT_NAME: &str = "style:font-name";
pub const ATTR_STYLE_UNDERLINE_STYLE: &str = "style:text-underline-style";
pub const ATTR_STYLE_UNDERLINE_WIDTH: &str = "style:text-underline-width";
pub const ATTR_STYLE_UNDERLINE_COLOR: &str = "style:text-underline-color";

pub const ATTR_TEXT_STYLE_NAME: &str = "text:style-name";
pub const ATTR_TEXT_OUTLINE_LEVEL: &str = "text:outline-level";
pub const ATTR_TEXT_C: &str = "text:c";
pub const ATTR_TEXT_ANCHOR_TYPE: &str = "text:anchor-type";

pub const ATTR_FO_TEXT_ALIGN: &str = "fo:text-align";
pub const ATTR_FO_BREAK_BEFORE: &str = "fo:break-before";
pub const ATTR_FO_KEEP_TOGETHER: &str = "fo:keep-together";
pub const ATTR_FO_MARGIN_TOP: &str = "fo:margin-top";
pub const ATTR_FO_MARGIN_BOTTOM: &str = "fo:margin-bottom";
pub const ATTR_FO_MARGIN_LEFT: &str = "fo:margin-left";
pub const ATTR_FO_MARGIN_RIGHT: &str = "fo:margin-right";
pub const ATTR_FO_LINE_HEIGHT: &str = "fo:line-height";
pub const ATTR_FO_FONT_SIZE: &str = "fo:font-size";
pub const ATTR_FO_FONT_WEIGHT: &str = "fo:font-weight";
pub const ATTR_FO_FONT_STYLE: &str = "fo:font-style";
pub const ATTR_FO_COLOR: &str = "fo:color";

pub const ATTR_XLINK_TYPE: &str = "xlink:type";
pub const ATTR_XLINK_HREF: &str = "xlink:href";
pub const ATTR_XLINK_SHOW: &str = "xlink:show";
pub const ATTR_XLINK_ACTUATE: &str = "xlink:actuate";

pub const ATTR_SVG_WIDTH: &str = "svg:width";
pub const ATTR_SVG_HEIGHT: &str = "svg:height";
pub const ATTR_DRAW_Z_INDEX: &str = "draw:z-index";

/// Get the media type for an image file extension, case-insensitively
#[inline]
pub fn get_image_media_type(ext: &str) -> Option<&'static str> {
    IMAGE_EXTENSION_TO_MIME
        .get(ext.to_ascii_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_media_type() {
        assert_eq!(get_image_media_type("png"), Some("image/png"));
        assert_eq!(get_image_media_type("JPG"), Some("image/jpeg"));
        assert_eq!(get_image_media_type("tiff"), None);
    }

    #[test]
    fn test_standard_paths() {
        assert_eq!(ODF_CONTENT, "content.xml");
        assert_eq!(ODF_PICTURES_DIR, "Pictures");
    }

    #[test]
    fn test_office_version() {
        assert_eq!(OFFICE_VERSION, "1.2");
    }
}
