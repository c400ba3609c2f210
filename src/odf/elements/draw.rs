//! Drawing elements: images anchored in text.

use super::element::XmlElement;
use super::emit::{EmitContext, OdfElement};
use crate::common::unit::DEFAULT_DPI;
use crate::common::{Length, Result};
use crate::odf::constants::*;
use std::path::{Path, PathBuf};

/// How a frame is anchored to the surrounding text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorType {
    Paragraph,
    /// Positioned like a character on the text line
    #[default]
    AsChar,
    Char,
}

impl AnchorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::AsChar => "as-char",
            Self::Char => "char",
        }
    }
}

/// An image placed inline in a paragraph.
///
/// Emitted as a `draw:frame` wrapping a `draw:image` that links to the
/// package copy of the file. The file itself is described by the document's
/// image source at serialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    path: PathBuf,
    size: Option<(Length, Length)>,
    anchor: AnchorType,
}

impl Image {
    /// Create an image referencing the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
            anchor: AnchorType::default(),
        }
    }

    /// Source path of the image file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Explicit display size, if one was set
    pub fn size(&self) -> Option<(Length, Length)> {
        self.size
    }

    /// Override the display size; otherwise the pixel size at 96 DPI is used
    pub fn set_size(&mut self, width: Length, height: Length) -> &mut Self {
        self.size = Some((width, height));
        self
    }

    pub fn anchor(&self) -> AnchorType {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: AnchorType) -> &mut Self {
        self.anchor = anchor;
        self
    }
}

impl OdfElement for Image {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        Some(ctx.create_element(DRAW_FRAME))
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        let resolved = ctx.resolve_image(&self.path)?;
        let (width, height) = self.size.unwrap_or_else(|| {
            (
                Length::from_pixels(resolved.width_px, DEFAULT_DPI),
                Length::from_pixels(resolved.height_px, DEFAULT_DPI),
            )
        });

        ctx.set_attribute(element, ATTR_TEXT_ANCHOR_TYPE, self.anchor.as_str());
        ctx.set_attribute(element, ATTR_SVG_WIDTH, width.to_odf());
        ctx.set_attribute(element, ATTR_SVG_HEIGHT, height.to_odf());
        ctx.set_attribute(element, ATTR_DRAW_Z_INDEX, "0");

        let mut image = ctx.create_element(DRAW_IMAGE);
        ctx.set_attribute(&mut image, ATTR_XLINK_HREF, resolved.media.storage_path);
        ctx.set_attribute(&mut image, ATTR_XLINK_TYPE, "simple");
        ctx.set_attribute(&mut image, ATTR_XLINK_SHOW, "embed");
        ctx.set_attribute(&mut image, ATTR_XLINK_ACTUATE, "onLoad");
        element.push_element(image);
        Ok(())
    }
}
