//! Style definitions for ODF text documents.
//!
//! A [`Style`] is a formatting definition shared by any number of nodes. It is
//! attached by value: cloning a style keeps its [`StyleId`], so every clone is
//! the same style as far as the registry is concerned. Use [`Style::new`] (or
//! the builders) for a distinct style.

use super::element::XmlElement;
use super::emit::NamespaceSet;
use crate::common::{Length, RGBColor};
use crate::odf::constants::*;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STYLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a style, independent of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(u64);

impl StyleId {
    fn next() -> Self {
        Self(NEXT_STYLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Style family types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Paragraph styles, applied to paragraphs and headings
    Paragraph,
    /// Text/character styles, applied to inline nodes
    Text,
}

impl StyleFamily {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Text => "text",
        }
    }

    /// Prefix of generated style names
    pub fn name_prefix(&self) -> &'static str {
        match self {
            Self::Paragraph => "P",
            Self::Text => "T",
        }
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl HorizontalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "center",
            Self::Right => "end",
            Self::Justify => "justify",
        }
    }
}

/// Underline line style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Solid,
    Dotted,
    Dash,
    Wave,
}

impl Underline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dash => "dash",
            Self::Wave => "wave",
        }
    }
}

/// Paragraph style properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProperties {
    pub alignment: Option<HorizontalAlignment>,
    pub page_break_before: bool,
    pub keep_together: bool,
    pub margin_top: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub margin_left: Option<Length>,
    pub margin_right: Option<Length>,
    /// Proportional line height in percent
    pub line_height_percent: Option<u16>,
}

impl ParagraphProperties {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn write_into(&self, element: &mut XmlElement, ns: &mut NamespaceSet) {
        if let Some(alignment) = self.alignment {
            ns.set_attribute(element, ATTR_FO_TEXT_ALIGN, alignment.as_str());
        }
        if self.page_break_before {
            ns.set_attribute(element, ATTR_FO_BREAK_BEFORE, "page");
        }
        if self.keep_together {
            ns.set_attribute(element, ATTR_FO_KEEP_TOGETHER, "always");
        }
        let margins = [
            (ATTR_FO_MARGIN_TOP, self.margin_top),
            (ATTR_FO_MARGIN_BOTTOM, self.margin_bottom),
            (ATTR_FO_MARGIN_LEFT, self.margin_left),
            (ATTR_FO_MARGIN_RIGHT, self.margin_right),
        ];
        for (name, margin) in margins {
            if let Some(margin) = margin {
                ns.set_attribute(element, name, margin.to_odf());
            }
        }
        if let Some(percent) = self.line_height_percent {
            let mut buffer = itoa::Buffer::new();
            ns.set_attribute(element, ATTR_FO_LINE_HEIGHT, format!("{}%", buffer.format(percent)));
        }
    }
}

/// Text/character style properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProperties {
    pub font_name: Option<String>,
    /// Font size in points
    pub font_size: Option<f32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: Option<Underline>,
    pub color: Option<RGBColor>,
}

impl TextProperties {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn write_into(&self, element: &mut XmlElement, ns: &mut NamespaceSet) {
        if let Some(font_name) = &self.font_name {
            ns.set_attribute(element, ATTR_STYLE_FONT_NAME, font_name.as_str());
        }
        if let Some(size) = self.font_size {
            ns.set_attribute(element, ATTR_FO_FONT_SIZE, format!("{}pt", size));
        }
        if self.bold {
            ns.set_attribute(element, ATTR_FO_FONT_WEIGHT, "bold");
        }
        if self.italic {
            ns.set_attribute(element, ATTR_FO_FONT_STYLE, "italic");
        }
        if let Some(underline) = self.underline {
            ns.set_attribute(element, ATTR_STYLE_UNDERLINE_STYLE, underline.as_str());
            ns.set_attribute(element, ATTR_STYLE_UNDERLINE_WIDTH, "auto");
            ns.set_attribute(element, ATTR_STYLE_UNDERLINE_COLOR, "font-color");
        }
        if let Some(color) = self.color {
            ns.set_attribute(element, ATTR_FO_COLOR, color.to_string());
        }
    }
}

/// A style definition
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    id: StyleId,
    family: StyleFamily,
    name: Option<String>,
    default: bool,
    paragraph: ParagraphProperties,
    text: TextProperties,
}

impl Style {
    /// Create a new, unnamed, non-default style
    pub fn new(family: StyleFamily) -> Self {
        Self {
            id: StyleId::next(),
            family,
            name: None,
            default: false,
            paragraph: ParagraphProperties::default(),
            text: TextProperties::default(),
        }
    }

    /// Create a new paragraph style
    pub fn paragraph() -> Self {
        Self::new(StyleFamily::Paragraph)
    }

    /// Create a new text style
    pub fn text() -> Self {
        Self::new(StyleFamily::Text)
    }

    /// Create a new style with an explicit name
    pub fn with_name_and_family(name: &str, family: StyleFamily) -> Self {
        let mut style = Self::new(family);
        style.name = Some(name.to_string());
        style
    }

    /// Create a style marked as the document default for its family
    pub fn default_for(family: StyleFamily) -> Self {
        let mut style = Self::new(family);
        style.default = true;
        style
    }

    pub fn id(&self) -> StyleId {
        self.id
    }

    pub fn family(&self) -> StyleFamily {
        self.family
    }

    /// Explicit name, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the style name.
    ///
    /// Renaming a style after it has been emitted in the current pass is an
    /// error reported at serialization.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Whether this style is the ambient default
    pub fn is_default(&self) -> bool {
        self.default
    }

    pub fn set_default(&mut self, default: bool) {
        self.default = default;
    }

    pub fn paragraph_properties(&self) -> &ParagraphProperties {
        &self.paragraph
    }

    pub fn paragraph_properties_mut(&mut self) -> &mut ParagraphProperties {
        &mut self.paragraph
    }

    pub fn text_properties(&self) -> &TextProperties {
        &self.text
    }

    pub fn text_properties_mut(&mut self) -> &mut TextProperties {
        &mut self.text
    }

    /// Whether `other` is this style (possibly a clone of it)
    pub fn same_style(&self, other: &Style) -> bool {
        self.id == other.id
    }

    /// Build the style's definition element.
    ///
    /// Default styles become `style:default-style` and never carry a name.
    pub(crate) fn to_definition(&self, name: &str, ns: &mut NamespaceSet) -> XmlElement {
        let mut element = if self.default {
            ns.create_element(STYLE_DEFAULT_STYLE)
        } else {
            let mut element = ns.create_element(STYLE_STYLE);
            ns.set_attribute(&mut element, ATTR_STYLE_NAME, name);
            element
        };
        ns.set_attribute(&mut element, ATTR_STYLE_FAMILY, self.family.as_str());

        // Text styles cannot carry paragraph properties
        if self.family == StyleFamily::Paragraph && !self.paragraph.is_empty() {
            let mut props = ns.create_element(STYLE_PARAGRAPH_PROPERTIES);
            self.paragraph.write_into(&mut props, ns);
            element.push_element(props);
        }
        if !self.text.is_empty() {
            let mut props = ns.create_element(STYLE_TEXT_PROPERTIES);
            self.text.write_into(&mut props, ns);
            element.push_element(props);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::elements::namespace::Namespace;

    #[test]
    fn test_clones_share_identity() {
        let style = Style::paragraph();
        let clone = style.clone();
        assert!(style.same_style(&clone));
        assert!(!style.same_style(&Style::paragraph()));
    }

    #[test]
    fn test_family_names() {
        assert_eq!(StyleFamily::Paragraph.as_str(), "paragraph");
        assert_eq!(StyleFamily::Text.as_str(), "text");
        assert_eq!(StyleFamily::Paragraph.name_prefix(), "P");
        assert_eq!(StyleFamily::Text.name_prefix(), "T");
    }

    #[test]
    fn test_named_definition() {
        let mut style = Style::paragraph();
        style.paragraph_properties_mut().alignment = Some(HorizontalAlignment::Center);
        style.text_properties_mut().bold = true;

        let mut ns = NamespaceSet::new();
        let xml = style.to_definition("P1", &mut ns).to_xml_string().unwrap();
        assert_eq!(
            xml,
            "<style:style style:name=\"P1\" style:family=\"paragraph\">\
             <style:paragraph-properties fo:text-align=\"center\"/>\
             <style:text-properties fo:font-weight=\"bold\"/>\
             </style:style>"
        );
        assert!(ns.contains(Namespace::Style));
        assert!(ns.contains(Namespace::Fo));
    }

    #[test]
    fn test_default_definition_has_no_name() {
        let mut style = Style::default_for(StyleFamily::Paragraph);
        style.text_properties_mut().font_size = Some(11.0);

        let mut ns = NamespaceSet::new();
        let element = style.to_definition("P1", &mut ns);
        assert_eq!(element.tag_name(), STYLE_DEFAULT_STYLE);
        assert!(!element.has_attribute(ATTR_STYLE_NAME));
        let props = element.find_child(STYLE_TEXT_PROPERTIES).unwrap();
        assert_eq!(props.get_attribute(ATTR_FO_FONT_SIZE), Some("11pt"));
    }

    #[test]
    fn test_text_style_ignores_paragraph_properties() {
        let mut style = Style::text();
        style.paragraph_properties_mut().keep_together = true;
        style.text_properties_mut().underline = Some(Underline::Solid);
        style.text_properties_mut().color = Some(RGBColor::new(255, 0, 0));

        let mut ns = NamespaceSet::new();
        let element = style.to_definition("T1", &mut ns);
        assert!(element.find_child(STYLE_PARAGRAPH_PROPERTIES).is_none());
        let props = element.find_child(STYLE_TEXT_PROPERTIES).unwrap();
        assert_eq!(props.get_attribute(ATTR_STYLE_UNDERLINE_STYLE), Some("solid"));
        assert_eq!(props.get_attribute(ATTR_FO_COLOR), Some("#ff0000"));
    }

    #[test]
    fn test_paragraph_margins_and_line_height() {
        let mut style = Style::paragraph();
        let props = style.paragraph_properties_mut();
        props.margin_top = Some(Length::from_mm(5.0));
        props.line_height_percent = Some(150);
        props.page_break_before = true;

        let mut ns = NamespaceSet::new();
        let element = style.to_definition("P2", &mut ns);
        let props = element.find_child(STYLE_PARAGRAPH_PROPERTIES).unwrap();
        assert_eq!(props.get_attribute(ATTR_FO_MARGIN_TOP), Some("5mm"));
        assert_eq!(props.get_attribute(ATTR_FO_LINE_HEIGHT), Some("150%"));
        assert_eq!(props.get_attribute(ATTR_FO_BREAK_BEFORE), Some("page"));
    }
}
