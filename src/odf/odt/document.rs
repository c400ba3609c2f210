//! OpenDocument Text document root.

use crate::common::Result;
use crate::odf::constants::*;
use crate::odf::core::{
    ImageSource, MediaCatalog, MediaRef, PackageSink, SerializeOptions, default_image_source,
};
use crate::odf::elements::container::{Container, ElementList};
use crate::odf::elements::element::XmlElement;
use crate::odf::elements::emit::{EmitContext, NamespaceSet, OdfElement, reserve_style_names};
use crate::odf::elements::registry::StyleRegistry;
use crate::odf::elements::text::{Block, Heading, List, Paragraph};
use log::debug;
use std::fmt;

/// Result of serializing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedDocument {
    /// The XML text
    pub xml: String,
    /// Every referenced media file, in first-use order, without duplicates
    pub media: Vec<MediaRef>,
}

/// Everything one emission pass over the body produces
struct Emitted {
    body: XmlElement,
    namespaces: NamespaceSet,
    styles: StyleRegistry,
    media: MediaCatalog,
}

/// An OpenDocument text document under construction.
///
/// The document is the root of the element tree: its children are the body
/// blocks (paragraphs, headings, lists). Serialization walks the tree and
/// produces flat ODF XML, or hands the parts of a package to a [`PackageSink`].
///
/// # Examples
///
/// ```
/// use longan::odf::TextDocument;
///
/// # fn main() -> longan::Result<()> {
/// let mut doc = TextDocument::new();
/// doc.add_heading("Report", 1);
/// doc.add_paragraph("Hello, ").add_text("World!");
/// doc.add_list().add_item("first");
///
/// let xml = doc.to_xml_string()?;
/// assert!(xml.contains("<text:p>Hello, World!</text:p>"));
/// # Ok(())
/// # }
/// ```
pub struct TextDocument {
    elements: ElementList<Block>,
    options: SerializeOptions,
    images: Box<dyn ImageSource>,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextDocument")
            .field("elements", &self.elements)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl TextDocument {
    /// Create an empty document with default options
    pub fn new() -> Self {
        Self::with_options(SerializeOptions::default())
    }

    /// Create an empty document serialized with `options`
    pub fn with_options(options: SerializeOptions) -> Self {
        Self {
            elements: ElementList::new(),
            options,
            images: default_image_source(),
        }
    }

    /// Use `images` to describe the image files the document references
    pub fn with_image_source(mut self, images: Box<dyn ImageSource>) -> Self {
        self.images = images;
        self
    }

    pub fn set_image_source(&mut self, images: Box<dyn ImageSource>) {
        self.images = images;
    }

    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SerializeOptions) {
        self.options = options;
    }

    /// Add a paragraph with text
    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        match self.elements.append(Block::Paragraph(Paragraph::new(text))) {
            Block::Paragraph(paragraph) => paragraph,
            _ => unreachable!(),
        }
    }

    /// Add a heading
    ///
    /// # Arguments
    ///
    /// * `text` - Heading text
    /// * `level` - Outline level; values below 1 are raised to 1
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Heading {
        match self.elements.append(Block::Heading(Heading::new(text, level))) {
            Block::Heading(heading) => heading,
            _ => unreachable!(),
        }
    }

    /// Add an empty list
    pub fn add_list(&mut self) -> &mut List {
        match self.elements.append(Block::List(List::new())) {
            Block::List(list) => list,
            _ => unreachable!(),
        }
    }

    /// Text of every written block, one per line
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .filter(|block| !block.is_empty_list())
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize to flat ODF XML with the document's options
    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_string_with(&self.options)
    }

    /// Serialize to flat ODF XML with `options`
    pub fn to_xml_string_with(&self, options: &SerializeOptions) -> Result<String> {
        Ok(self.serialize_with(options)?.xml)
    }

    /// Serialize to flat ODF XML, returning the referenced media as well
    pub fn serialize(&self) -> Result<SerializedDocument> {
        self.serialize_with(&self.options)
    }

    /// Serialize to flat ODF XML with `options`, returning the referenced media as well
    pub fn serialize_with(&self, options: &SerializeOptions) -> Result<SerializedDocument> {
        let emitted = self.emit()?;

        let mut root = XmlElement::new(OFFICE_DOCUMENT);
        emitted.namespaces.declare_on(&mut root);
        root.set_attribute(ATTR_OFFICE_MIMETYPE, ODF_TEXT);
        root.set_attribute(ATTR_OFFICE_VERSION, options.office_version.as_str());

        let defaults = collect_styles(OFFICE_STYLES, emitted.styles.default_definitions());
        if !defaults.is_empty() {
            root.push_element(defaults);
        }
        let named = collect_styles(OFFICE_AUTOMATIC_STYLES, emitted.styles.named_definitions());
        if !named.is_empty() {
            root.push_element(named);
        }
        root.push_element(emitted.body);

        let xml = root.to_document_string(options.xml_declaration)?;
        debug!(
            "serialized text document: {} bytes, {} styles, {} media files",
            xml.len(),
            emitted.styles.len(),
            emitted.media.len()
        );
        Ok(SerializedDocument {
            xml,
            media: emitted.media.into_entries(),
        })
    }

    /// Hand the document to a package sink.
    ///
    /// Registers the MIME type, `content.xml` (body and named styles),
    /// `styles.xml` (default styles) and every referenced media file.
    pub fn write_to(&self, sink: &mut dyn PackageSink) -> Result<()> {
        let emitted = self.emit()?;
        let version = self.options.office_version.as_str();

        let mut content = XmlElement::new(OFFICE_DOCUMENT_CONTENT);
        emitted.namespaces.declare_on(&mut content);
        content.set_attribute(ATTR_OFFICE_VERSION, version);
        let named = collect_styles(OFFICE_AUTOMATIC_STYLES, emitted.styles.named_definitions());
        if !named.is_empty() {
            content.push_element(named);
        }
        content.push_element(emitted.body);

        let mut styles = XmlElement::new(OFFICE_DOCUMENT_STYLES);
        emitted.namespaces.declare_on(&mut styles);
        styles.set_attribute(ATTR_OFFICE_VERSION, version);
        styles.push_element(collect_styles(
            OFFICE_STYLES,
            emitted.styles.default_definitions(),
        ));

        sink.set_mimetype(ODF_TEXT)?;
        sink.add_xml(ODF_CONTENT, &content.to_document_string(self.options.xml_declaration)?)?;
        sink.add_xml(ODF_STYLES, &styles.to_document_string(self.options.xml_declaration)?)?;
        for media in emitted.media.entries() {
            sink.add_media(media)?;
        }
        debug!(
            "wrote text document package with {} media files",
            emitted.media.len()
        );
        Ok(())
    }

    /// Run one emission pass over the body
    fn emit(&self) -> Result<Emitted> {
        debug!("serializing text document with {} blocks", self.elements.size());
        let mut ctx = EmitContext::new(&*self.images);
        for block in &self.elements {
            reserve_style_names(block, ctx.styles_mut())?;
        }

        let mut text = ctx.create_element(OFFICE_TEXT);
        for block in &self.elements {
            block.emit(&mut text, &mut ctx)?;
        }
        let mut body = ctx.create_element(OFFICE_BODY);
        body.push_element(text);

        let (namespaces, styles, media) = ctx.finish();
        Ok(Emitted {
            body,
            namespaces,
            styles,
            media,
        })
    }
}

fn collect_styles<'a>(
    tag_name: &'static str,
    definitions: impl Iterator<Item = &'a XmlElement>,
) -> XmlElement {
    let mut section = XmlElement::new(tag_name);
    for definition in definitions {
        section.push_element(definition.clone());
    }
    section
}

impl Container for TextDocument {
    type Child = Block;

    fn elements(&self) -> &ElementList<Block> {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut ElementList<Block> {
        &mut self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::core::{MemoryPackage, OfficeVersion, PartContent};
    use crate::odf::elements::style::{Style, StyleFamily};

    fn body_of(xml: &str) -> &str {
        let start = xml.find("<office:text>").unwrap() + "<office:text>".len();
        let end = xml.find("</office:text>").unwrap();
        &xml[start..end]
    }

    #[test]
    fn test_empty_document() {
        let doc = TextDocument::new();
        let xml = doc.to_xml_string().unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <office:document xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
             office:mimetype=\"application/vnd.oasis.opendocument.text\" office:version=\"1.2\">\
             <office:body><office:text/></office:body></office:document>"
        );
    }

    #[test]
    fn test_options_control_declaration_and_version() {
        let options = SerializeOptions::new()
            .with_xml_declaration(false)
            .with_office_version(OfficeVersion::V1_3);
        let doc = TextDocument::with_options(options);
        let xml = doc.to_xml_string().unwrap();
        assert!(xml.starts_with("<office:document "));
        assert!(xml.contains("office:version=\"1.3\""));

        let xml = doc.to_xml_string_with(&SerializeOptions::default()).unwrap();
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn test_blocks_in_order() {
        let mut doc = TextDocument::new();
        doc.add_heading("Title", 1);
        doc.add_paragraph("body");
        doc.add_list().add_item("item");
        doc.add_list();

        let xml = doc.to_xml_string().unwrap();
        assert_eq!(
            body_of(&xml),
            "<text:h text:outline-level=\"1\">Title</text:h><text:p>body</text:p>\
             <text:list><text:list-item><text:p>item</text:p></text:list-item></text:list>"
        );
        assert!(xml.contains("xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\""));
        assert_eq!(doc.text(), "Title\nbody\nitem");
    }

    #[test]
    fn test_style_sections() {
        let mut doc = TextDocument::new();
        let mut named = Style::paragraph();
        named.text_properties_mut().bold = true;
        let mut default = Style::default_for(StyleFamily::Paragraph);
        default.text_properties_mut().font_size = Some(12.0);

        doc.add_paragraph("a").set_style(Some(named.clone()));
        doc.add_paragraph("b").set_style(Some(default));
        doc.add_paragraph("c").set_style(Some(named));

        let xml = doc.to_xml_string().unwrap();
        assert!(xml.contains(
            "<office:styles><style:default-style style:family=\"paragraph\">\
             <style:text-properties fo:font-size=\"12pt\"/></style:default-style></office:styles>"
        ));
        assert!(xml.contains(
            "<office:automatic-styles><style:style style:name=\"P1\" style:family=\"paragraph\">\
             <style:text-properties fo:font-weight=\"bold\"/></style:style></office:automatic-styles>"
        ));
        assert_eq!(
            body_of(&xml),
            "<text:p text:style-name=\"P1\">a</text:p><text:p>b</text:p>\
             <text:p text:style-name=\"P1\">c</text:p>"
        );
    }

    #[test]
    fn test_renamed_style_between_passes_is_fine() {
        let mut doc = TextDocument::new();
        doc.add_paragraph("a")
            .set_style(Some(Style::with_name_and_family("Body", StyleFamily::Paragraph)));
        assert!(doc.to_xml_string().unwrap().contains("style:name=\"Body\""));

        if let Some(Block::Paragraph(paragraph)) = doc.elements_mut().get_at_mut(0) {
            let mut style = paragraph.style().cloned().unwrap();
            style.set_name("Renamed");
            paragraph.set_style(Some(style));
        }
        assert!(doc.to_xml_string().unwrap().contains("style:name=\"Renamed\""));
    }

    #[test]
    fn test_write_to_package_sink() {
        let mut doc = TextDocument::new();
        let mut default = Style::default_for(StyleFamily::Text);
        default.text_properties_mut().font_name = Some("Liberation Serif".to_string());
        doc.add_paragraph("hello").set_style(Some(default));

        let mut package = MemoryPackage::new();
        doc.write_to(&mut package).unwrap();

        assert_eq!(package.mimetype(), Some(ODF_TEXT));
        let Some(PartContent::Xml(content)) = package.get_part(ODF_CONTENT).map(|p| &p.content)
        else {
            panic!("content.xml missing");
        };
        assert!(content.contains("<office:document-content "));
        assert!(!content.contains("office:mimetype"));
        assert!(content.contains("<text:p>hello</text:p>"));

        let Some(PartContent::Xml(styles)) = package.get_part(ODF_STYLES).map(|p| &p.content)
        else {
            panic!("styles.xml missing");
        };
        assert!(styles.contains("<style:default-style style:family=\"text\">"));
    }
}
