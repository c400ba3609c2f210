//! The XML emission protocol.
//!
//! Serialization walks the node tree depth-first. For every node the protocol
//! runs two phases:
//!
//! 1. **materialize**: the node creates its element. Creating an element (or
//!    setting an attribute) with a given prefix declares that namespace on the
//!    document root the first time it is seen.
//! 2. **decorate and recurse**: the style-name attribute and the node's own
//!    attributes are attached, then every child runs the same protocol with
//!    this element as its parent.
//!
//! A node that materializes nothing is elided together with its subtree.

use super::element::XmlElement;
use super::namespace::Namespace;
use super::registry::StyleRegistry;
use super::style::Style;
use crate::common::Result;
use crate::odf::constants::ATTR_TEXT_STYLE_NAME;
use crate::odf::core::{ImageSource, MediaCatalog, MediaRef};
use log::trace;
use smallvec::SmallVec;
use std::path::Path;

/// Children of a node, in emission order
pub type Children<'a> = Box<dyn Iterator<Item = &'a dyn OdfElement> + 'a>;

/// Capability every document node implements to take part in serialization.
pub trait OdfElement {
    /// Create the element representing this node, or `None` to elide it.
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement>;

    /// Attach this node's own attributes to its materialized element.
    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        let _ = (element, ctx);
        Ok(())
    }

    /// Style explicitly applied to this node
    fn style(&self) -> Option<&Style> {
        None
    }

    /// Children in stored order
    fn children(&self) -> Children<'_> {
        Box::new(std::iter::empty())
    }

    /// Run both emission phases for this node and its subtree under `parent`.
    fn emit(&self, parent: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        let Some(mut element) = self.materialize(ctx) else {
            return Ok(());
        };
        ctx.apply_style(self.style(), &mut element)?;
        self.decorate(&mut element, ctx)?;
        for child in self.children() {
            child.emit(&mut element, ctx)?;
        }
        parent.push_element(element);
        Ok(())
    }
}

/// Reserve every explicit style name used in a subtree before emission starts,
/// so generated names can never collide with a name met later in the walk.
pub fn reserve_style_names(node: &dyn OdfElement, styles: &mut StyleRegistry) -> Result<()> {
    if let Some(style) = node.style() {
        styles.reserve(style)?;
    }
    for child in node.children() {
        reserve_style_names(child, styles)?;
    }
    Ok(())
}

/// Namespaces declared so far, in first-use order.
#[derive(Debug, Clone, Default)]
pub struct NamespaceSet {
    declared: SmallVec<[Namespace; 8]>,
}

impl NamespaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `ns`; returns `false` when it was already declared
    pub fn declare(&mut self, ns: Namespace) -> bool {
        if self.declared.contains(&ns) {
            return false;
        }
        trace!("declaring namespace {}", ns);
        self.declared.push(ns);
        true
    }

    /// Declare the namespace of a qualified name, if it has a known prefix
    pub fn declare_for(&mut self, qualified_name: &str) {
        if let Some(ns) = Namespace::of_qualified(qualified_name) {
            self.declare(ns);
        }
    }

    pub fn contains(&self, ns: Namespace) -> bool {
        self.declared.contains(&ns)
    }

    pub fn iter(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.declared.iter().copied()
    }

    /// Create an element, declaring its namespace
    pub fn create_element(&mut self, tag_name: &'static str) -> XmlElement {
        self.declare_for(tag_name);
        XmlElement::new(tag_name)
    }

    /// Set an attribute, declaring its namespace
    pub fn set_attribute(
        &mut self,
        element: &mut XmlElement,
        name: &'static str,
        value: impl Into<String>,
    ) {
        self.declare_for(name);
        element.set_attribute(name, value);
    }

    /// Write the `xmlns:*` declarations onto `root`
    pub fn declare_on(&self, root: &mut XmlElement) {
        for ns in &self.declared {
            root.set_attribute(ns.declaration_name(), ns.uri());
        }
    }
}

/// A referenced image resolved for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub media: MediaRef,
    pub width_px: u32,
    pub height_px: u32,
}

/// State shared by every node during one serialization pass.
pub struct EmitContext<'a> {
    namespaces: NamespaceSet,
    styles: StyleRegistry,
    media: MediaCatalog,
    images: &'a dyn ImageSource,
}

impl<'a> EmitContext<'a> {
    pub fn new(images: &'a dyn ImageSource) -> Self {
        Self {
            namespaces: NamespaceSet::new(),
            styles: StyleRegistry::new(),
            media: MediaCatalog::new(),
            images,
        }
    }

    /// Create an element, declaring its namespace on first use
    pub fn create_element(&mut self, tag_name: &'static str) -> XmlElement {
        self.namespaces.create_element(tag_name)
    }

    /// Set an attribute, declaring its namespace on first use
    pub fn set_attribute(
        &mut self,
        element: &mut XmlElement,
        name: &'static str,
        value: impl Into<String>,
    ) {
        self.namespaces.set_attribute(element, name, value);
    }

    /// Register `style` and reference it from `element` unless it is the default.
    pub fn apply_style(&mut self, style: Option<&Style>, element: &mut XmlElement) -> Result<()> {
        let Some(style) = style else {
            return Ok(());
        };
        if let Some(name) = self.styles.register(style, &mut self.namespaces)? {
            self.namespaces
                .set_attribute(element, ATTR_TEXT_STYLE_NAME, name);
        }
        Ok(())
    }

    /// Describe the image at `path` and record it in the media catalog
    pub fn resolve_image(&mut self, path: &Path) -> Result<ResolvedImage> {
        let asset = self.images.describe(path)?;
        let media = self.media.register(path, &asset).clone();
        Ok(ResolvedImage {
            media,
            width_px: asset.width_px,
            height_px: asset.height_px,
        })
    }

    pub fn namespaces(&self) -> &NamespaceSet {
        &self.namespaces
    }

    pub fn namespaces_mut(&mut self) -> &mut NamespaceSet {
        &mut self.namespaces
    }

    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    pub fn media(&self) -> &MediaCatalog {
        &self.media
    }

    /// Split the context into its collected parts once the walk is done
    pub fn finish(self) -> (NamespaceSet, StyleRegistry, MediaCatalog) {
        (self.namespaces, self.styles, self.media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::core::NoImageSource;

    #[test]
    fn test_namespaces_declared_once_in_first_use_order() {
        let mut set = NamespaceSet::new();
        let mut p = set.create_element("text:p");
        set.create_element("text:list");
        set.set_attribute(&mut p, "xlink:href", "x");
        set.set_attribute(&mut p, "xlink:type", "simple");

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Namespace::Text, Namespace::Xlink]);

        let mut root = XmlElement::new("office:document");
        set.declare_on(&mut root);
        assert_eq!(root.attributes().count(), 2);
        assert_eq!(root.get_attribute("xmlns:text"), Some(Namespace::Text.uri()));
    }

    #[test]
    fn test_unprefixed_names_declare_nothing() {
        let mut set = NamespaceSet::new();
        set.create_element("root");
        assert_eq!(set.iter().count(), 0);
    }

    struct Leaf(&'static str);

    impl OdfElement for Leaf {
        fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
            Some(ctx.create_element(self.0))
        }
    }

    struct Elided;

    impl OdfElement for Elided {
        fn materialize(&self, _ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
            None
        }

        fn children(&self) -> Children<'_> {
            Box::new(std::iter::once(&LEAF as &dyn OdfElement))
        }
    }

    static LEAF: Leaf = Leaf("text:tab");

    #[test]
    fn test_emit_appends_under_parent() {
        let images = NoImageSource;
        let mut ctx = EmitContext::new(&images);
        let mut parent = XmlElement::new("office:text");
        Leaf("text:p").emit(&mut parent, &mut ctx).unwrap();
        assert_eq!(parent.to_xml_string().unwrap(), "<office:text><text:p/></office:text>");
        assert!(ctx.namespaces().contains(Namespace::Text));
    }

    #[test]
    fn test_elided_node_drops_its_subtree() {
        let images = NoImageSource;
        let mut ctx = EmitContext::new(&images);
        let mut parent = XmlElement::new("office:text");
        Elided.emit(&mut parent, &mut ctx).unwrap();
        assert!(parent.is_empty());
        assert!(!ctx.namespaces().contains(Namespace::Text));
    }
}
