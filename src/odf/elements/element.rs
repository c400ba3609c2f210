//! Materialized XML elements.
//!
//! Document nodes do not write markup directly. During emission each node
//! materializes an [`XmlElement`] under its parent's element, and the finished
//! tree is written out in one pass with `quick-xml`.

use crate::common::Result;
use log::warn;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::io::Write;

/// Whether `c` may appear in XML 1.0 character data or attribute values
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Strip characters XML 1.0 cannot represent, even as references
fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    warn!(
        "dropped {} character(s) not allowed in XML",
        text.chars().count() - cleaned.chars().count()
    );
    Cow::Owned(cleaned)
}

/// A child of a materialized element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// A materialized element: qualified tag name, ordered attributes, children.
///
/// Attributes keep insertion order so the output is deterministic. Setting an
/// attribute that already exists replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag_name: &'static str,
    attributes: SmallVec<[(&'static str, String); 4]>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create a new empty element
    pub fn new(tag_name: &'static str) -> Self {
        Self {
            tag_name,
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Get the qualified tag name
    pub fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    /// Set an attribute value, dropping characters XML cannot carry
    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        let mut value = value.into();
        if !value.chars().all(is_xml_char) {
            value = sanitize(&value).into_owned();
        }
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if element has attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attributes.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Append a child element
    pub fn push_element(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Append character data, joining it onto a trailing text node.
    ///
    /// Control characters other than tab, line feed and carriage return are
    /// dropped.
    pub fn push_text(&mut self, text: &str) {
        let text = sanitize(text);
        let text: &str = &text;
        if text.is_empty() {
            return;
        }
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }

    /// Get the children
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements, skipping character data
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given tag name
    pub fn find_child(&self, tag_name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.tag_name == tag_name)
    }

    /// Whether the element has neither children nor character data
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize the element, without an XML declaration
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::with_capacity(256));
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Serialize the element as a standalone document
    pub fn to_document_string(&self, declaration: bool) -> Result<String> {
        let mut writer = Writer::new(Vec::with_capacity(1024));
        if declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Write the element and its subtree as XML events
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.tag_name);
        for (key, value) in &self.attributes {
            start.push_attribute((*key, value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_to(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.tag_name)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let element = XmlElement::new("text:p");
        assert_eq!(element.to_xml_string().unwrap(), "<text:p/>");
    }

    #[test]
    fn test_attributes_keep_order_and_replace_in_place() {
        let mut element = XmlElement::new("text:a");
        element.set_attribute("xlink:type", "simple");
        element.set_attribute("xlink:href", "http://a");
        element.set_attribute("xlink:type", "extended");
        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("xlink:type", "extended"), ("xlink:href", "http://a")]);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut element = XmlElement::new("text:p");
        element.set_attribute("text:style-name", "a\"b");
        element.push_text("x < y & z");
        assert_eq!(
            element.to_xml_string().unwrap(),
            "<text:p text:style-name=\"a&quot;b\">x &lt; y &amp; z</text:p>"
        );
    }

    #[test]
    fn test_push_text_merges_adjacent_character_data() {
        let mut element = XmlElement::new("text:p");
        element.push_text("a");
        element.push_text("");
        element.push_text("b");
        assert_eq!(element.children().len(), 1);
        element.push_element(XmlElement::new("text:tab"));
        element.push_text("c");
        assert_eq!(element.children().len(), 3);
        assert_eq!(element.children()[0], XmlNode::Text("ab".to_string()));
    }

    #[test]
    fn test_forbidden_characters_are_dropped() {
        let mut element = XmlElement::new("text:a");
        element.set_attribute("xlink:href", "http://a\u{0}/b\u{1b}");
        element.push_text("a\u{1}b\u{b}c\u{FFFE}");
        element.push_text("\u{7}");
        assert_eq!(element.get_attribute("xlink:href"), Some("http://a/b"));
        assert_eq!(element.children(), &[XmlNode::Text("abc".to_string())]);
        assert_eq!(
            element.to_xml_string().unwrap(),
            "<text:a xlink:href=\"http://a/b\">abc</text:a>"
        );
    }

    #[test]
    fn test_tab_and_newlines_are_kept() {
        let mut element = XmlElement::new("text:p");
        element.push_text("a\tb\r\nc");
        assert_eq!(element.children(), &[XmlNode::Text("a\tb\r\nc".to_string())]);
    }

    #[test]
    fn test_document_string_has_declaration() {
        let element = XmlElement::new("office:document");
        let xml = element.to_document_string(true).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.ends_with("<office:document/>"));
    }

    #[test]
    fn test_find_child() {
        let mut parent = XmlElement::new("office:body");
        parent.push_element(XmlElement::new("office:text"));
        assert!(parent.find_child("office:text").is_some());
        assert!(parent.find_child("office:spreadsheet").is_none());
    }
}
