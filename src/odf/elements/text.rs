//! Text-related ODF elements.
//!
//! This module provides the nodes that make up the body of a text document:
//! paragraphs and headings holding inline content (text runs, hyperlinks,
//! images), and lists whose items hold paragraphs or nested lists.

use super::container::{Container, ElementList};
use super::draw::Image;
use super::element::{XmlElement, is_xml_char};
use super::emit::{Children, EmitContext, OdfElement};
use super::style::Style;
use crate::common::Result;
use crate::odf::constants::*;
use log::warn;
use std::path::PathBuf;

/// A contiguous run of plain text.
///
/// Line breaks, tabs and runs of spaces are written as their ODF elements
/// when the run is emitted; the payload itself stays plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    text: String,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the payload
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append to the payload
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn push_spaces(parent: &mut XmlElement, ctx: &mut EmitContext<'_>, count: usize) {
    let mut space = ctx.create_element(TEXT_S);
    if count > 1 {
        let mut buffer = itoa::Buffer::new();
        ctx.set_attribute(&mut space, ATTR_TEXT_C, buffer.format(count));
    }
    parent.push_element(space);
}

impl OdfElement for TextRun {
    fn materialize(&self, _ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        None
    }

    /// Write the payload as character data of `parent`.
    ///
    /// Characters XML cannot carry are skipped before spaces are counted.
    fn emit(&self, parent: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        let mut pending = String::new();
        let mut chars = self.text.chars().filter(|&c| is_xml_char(c)).peekable();
        let mut leading = true;

        while let Some(c) = chars.next() {
            match c {
                '\n' | '\t' => {
                    parent.push_text(&pending);
                    pending.clear();
                    let tag = if c == '\n' { TEXT_LINE_BREAK } else { TEXT_TAB };
                    let element = ctx.create_element(tag);
                    parent.push_element(element);
                },
                ' ' => {
                    let mut count = 1;
                    while chars.next_if_eq(&' ').is_some() {
                        count += 1;
                    }
                    if leading {
                        push_spaces(parent, ctx, count);
                    } else {
                        pending.push(' ');
                        if count > 1 {
                            parent.push_text(&pending);
                            pending.clear();
                            push_spaces(parent, ctx, count - 1);
                        }
                    }
                },
                _ => pending.push(c),
            }
            leading = false;
        }
        parent.push_text(&pending);
        Ok(())
    }
}

/// A hyperlink: `<text:a xlink:type="simple" xlink:href="...">`.
///
/// Never merged with neighbouring text runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    run: TextRun,
    uri: String,
    style: Option<Style>,
}

impl Hyperlink {
    pub fn new(text: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            run: TextRun::new(text),
            uri: uri.into(),
            style: None,
        }
    }

    pub fn text(&self) -> &str {
        self.run.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.run.set_text(text);
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uri = uri.into();
        self
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Set a text style, or `None` to remove it
    pub fn set_style(&mut self, style: Option<Style>) -> &mut Self {
        self.style = style;
        self
    }
}

impl OdfElement for Hyperlink {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        Some(ctx.create_element(TEXT_A))
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        ctx.set_attribute(element, ATTR_XLINK_TYPE, "simple");
        ctx.set_attribute(element, ATTR_XLINK_HREF, self.uri.as_str());
        Ok(())
    }

    fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn children(&self) -> Children<'_> {
        Box::new(std::iter::once(&self.run as &dyn OdfElement))
    }
}

/// Inline content of a paragraph or heading
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(TextRun),
    Hyperlink(Hyperlink),
    Image(Image),
}

impl Inline {
    /// Text this node contributes to its container's text; images contribute nothing
    pub fn text(&self) -> &str {
        match self {
            Self::Text(run) => run.text(),
            Self::Hyperlink(link) => link.text(),
            Self::Image(_) => "",
        }
    }

    fn inner(&self) -> &dyn OdfElement {
        match self {
            Self::Text(run) => run,
            Self::Hyperlink(link) => link,
            Self::Image(image) => image,
        }
    }
}

impl From<TextRun> for Inline {
    fn from(run: TextRun) -> Self {
        Self::Text(run)
    }
}

impl From<Hyperlink> for Inline {
    fn from(link: Hyperlink) -> Self {
        Self::Hyperlink(link)
    }
}

impl From<Image> for Inline {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

impl OdfElement for Inline {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        self.inner().materialize(ctx)
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().decorate(element, ctx)
    }

    fn style(&self) -> Option<&Style> {
        self.inner().style()
    }

    fn children(&self) -> Children<'_> {
        self.inner().children()
    }

    fn emit(&self, parent: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().emit(parent, ctx)
    }
}

/// A text paragraph element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    elements: ElementList<Inline>,
    style: Option<Style>,
}

impl Paragraph {
    /// Create a paragraph holding one text run with `text`, which may be empty
    pub fn new(text: &str) -> Self {
        let mut paragraph = Self::default();
        paragraph.add_text(text);
        paragraph
    }

    /// Append plain text, extending the trailing text run if there is one
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.append(Inline::Text(TextRun::new(text)));
        self
    }

    /// Concatenated text of every inline child, in order
    pub fn text(&self) -> String {
        self.elements.iter().map(Inline::text).collect()
    }

    /// Replace all content with a single text run
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.elements.clear();
        self.add_text(text)
    }

    /// Append a hyperlink
    pub fn add_hyperlink(&mut self, text: &str, uri: &str) -> &mut Hyperlink {
        match self.elements.append(Inline::Hyperlink(Hyperlink::new(text, uri))) {
            Inline::Hyperlink(link) => link,
            _ => unreachable!(),
        }
    }

    /// Append an image referencing the file at `path`
    pub fn add_image(&mut self, path: impl Into<PathBuf>) -> &mut Image {
        match self.elements.append(Inline::Image(Image::new(path))) {
            Inline::Image(image) => image,
            _ => unreachable!(),
        }
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Set the paragraph style, or `None` to remove it
    pub fn set_style(&mut self, style: Option<Style>) -> &mut Self {
        self.style = style;
        self
    }
}

impl Container for Paragraph {
    type Child = Inline;

    fn elements(&self) -> &ElementList<Inline> {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut ElementList<Inline> {
        &mut self.elements
    }

    /// Append `child`; plain text onto a trailing text run is merged into it.
    fn append(&mut self, child: Inline) -> &mut Inline {
        self.elements.append_or_merge(child, |last, child| match (last, child) {
            (Inline::Text(tail), Inline::Text(run)) => {
                tail.push_str(run.text());
                None
            },
            (_, child) => Some(child),
        })
    }
}

impl OdfElement for Paragraph {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        Some(ctx.create_element(TEXT_P))
    }

    fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn children(&self) -> Children<'_> {
        Box::new(self.elements.iter().map(|child| child as &dyn OdfElement))
    }
}

/// A heading: a paragraph with an outline level
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    content: Paragraph,
    level: u8,
}

impl Heading {
    /// Create a heading; levels below 1 are raised to 1
    pub fn new(text: &str, level: u8) -> Self {
        let mut heading = Self {
            content: Paragraph::new(text),
            level: 1,
        };
        heading.set_level(level);
        heading
    }

    /// Get the heading level
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the heading level; levels below 1 are raised to 1
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        if level < 1 {
            warn!("heading level {} out of range, using 1", level);
        }
        self.level = level.max(1);
        self
    }

    /// Inline content of the heading
    pub fn content(&self) -> &Paragraph {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Paragraph {
        &mut self.content
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.content.add_text(text);
        self
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.content.set_text(text);
        self
    }

    pub fn add_hyperlink(&mut self, text: &str, uri: &str) -> &mut Hyperlink {
        self.content.add_hyperlink(text, uri)
    }

    pub fn add_image(&mut self, path: impl Into<PathBuf>) -> &mut Image {
        self.content.add_image(path)
    }

    pub fn style(&self) -> Option<&Style> {
        self.content.style()
    }

    pub fn set_style(&mut self, style: Option<Style>) -> &mut Self {
        self.content.set_style(style);
        self
    }
}

impl Container for Heading {
    type Child = Inline;

    fn elements(&self) -> &ElementList<Inline> {
        self.content.elements()
    }

    fn elements_mut(&mut self) -> &mut ElementList<Inline> {
        self.content.elements_mut()
    }

    fn append(&mut self, child: Inline) -> &mut Inline {
        self.content.append(child)
    }
}

impl OdfElement for Heading {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        Some(ctx.create_element(TEXT_H))
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        ctx.set_attribute(element, ATTR_TEXT_OUTLINE_LEVEL, buffer.format(self.level));
        Ok(())
    }

    fn style(&self) -> Option<&Style> {
        self.content.style()
    }

    fn children(&self) -> Children<'_> {
        self.content.children()
    }
}

/// Content of a list item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemContent {
    Paragraph(Paragraph),
    List(List),
}

impl ItemContent {
    pub fn text(&self) -> String {
        match self {
            Self::Paragraph(paragraph) => paragraph.text(),
            Self::List(list) => list.text(),
        }
    }

    /// Whether this is a list with no items, which is never written
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(list) if list.elements.is_empty())
    }

    fn inner(&self) -> &dyn OdfElement {
        match self {
            Self::Paragraph(paragraph) => paragraph,
            Self::List(list) => list,
        }
    }
}

impl From<Paragraph> for ItemContent {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<List> for ItemContent {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl OdfElement for ItemContent {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        self.inner().materialize(ctx)
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().decorate(element, ctx)
    }

    fn style(&self) -> Option<&Style> {
        self.inner().style()
    }

    fn children(&self) -> Children<'_> {
        self.inner().children()
    }

    fn emit(&self, parent: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().emit(parent, ctx)
    }
}

/// A list item element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    elements: ElementList<ItemContent>,
}

impl ListItem {
    /// Create a list item holding one paragraph with `text`
    pub fn new(text: &str) -> Self {
        let mut item = Self::default();
        item.add_paragraph(text);
        item
    }

    /// Create a list item without content
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a paragraph with `text`
    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        match self.elements.append(ItemContent::Paragraph(Paragraph::new(text))) {
            ItemContent::Paragraph(paragraph) => paragraph,
            _ => unreachable!(),
        }
    }

    /// Append a nested list
    pub fn add_list(&mut self) -> &mut List {
        match self.elements.append(ItemContent::List(List::new())) {
            ItemContent::List(list) => list,
            _ => unreachable!(),
        }
    }

    /// Text of every child joined with newlines, skipping empty nested lists
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .filter(|content| !content.is_empty_list())
            .map(ItemContent::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<Paragraph> for ListItem {
    fn from(paragraph: Paragraph) -> Self {
        let mut item = Self::default();
        item.append(ItemContent::Paragraph(paragraph));
        item
    }
}

impl Container for ListItem {
    type Child = ItemContent;

    fn elements(&self) -> &ElementList<ItemContent> {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut ElementList<ItemContent> {
        &mut self.elements
    }
}

impl OdfElement for ListItem {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        Some(ctx.create_element(TEXT_LIST_ITEM))
    }

    fn children(&self) -> Children<'_> {
        Box::new(self.elements.iter().map(|child| child as &dyn OdfElement))
    }
}

/// A list element. A list without items is not emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    elements: ElementList<ListItem>,
}

impl List {
    /// Create a new list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add_item(&mut self, item: impl Into<ListItem>) -> &mut ListItem {
        self.elements.append(item.into())
    }

    /// Insert an item at `position`, clamped into range
    pub fn insert_item(&mut self, position: isize, item: impl Into<ListItem>) -> &mut ListItem {
        self.elements.insert_at(position, item.into())
    }

    /// Item at `position`, or `None` when out of range
    pub fn item(&self, position: isize) -> Option<&ListItem> {
        self.elements.get_at(position)
    }

    pub fn item_mut(&mut self, position: isize) -> Option<&mut ListItem> {
        self.elements.get_at_mut(position)
    }

    /// All list items
    pub fn items(&self) -> &[ListItem] {
        self.elements.get_all()
    }

    /// Remove the item at `position`, if any
    pub fn remove_item_at(&mut self, position: isize) -> Option<ListItem> {
        self.elements.remove_at(position)
    }

    /// Text of every item joined with newlines
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(ListItem::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Container for List {
    type Child = ListItem;

    fn elements(&self) -> &ElementList<ListItem> {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut ElementList<ListItem> {
        &mut self.elements
    }
}

impl OdfElement for List {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        if self.elements.is_empty() {
            return None;
        }
        Some(ctx.create_element(TEXT_LIST))
    }

    fn children(&self) -> Children<'_> {
        Box::new(self.elements.iter().map(|child| child as &dyn OdfElement))
    }
}

/// Top-level content of a text document body
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
}

impl Block {
    pub fn text(&self) -> String {
        match self {
            Self::Paragraph(paragraph) => paragraph.text(),
            Self::Heading(heading) => heading.text(),
            Self::List(list) => list.text(),
        }
    }

    /// Whether this is a list with no items, which is never written
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(list) if list.elements.is_empty())
    }

    fn inner(&self) -> &dyn OdfElement {
        match self {
            Self::Paragraph(paragraph) => paragraph,
            Self::Heading(heading) => heading,
            Self::List(list) => list,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl OdfElement for Block {
    fn materialize(&self, ctx: &mut EmitContext<'_>) -> Option<XmlElement> {
        self.inner().materialize(ctx)
    }

    fn decorate(&self, element: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().decorate(element, ctx)
    }

    fn style(&self) -> Option<&Style> {
        self.inner().style()
    }

    fn children(&self) -> Children<'_> {
        self.inner().children()
    }

    fn emit(&self, parent: &mut XmlElement, ctx: &mut EmitContext<'_>) -> Result<()> {
        self.inner().emit(parent, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::core::NoImageSource;
    use crate::odf::elements::style::StyleFamily;

    fn render(node: &dyn OdfElement) -> String {
        let images = NoImageSource;
        let mut ctx = EmitContext::new(&images);
        let mut parent = XmlElement::new(OFFICE_TEXT);
        node.emit(&mut parent, &mut ctx).unwrap();
        parent
            .child_elements()
            .map(|child| child.to_xml_string().unwrap())
            .collect()
    }

    fn render_run(text: &str) -> String {
        let images = NoImageSource;
        let mut ctx = EmitContext::new(&images);
        let mut parent = XmlElement::new(TEXT_P);
        TextRun::new(text).emit(&mut parent, &mut ctx).unwrap();
        parent.to_xml_string().unwrap()
    }

    #[test]
    fn test_add_text_merges_into_trailing_run() {
        let mut paragraph = Paragraph::new("Hello");
        paragraph.add_text(", ").add_text("world");
        assert_eq!(paragraph.size(), 1);
        assert_eq!(paragraph.text(), "Hello, world");
    }

    #[test]
    fn test_hyperlink_splits_runs() {
        let mut paragraph = Paragraph::new("a");
        paragraph.add_hyperlink("b", "http://x");
        paragraph.add_text("c");
        assert_eq!(paragraph.size(), 3);
        assert_eq!(paragraph.text(), "abc");
        assert!(matches!(paragraph.get_at(1), Some(Inline::Hyperlink(_))));
    }

    #[test]
    fn test_image_contributes_no_text() {
        let mut paragraph = Paragraph::new("a");
        paragraph.add_image("logo.png");
        paragraph.add_text("b");
        assert_eq!(paragraph.size(), 3);
        assert_eq!(paragraph.text(), "ab");
    }

    #[test]
    fn test_set_text_replaces_everything() {
        let mut paragraph = Paragraph::new("a");
        paragraph.add_hyperlink("b", "http://x");
        paragraph.set_text("fresh");
        assert_eq!(paragraph.size(), 1);
        assert_eq!(paragraph.text(), "fresh");

        paragraph.set_text("");
        assert_eq!(paragraph.size(), 1);
        assert_eq!(paragraph.text(), "");
    }

    #[test]
    fn test_empty_paragraph_starts_with_one_run() {
        let mut paragraph = Paragraph::new("");
        assert_eq!(paragraph.size(), 1);
        assert!(matches!(paragraph.get_at(0), Some(Inline::Text(run)) if run.is_empty()));

        paragraph.add_text("later");
        assert_eq!(paragraph.size(), 1);
        assert_eq!(paragraph.text(), "later");
        assert_eq!(Paragraph::new("").size(), Paragraph::new("x").set_text("").size());
    }

    #[test]
    fn test_inserted_run_is_not_merged_but_emits_one_text_node() {
        let mut paragraph = Paragraph::new("a");
        paragraph.insert_at(0, Inline::Text(TextRun::new("b")));
        assert_eq!(paragraph.size(), 2);
        assert_eq!(render(&paragraph), "<text:p>ba</text:p>");
    }

    #[test]
    fn test_plain_paragraph_markup() {
        assert_eq!(render(&Paragraph::new("text")), "<text:p>text</text:p>");
        assert_eq!(render(&Paragraph::new("")), "<text:p/>");
    }

    #[test]
    fn test_paragraph_with_hyperlink_markup() {
        let mut paragraph = Paragraph::new("see ");
        paragraph.add_hyperlink("here", "http://example.com/?a=1&b=2");
        assert_eq!(
            render(&paragraph),
            "<text:p>see <text:a xlink:type=\"simple\" \
             xlink:href=\"http://example.com/?a=1&amp;b=2\">here</text:a></text:p>"
        );
    }

    #[test]
    fn test_styled_paragraph_references_generated_name() {
        let mut paragraph = Paragraph::new("x");
        paragraph.set_style(Some(Style::paragraph()));
        assert_eq!(render(&paragraph), "<text:p text:style-name=\"P1\">x</text:p>");
    }

    #[test]
    fn test_default_styled_paragraph_has_no_style_name() {
        let mut paragraph = Paragraph::new("x");
        paragraph.set_style(Some(Style::default_for(StyleFamily::Paragraph)));
        assert_eq!(render(&paragraph), "<text:p>x</text:p>");
    }

    #[test]
    fn test_whitespace_encoding() {
        assert_eq!(render_run("a\nb"), "<text:p>a<text:line-break/>b</text:p>");
        assert_eq!(render_run("a\tb"), "<text:p>a<text:tab/>b</text:p>");
        assert_eq!(render_run("a b"), "<text:p>a b</text:p>");
        assert_eq!(render_run("a  b"), "<text:p>a <text:s/>b</text:p>");
        assert_eq!(render_run("a    b"), "<text:p>a <text:s text:c=\"3\"/>b</text:p>");
        assert_eq!(render_run(" a"), "<text:p><text:s/>a</text:p>");
        assert_eq!(render_run("   a"), "<text:p><text:s text:c=\"3\"/>a</text:p>");
        assert_eq!(render_run(""), "<text:p/>");
    }

    #[test]
    fn test_control_characters_are_not_written() {
        assert_eq!(render_run("a\u{1}b\u{b}c"), "<text:p>abc</text:p>");
        assert_eq!(render_run("a \u{1} b"), "<text:p>a <text:s/>b</text:p>");
        assert_eq!(render_run("\u{0}\u{1f}"), "<text:p/>");
    }

    #[test]
    fn test_heading_markup_and_level_clamp() {
        assert_eq!(
            render(&Heading::new("Title", 2)),
            "<text:h text:outline-level=\"2\">Title</text:h>"
        );
        let heading = Heading::new("Zero", 0);
        assert_eq!(heading.level(), 1);
    }

    #[test]
    fn test_heading_merges_text_like_paragraph() {
        let mut heading = Heading::new("a", 1);
        heading.add_text("b");
        heading.add_hyperlink("c", "http://c");
        assert_eq!(heading.size(), 2);
        assert_eq!(heading.text(), "abc");
    }

    #[test]
    fn test_empty_list_is_elided() {
        assert_eq!(render(&List::new()), "");
    }

    #[test]
    fn test_list_markup() {
        let mut list = List::new();
        list.add_item("first");
        assert_eq!(
            render(&list),
            "<text:list><text:list-item><text:p>first</text:p></text:list-item></text:list>"
        );
    }

    #[test]
    fn test_nested_list_markup_and_text() {
        let mut list = List::new();
        let item = list.add_item("outer");
        item.add_list().add_item("inner");
        list.add_item(String::from("second"));

        assert_eq!(list.text(), "outer\ninner\nsecond");
        assert_eq!(
            render(&list),
            "<text:list><text:list-item><text:p>outer</text:p><text:list><text:list-item>\
             <text:p>inner</text:p></text:list-item></text:list></text:list-item>\
             <text:list-item><text:p>second</text:p></text:list-item></text:list>"
        );
    }

    #[test]
    fn test_list_item_operations() {
        let mut list = List::new();
        list.add_item("b");
        list.insert_item(-5, "a");
        list.insert_item(10, "c");
        let texts: Vec<_> = list.items().iter().map(ListItem::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(list.item(3).is_none());
        assert_eq!(list.remove_item_at(1).map(|item| item.text()), Some("b".to_string()));
        assert!(list.remove_item_at(7).is_none());
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_list_with_empty_nested_list_elides_only_the_nested_list() {
        let mut list = List::new();
        list.add_item("x").add_list();
        assert_eq!(
            render(&list),
            "<text:list><text:list-item><text:p>x</text:p></text:list-item></text:list>"
        );
        assert_eq!(list.text(), "x");
    }
}
