//! Builders for creating styles programmatically.

use super::style::{HorizontalAlignment, Style, StyleFamily, Underline};
use crate::common::{Length, RGBColor};

/// Builder for creating text styles.
///
/// # Examples
///
/// ```
/// use longan::odf::elements::StyleBuilder;
///
/// let style = StyleBuilder::new()
///     .name("Emphasis")
///     .font_size(14.0)
///     .bold()
///     .font_name("Arial")
///     .build();
/// assert_eq!(style.name(), Some("Emphasis"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    style: Style,
}

impl Default for StyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleBuilder {
    /// Create a builder for a new text style.
    pub fn new() -> Self {
        Self::for_family(StyleFamily::Text)
    }

    fn for_family(family: StyleFamily) -> Self {
        Self {
            style: Style::new(family),
        }
    }

    /// Give the style an explicit name instead of a generated one.
    pub fn name(mut self, name: &str) -> Self {
        self.style.set_name(name);
        self
    }

    /// Mark the style as the document default for its family.
    pub fn as_default(mut self) -> Self {
        self.style.set_default(true);
        self
    }

    /// Set the font size in points.
    pub fn font_size(mut self, points: f32) -> Self {
        self.style.text_properties_mut().font_size = Some(points);
        self
    }

    /// Set the font name (e.g., "Arial", "Times New Roman").
    pub fn font_name(mut self, name: &str) -> Self {
        self.style.text_properties_mut().font_name = Some(name.to_string());
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.text_properties_mut().bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.text_properties_mut().italic = true;
        self
    }

    /// Set the underline line style.
    pub fn underline(mut self, underline: Underline) -> Self {
        self.style.text_properties_mut().underline = Some(underline);
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.style.text_properties_mut().color = Some(color);
        self
    }

    /// Build the style.
    pub fn build(self) -> Style {
        self.style
    }
}

/// Builder for creating paragraph styles.
///
/// Text settings apply to the whole paragraph.
#[derive(Debug, Clone)]
pub struct ParagraphStyleBuilder {
    inner: StyleBuilder,
}

impl Default for ParagraphStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphStyleBuilder {
    /// Create a builder for a new paragraph style.
    pub fn new() -> Self {
        Self {
            inner: StyleBuilder::for_family(StyleFamily::Paragraph),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.inner = self.inner.name(name);
        self
    }

    pub fn as_default(mut self) -> Self {
        self.inner = self.inner.as_default();
        self
    }

    /// Set font size in points.
    pub fn font_size(mut self, points: f32) -> Self {
        self.inner = self.inner.font_size(points);
        self
    }

    pub fn font_name(mut self, name: &str) -> Self {
        self.inner = self.inner.font_name(name);
        self
    }

    pub fn bold(mut self) -> Self {
        self.inner = self.inner.bold();
        self
    }

    pub fn italic(mut self) -> Self {
        self.inner = self.inner.italic();
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.inner = self.inner.color(color);
        self
    }

    /// Set text alignment.
    pub fn text_align(mut self, alignment: HorizontalAlignment) -> Self {
        self.paragraph().alignment = Some(alignment);
        self
    }

    /// Start the paragraph on a new page.
    pub fn page_break_before(mut self) -> Self {
        self.paragraph().page_break_before = true;
        self
    }

    /// Keep all lines of the paragraph on one page.
    pub fn keep_together(mut self) -> Self {
        self.paragraph().keep_together = true;
        self
    }

    /// Set top margin.
    pub fn margin_top(mut self, margin: Length) -> Self {
        self.paragraph().margin_top = Some(margin);
        self
    }

    /// Set bottom margin.
    pub fn margin_bottom(mut self, margin: Length) -> Self {
        self.paragraph().margin_bottom = Some(margin);
        self
    }

    /// Set left margin.
    pub fn margin_left(mut self, margin: Length) -> Self {
        self.paragraph().margin_left = Some(margin);
        self
    }

    /// Set right margin.
    pub fn margin_right(mut self, margin: Length) -> Self {
        self.paragraph().margin_right = Some(margin);
        self
    }

    /// Set proportional line height, in percent.
    pub fn line_height(mut self, percent: u16) -> Self {
        self.paragraph().line_height_percent = Some(percent);
        self
    }

    fn paragraph(&mut self) -> &mut super::style::ParagraphProperties {
        self.inner.style.paragraph_properties_mut()
    }

    /// Build the paragraph style.
    pub fn build(self) -> Style {
        self.inner.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_builder() {
        let style = StyleBuilder::new()
            .font_size(12.0)
            .italic()
            .underline(Underline::Wave)
            .color(RGBColor::new(0, 0, 255))
            .build();

        assert_eq!(style.family(), StyleFamily::Text);
        assert_eq!(style.name(), None);
        let props = style.text_properties();
        assert_eq!(props.font_size, Some(12.0));
        assert!(props.italic);
        assert!(!props.bold);
        assert_eq!(props.underline, Some(Underline::Wave));
    }

    #[test]
    fn test_paragraph_style_builder() {
        let style = ParagraphStyleBuilder::new()
            .name("Body")
            .as_default()
            .text_align(HorizontalAlignment::Justify)
            .margin_bottom(Length::from_mm(2.0))
            .line_height(120)
            .bold()
            .build();

        assert_eq!(style.family(), StyleFamily::Paragraph);
        assert_eq!(style.name(), Some("Body"));
        assert!(style.is_default());
        let props = style.paragraph_properties();
        assert_eq!(props.alignment, Some(HorizontalAlignment::Justify));
        assert_eq!(props.line_height_percent, Some(120));
        assert!(style.text_properties().bold);
    }

    #[test]
    fn test_each_build_is_a_distinct_style() {
        let a = ParagraphStyleBuilder::new().bold().build();
        let b = ParagraphStyleBuilder::new().bold().build();
        assert!(!a.same_style(&b));
    }
}
