//! Text element definitions.
//!
//! [`TextStyle`] carries the font attributes a text box is rendered with.
//! Unspecified options take documented defaults:
//!
//! | Property | Default |
//! |----------|---------|
//! | Font size | `18.0` pt |
//! | Color | white |
//! | Bold | `false` |
//! | Font family | `"Inter"` |
//! | Alignment | [`Alignment::Left`] |
//! | Line spacing | `None` (renderer picks 1.2 × font size) |

use crate::{color::Color, geometry::Rect};

/// Horizontal alignment of text within its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual style for a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_size: f32,
    color: Color,
    bold: bool,
    font_family: String,
    align: Alignment,
    line_spacing: Option<f32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            color: Color::new("white").expect("'white' is a valid CSS color"),
            bold: false,
            font_family: String::from("Inter"),
            align: Alignment::Left,
            line_spacing: None,
        }
    }
}

impl TextStyle {
    /// Creates a style with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points (builder style).
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the text color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Marks the text as bold (builder style).
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the font family name (builder style).
    pub fn with_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Sets the horizontal alignment (builder style).
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets the line spacing in points (builder style).
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Returns the font size in points
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the text color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns true if the text is bold
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns the font family name
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the horizontal alignment
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Returns the explicit line spacing, if any
    pub fn line_spacing(&self) -> Option<f32> {
        self.line_spacing
    }
}

/// A positioned block of styled text.
#[derive(Debug, Clone)]
pub struct TextBox {
    frame: Rect,
    content: String,
    style: TextStyle,
}

impl TextBox {
    /// Creates a text box filling the given frame.
    pub fn new(frame: Rect, content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            frame,
            content: content.into(),
            style,
        }
    }

    /// Returns the frame of the text box
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the text style
    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_style_values() {
        let style = TextStyle::default();

        assert_approx_eq!(f32, style.font_size(), 18.0);
        assert_eq!(style.color(), &Color::new("white").unwrap());
        assert!(!style.is_bold());
        assert_eq!(style.font_family(), "Inter");
        assert_eq!(style.align(), Alignment::Left);
        assert_eq!(style.line_spacing(), None);
    }

    #[test]
    fn test_builder_chain() {
        let style = TextStyle::new()
            .with_size(10.0)
            .with_family("JetBrains Mono")
            .with_align(Alignment::Right)
            .bold();

        assert_approx_eq!(f32, style.font_size(), 10.0);
        assert_eq!(style.font_family(), "JetBrains Mono");
        assert_eq!(style.align(), Alignment::Right);
        assert!(style.is_bold());
    }
}
