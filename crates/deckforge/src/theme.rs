//! The deck's visual theme: palette, font families, page dimensions.
//!
//! Every drawing operation and widget resolves its colors through a [`Theme`]
//! instead of carrying literals, so the palette lives in one place and the
//! accent can be overridden from configuration.

use deckforge_core::{
    color::Color,
    geometry::{Size, inches},
};

/// Palette, fonts, and page geometry for one deck.
#[derive(Debug, Clone)]
pub struct Theme {
    page: Size,
    bg: Color,
    card: Color,
    darker: Color,
    accent: Color,
    white: Color,
    gray_light: Color,
    gray_med: Color,
    gray_dark: Color,
    ink: Color,
    body_font: String,
    mono_font: String,
}

fn palette(hex: &str) -> Color {
    Color::new(hex).expect("theme palette entries are valid CSS colors")
}

impl Default for Theme {
    /// The BlockTrace palette on a 16:9 page (13.333 in x 7.5 in).
    fn default() -> Self {
        Self {
            page: Size::new(inches(13.333), inches(7.5)),
            bg: palette("#0A0F1C"),
            card: palette("#1E293B"),
            darker: palette("#0F172A"),
            accent: palette("#22D3EE"),
            white: palette("#FFFFFF"),
            gray_light: palette("#B4BFCC"),
            gray_med: palette("#94A3B8"),
            gray_dark: palette("#728197"),
            ink: palette("#0A0F1C"),
            body_font: String::from("Inter"),
            mono_font: String::from("JetBrains Mono"),
        }
    }
}

impl Theme {
    /// Creates the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the accent color (builder style).
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Returns the page dimensions in points
    pub fn page(&self) -> Size {
        self.page
    }

    /// Returns the slide background color
    pub fn bg(&self) -> Color {
        self.bg.clone()
    }

    /// Returns the card surface color
    pub fn card(&self) -> Color {
        self.card.clone()
    }

    /// Returns the darker inset-panel color
    pub fn darker(&self) -> Color {
        self.darker.clone()
    }

    /// Returns the accent color
    pub fn accent(&self) -> Color {
        self.accent.clone()
    }

    /// Returns plain white
    pub fn white(&self) -> Color {
        self.white.clone()
    }

    /// Returns the light gray used for body copy
    pub fn gray_light(&self) -> Color {
        self.gray_light.clone()
    }

    /// Returns the medium gray used for secondary copy
    pub fn gray_med(&self) -> Color {
        self.gray_med.clone()
    }

    /// Returns the dark gray used for de-emphasized copy
    pub fn gray_dark(&self) -> Color {
        self.gray_dark.clone()
    }

    /// Returns the near-black used for text on accent fills
    pub fn ink(&self) -> Color {
        self.ink.clone()
    }

    /// Returns the body font family name
    pub fn body_font(&self) -> &str {
        &self.body_font
    }

    /// Returns the monospace font family name
    pub fn mono_font(&self) -> &str {
        &self.mono_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_sixteen_by_nine() {
        let theme = Theme::default();
        assert!((theme.page().width() - 959.976).abs() < 0.01);
        assert!((theme.page().height() - 540.0).abs() < 0.01);
    }

    #[test]
    fn test_accent_override() {
        let magenta = Color::new("#ff00ff").unwrap();
        let theme = Theme::default().with_accent(magenta.clone());
        assert_eq!(theme.accent(), magenta);
    }
}
