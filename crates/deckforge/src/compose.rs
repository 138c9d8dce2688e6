//! Slide composition: the layout builder that turns declarative content into
//! drawable elements on a canvas.
//!
//! [`DeckComposer`] owns the deck under construction. Each slide is drawn
//! inside a closure passed to [`DeckComposer::slide`]; when the closure
//! returns, the composer stamps the page number and appends the canvas, so a
//! slide's stamped ordinal always equals its 1-based position in the deck.
//!
//! [`SlideComposer`] exposes the drawing operations: a background fill,
//! text boxes, rounded rectangles, accent lines, the recurring header
//! helpers, and the card/tree/table widgets. Operations validate their frame
//! before appending and fail with [`DeckError::InvalidFrame`] on a
//! non-positive width or height.

use deckforge_core::{
    canvas::{Canvas, Deck},
    color::Color,
    draw::{Alignment, Element, Rectangle, Stroke, TextBox, TextStyle},
    geometry::{Point, Rect},
};

use crate::{
    error::DeckError,
    theme::Theme,
    widget::{
        self,
        card::{Badge, CardLayout},
        table::CellValue,
        tree::{TreeNode, TreeStyle},
    },
};

/// Default height of an accent line, in points.
const ACCENT_LINE_HEIGHT: f32 = 3.0;

/// Composes a deck slide by slide.
pub struct DeckComposer {
    deck: Deck,
    theme: Theme,
}

impl DeckComposer {
    /// Creates a composer for an empty deck using the theme's page size.
    pub fn new(theme: Theme) -> Self {
        Self {
            deck: Deck::new(theme.page()),
            theme,
        }
    }

    /// Returns the theme in use
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Composes one slide: creates the canvas, runs `draw`, stamps the page
    /// number, and appends the result to the deck.
    pub fn slide<F>(&mut self, draw: F) -> Result<(), DeckError>
    where
        F: FnOnce(&mut SlideComposer<'_>) -> Result<(), DeckError>,
    {
        let mut composer = SlideComposer {
            canvas: Canvas::new(self.deck.page()),
            theme: &self.theme,
        };
        draw(&mut composer)?;

        let ordinal = self.deck.len() + 1;
        composer.stamp_page_number(ordinal);
        self.deck.push_slide(composer.canvas);
        Ok(())
    }

    /// Finishes composition and returns the deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

/// Drawing operations for a single slide under construction.
pub struct SlideComposer<'a> {
    canvas: Canvas,
    theme: &'a Theme,
}

impl SlideComposer<'_> {
    /// Returns the theme in use
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Fills the entire canvas. Idempotent; the last call wins.
    pub fn background(&mut self, color: Color) {
        self.canvas.set_background(color);
    }

    /// Appends a text box.
    pub fn text(
        &mut self,
        frame: Rect,
        content: impl Into<String>,
        style: TextStyle,
    ) -> Result<(), DeckError> {
        if !frame.is_positive() {
            return Err(DeckError::invalid_frame("text", frame));
        }
        self.canvas
            .push(Element::Text(TextBox::new(frame, content, style)));
        Ok(())
    }

    /// Appends a rounded rectangle. The corner radius defaults to a fraction
    /// of the width and is clamped to half the shorter side.
    pub fn rounded_rect(
        &mut self,
        frame: Rect,
        fill: Color,
        radius: Option<f32>,
    ) -> Result<(), DeckError> {
        if !frame.is_positive() {
            return Err(DeckError::invalid_frame("rounded_rect", frame));
        }
        self.canvas
            .push(Element::Rect(Rectangle::rounded(frame, fill, radius)));
        Ok(())
    }

    /// Appends a rounded rectangle with a border stroke.
    pub fn outlined_rect(
        &mut self,
        frame: Rect,
        fill: Color,
        radius: Option<f32>,
        stroke_color: Color,
        stroke_width: f32,
    ) -> Result<(), DeckError> {
        if !frame.is_positive() {
            return Err(DeckError::invalid_frame("outlined_rect", frame));
        }
        self.canvas.push(Element::Rect(
            Rectangle::rounded(frame, fill, radius)
                .with_stroke(Stroke::new(stroke_color, stroke_width)),
        ));
        Ok(())
    }

    /// Appends an accent-colored divider: a thin filled rectangle. Height
    /// defaults to 3 pt.
    pub fn accent_line(&mut self, x: f32, y: f32, width: f32, height: Option<f32>) {
        let frame = Rect::new(x, y, width, height.unwrap_or(ACCENT_LINE_HEIGHT));
        self.canvas
            .push(Element::Rect(Rectangle::sharp(frame, self.theme.accent())));
    }

    /// Appends the small mono section label at the slide's top-left.
    pub fn section_label(&mut self, text: &str) -> Result<(), DeckError> {
        self.text(
            Rect::from_inches(0.83, 0.55, 4.0, 0.3),
            text,
            TextStyle::new()
                .with_size(10.0)
                .with_color(self.theme.accent())
                .bold()
                .with_family(self.theme.mono_font()),
        )
    }

    /// Appends the slide title below the section label. `width` is in inches.
    pub fn title(&mut self, text: &str, width: f32) -> Result<(), DeckError> {
        self.text(
            Rect::from_inches(0.83, 0.85, width, 0.8),
            text,
            TextStyle::new()
                .with_size(36.0)
                .with_color(self.theme.white())
                .bold(),
        )
    }

    /// Appends the introductory description below the title. `width` is in
    /// inches.
    pub fn description(&mut self, text: &str, width: f32) -> Result<(), DeckError> {
        self.text(
            Rect::from_inches(0.83, 1.55, width, 1.2),
            text,
            TextStyle::new()
                .with_size(14.0)
                .with_color(self.theme.gray_med())
                .with_line_spacing(22.0),
        )
    }

    /// Appends a card widget.
    pub fn card(
        &mut self,
        frame: Rect,
        icon: &str,
        title: &str,
        body: &str,
    ) -> Result<(), DeckError> {
        if !frame.is_positive() {
            return Err(DeckError::invalid_frame("card", frame));
        }
        self.canvas.extend(widget::card::card(
            frame,
            icon,
            title,
            body,
            CardLayout::default(),
            self.theme,
        ));
        Ok(())
    }

    /// Appends a badged card widget.
    pub fn badged_card(
        &mut self,
        frame: Rect,
        icon: &str,
        title: &str,
        body: &str,
        badge: Option<Badge<'_>>,
    ) -> Result<(), DeckError> {
        if !frame.is_positive() {
            return Err(DeckError::invalid_frame("badged_card", frame));
        }
        self.canvas.extend(widget::card::badged_card(
            frame,
            icon,
            title,
            body,
            badge,
            CardLayout {
                title_size: 16.0,
                body_size: 11.0,
            },
            self.theme,
        ));
        Ok(())
    }

    /// Appends a tree widget anchored at the top-center of its root box.
    pub fn tree(&mut self, anchor: Point, root: &TreeNode, style: &TreeStyle) {
        self.canvas
            .extend(widget::tree::tree(anchor, root, style, self.theme));
    }

    /// Appends a comparison table.
    pub fn table(
        &mut self,
        origin: Point,
        column_widths: Vec<f32>,
        header: &[&str],
        rows: &[(&str, Vec<CellValue>)],
    ) -> Result<(), DeckError> {
        if header.len() != column_widths.len() {
            return Err(DeckError::TableShape {
                columns: column_widths.len(),
                cells: header.len(),
            });
        }
        for (_, values) in rows {
            if values.len() + 1 != header.len() {
                return Err(DeckError::TableShape {
                    columns: header.len(),
                    cells: values.len() + 1,
                });
            }
        }
        self.canvas.push(Element::Table(widget::table::comparison_table(
            origin,
            column_widths,
            header,
            rows,
            self.theme,
        )));
        Ok(())
    }

    /// Stamps the page ordinal in the bottom-right corner, formatted `{:02}`.
    fn stamp_page_number(&mut self, ordinal: usize) {
        self.canvas.push(Element::Text(TextBox::new(
            Rect::from_inches(12.4, 6.95, 0.8, 0.4),
            format!("{ordinal:02}"),
            TextStyle::new()
                .with_size(10.0)
                .with_color(self.theme.gray_dark())
                .with_family(self.theme.mono_font())
                .with_align(Alignment::Right),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped_numbers(deck: &Deck) -> Vec<String> {
        deck.slides()
            .iter()
            .map(|canvas| {
                match canvas.elements().last().expect("slide has elements") {
                    Element::Text(text) => text.content().to_string(),
                    other => panic!("expected page-number stamp, got {other:?}"),
                }
            })
            .collect()
    }

    #[test]
    fn test_page_ordinal_matches_position() {
        let mut composer = DeckComposer::new(Theme::default());
        for _ in 0..3 {
            composer
                .slide(|s| {
                    s.background(s.theme().bg());
                    Ok(())
                })
                .unwrap();
        }

        let deck = composer.into_deck();
        assert_eq!(stamped_numbers(&deck), ["01", "02", "03"]);
    }

    #[test]
    fn test_failed_slide_is_not_appended() {
        let mut composer = DeckComposer::new(Theme::default());
        let result = composer.slide(|s| {
            s.text(
                Rect::new(0.0, 0.0, -10.0, 5.0),
                "bad",
                TextStyle::default(),
            )
        });

        assert!(matches!(
            result,
            Err(DeckError::InvalidFrame { context: "text", .. })
        ));
        assert!(composer.into_deck().is_empty());
    }

    #[test]
    fn test_rounded_rect_rejects_empty_frame() {
        let mut composer = DeckComposer::new(Theme::default());
        let result = composer.slide(|s| {
            s.rounded_rect(Rect::new(10.0, 10.0, 0.0, 0.0), s.theme().card(), None)
        });

        assert!(matches!(result, Err(DeckError::InvalidFrame { .. })));
    }

    #[test]
    fn test_table_shape_validation() {
        let mut composer = DeckComposer::new(Theme::default());
        let result = composer.slide(|s| {
            s.table(
                Point::new(0.0, 0.0),
                vec![100.0, 100.0],
                &["Capability", "X"],
                &[("row", vec![CellValue::Yes, CellValue::No])],
            )
        });

        assert!(matches!(result, Err(DeckError::TableShape { .. })));
    }

    #[test]
    fn test_background_last_call_wins_through_composer() {
        let mut composer = DeckComposer::new(Theme::default());
        composer
            .slide(|s| {
                s.background(s.theme().white());
                s.background(s.theme().bg());
                Ok(())
            })
            .unwrap();

        let deck = composer.into_deck();
        assert_eq!(deck.slides()[0].background(), &Theme::default().bg());
    }
}
