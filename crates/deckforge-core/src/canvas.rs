//! Slide surfaces and the deck that collects them.

use log::debug;

use crate::{color::Color, draw::Element, geometry::Size};

/// One slide's surface: a page-sized canvas holding an ordered, append-only
/// sequence of drawable elements over a background fill.
///
/// The background is a property of the canvas rather than an element; setting
/// it again overwrites the previous value (last call wins).
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    background: Color,
    elements: Vec<Element>,
}

impl Canvas {
    /// Creates an empty canvas of the given page size with a black background.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: Color::default(),
            elements: Vec::new(),
        }
    }

    /// Fills the entire canvas with the given color. Idempotent; the last
    /// call wins.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Appends a drawable element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Appends a sequence of drawable elements in order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Returns the page size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the background fill
    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Returns the drawable elements in paint order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// The complete ordered sequence of slides produced by one run, plus the
/// global page dimensions.
///
/// Created empty, slides appended in sequence, serialized once at the end of
/// the run.
#[derive(Debug, Clone)]
pub struct Deck {
    page: Size,
    slides: Vec<Canvas>,
}

impl Deck {
    /// Creates an empty deck with the given page dimensions.
    pub fn new(page: Size) -> Self {
        Self {
            page,
            slides: Vec::new(),
        }
    }

    /// Appends a finished slide to the deck.
    pub fn push_slide(&mut self, canvas: Canvas) {
        self.slides.push(canvas);
        debug!(slides = self.slides.len(); "Slide appended to deck");
    }

    /// Returns the page dimensions
    pub fn page(&self) -> Size {
        self.page
    }

    /// Returns the slides in deck order
    pub fn slides(&self) -> &[Canvas] {
        &self.slides
    }

    /// Returns the number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns true if the deck holds no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::{TextBox, TextStyle},
        geometry::Rect,
    };

    fn page() -> Size {
        Size::new(960.0, 540.0)
    }

    #[test]
    fn test_background_last_call_wins() {
        let mut canvas = Canvas::new(page());

        canvas.set_background(Color::new("#ffffff").unwrap());
        canvas.set_background(Color::new("#0a0f1c").unwrap());

        assert_eq!(canvas.background(), &Color::new("#0a0f1c").unwrap());
    }

    #[test]
    fn test_elements_keep_append_order() {
        let mut canvas = Canvas::new(page());
        for label in ["first", "second", "third"] {
            canvas.push(Element::Text(TextBox::new(
                Rect::new(0.0, 0.0, 10.0, 10.0),
                label,
                TextStyle::default(),
            )));
        }

        let contents: Vec<&str> = canvas
            .elements()
            .iter()
            .map(|element| match element {
                Element::Text(text) => text.content(),
                _ => panic!("expected text elements"),
            })
            .collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn test_deck_appends_in_sequence() {
        let mut deck = Deck::new(page());
        assert!(deck.is_empty());

        deck.push_slide(Canvas::new(page()));
        deck.push_slide(Canvas::new(page()));

        assert_eq!(deck.len(), 2);
    }
}
