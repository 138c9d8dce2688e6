//! Card widgets: a rounded-rect surface with icon, title, and body text
//! stacked top-to-bottom at fixed internal margins.
//!
//! Two variants exist: the plain [`card`] and the [`badged_card`], which
//! reserves space for a small badge pill above the icon (used by the
//! business-model slide to tag revenue streams).

use deckforge_core::{
    draw::{Alignment, Element, Rectangle, TextBox, TextStyle},
    geometry::{Rect, inches},
};

use crate::theme::Theme;

/// Horizontal and top padding inside a card.
const CARD_PAD: f32 = 0.25;

/// Font sizes for the card's title and body text.
#[derive(Debug, Clone, Copy)]
pub struct CardLayout {
    pub title_size: f32,
    pub body_size: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            title_size: 14.0,
            body_size: 11.0,
        }
    }
}

/// A badge pill rendered above a card's icon.
///
/// Accent badges render ink-on-accent; plain ones render accent-on-dark.
#[derive(Debug, Clone, Copy)]
pub struct Badge<'a> {
    pub text: &'a str,
    pub accent: bool,
}

/// Builds a card: rounded-rect background, then icon, title, and body text
/// boxes stacked top-to-bottom inside the frame.
pub fn card(
    frame: Rect,
    icon: &str,
    title: &str,
    body: &str,
    layout: CardLayout,
    theme: &Theme,
) -> Vec<Element> {
    let pad = inches(CARD_PAD);
    let mut elements = vec![Element::Rect(Rectangle::rounded(frame, theme.card(), None))];

    let mut cursor = frame.y() + pad;
    push_stack(
        &mut elements,
        frame,
        &mut cursor,
        icon,
        title,
        body,
        layout,
        theme,
    );
    elements
}

/// Builds a badged card. The badge, when present, sits above the icon and
/// pushes the rest of the stack down.
pub fn badged_card(
    frame: Rect,
    icon: &str,
    title: &str,
    body: &str,
    badge: Option<Badge<'_>>,
    layout: CardLayout,
    theme: &Theme,
) -> Vec<Element> {
    let pad = inches(CARD_PAD);
    let mut elements = vec![Element::Rect(Rectangle::rounded(frame, theme.card(), None))];

    let mut cursor = frame.y() + pad;
    if let Some(badge) = badge {
        let pill = Rect::new(frame.x() + pad, cursor, inches(1.2), inches(0.22));
        let (fill, text_color) = if badge.accent {
            (theme.accent(), theme.ink())
        } else {
            (theme.darker(), theme.accent())
        };
        elements.push(Element::Rect(Rectangle::rounded(pill, fill, None)));
        elements.push(Element::Text(TextBox::new(
            pill,
            badge.text,
            TextStyle::new()
                .with_size(8.0)
                .with_color(text_color)
                .bold()
                .with_family(theme.mono_font())
                .with_align(Alignment::Center),
        )));
        cursor += inches(0.35);
    }

    push_stack(
        &mut elements,
        frame,
        &mut cursor,
        icon,
        title,
        body,
        layout,
        theme,
    );
    elements
}

/// Appends the icon/title/body column shared by both card variants,
/// advancing `cursor` past each row. The title always lands strictly above
/// the body.
#[allow(clippy::too_many_arguments)]
fn push_stack(
    elements: &mut Vec<Element>,
    frame: Rect,
    cursor: &mut f32,
    icon: &str,
    title: &str,
    body: &str,
    layout: CardLayout,
    theme: &Theme,
) {
    let pad = inches(CARD_PAD);
    let inner_width = frame.width() - 2.0 * pad;

    elements.push(Element::Text(TextBox::new(
        Rect::new(frame.x() + pad, *cursor, inches(0.4), inches(0.35)),
        icon,
        icon_style(theme),
    )));
    *cursor += inches(0.35);

    elements.push(Element::Text(TextBox::new(
        Rect::new(frame.x() + pad, *cursor, inner_width, inches(0.35)),
        title,
        TextStyle::new()
            .with_size(layout.title_size)
            .with_color(theme.white())
            .bold(),
    )));
    *cursor += inches(0.35);

    let body_height = frame.bottom() - *cursor - pad;
    elements.push(Element::Text(TextBox::new(
        Rect::new(frame.x() + pad, *cursor, inner_width, body_height),
        body,
        TextStyle::new()
            .with_size(layout.body_size)
            .with_color(theme.gray_light())
            .with_line_spacing(18.0),
    )));
}

fn icon_style(theme: &Theme) -> TextStyle {
    TextStyle::new()
        .with_size(18.0)
        .with_color(theme.accent())
        .bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_frames(elements: &[Element]) -> Vec<Rect> {
        elements
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text.frame()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_card_stacks_title_above_body() {
        let theme = Theme::default();
        let frame = Rect::from_inches(1.0, 3.0, 2.35, 2.8);

        let elements = card(
            frame,
            "*",
            "Siloed Databases",
            "Data lives everywhere.",
            CardLayout::default(),
            &theme,
        );

        // icon, title, body in order
        let frames = text_frames(&elements);
        assert_eq!(frames.len(), 3);
        assert!(frames[0].y() < frames[1].y());
        assert!(frames[1].y() < frames[2].y());
    }

    #[test]
    fn test_card_background_is_first_element() {
        let theme = Theme::default();
        let frame = Rect::from_inches(0.0, 0.0, 3.0, 2.0);

        let elements = card(frame, "*", "t", "b", CardLayout::default(), &theme);

        assert!(matches!(elements[0], Element::Rect(_)));
    }

    #[test]
    fn test_badge_pushes_stack_down() {
        let theme = Theme::default();
        let frame = Rect::from_inches(0.0, 0.0, 3.67, 2.7);

        let plain = badged_card(frame, "*", "t", "b", None, CardLayout::default(), &theme);
        let badged = badged_card(
            frame,
            "*",
            "t",
            "b",
            Some(Badge {
                text: "RECURRING",
                accent: true,
            }),
            CardLayout::default(),
            &theme,
        );

        // With a badge, two more elements (pill + label) and a lower icon.
        assert_eq!(badged.len(), plain.len() + 2);
        let plain_icon = text_frames(&plain)[0];
        let badged_icon = text_frames(&badged)[1];
        assert!(badged_icon.y() > plain_icon.y());
    }

    #[test]
    fn test_elements_stay_inside_frame_horizontally() {
        let theme = Theme::default();
        let frame = Rect::from_inches(2.0, 1.0, 3.0, 2.5);

        for element in card(frame, "*", "t", "b", CardLayout::default(), &theme) {
            if let Element::Text(text) = element {
                assert!(text.frame().x() >= frame.x());
                assert!(text.frame().right() <= frame.right() + 0.01);
            }
        }
    }
}
