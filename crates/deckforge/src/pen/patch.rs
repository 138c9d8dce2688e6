//! The platform-slide insertion patch.
//!
//! Clones the slide at [`INSERT_INDEX`] as a template, rebinds its named
//! fields to the "The Platform" content, shifts every subsequent slide right
//! by [`SLIDE_SHIFT`], renumbers slide names and footer labels, and inserts
//! the new slide. The template shape is validated before any mutation.

use log::info;

use crate::pen::{Document, DocumentError, Node, SlideView};

/// Slide frame width on the design canvas.
pub const SLIDE_WIDTH: f64 = 1920.0;

/// Horizontal gap between slide frames on the design canvas.
pub const SLIDE_GAP: f64 = 100.0;

/// How far each subsequent slide moves to make room for the insertion.
pub const SLIDE_SHIFT: f64 = SLIDE_WIDTH + SLIDE_GAP;

/// Where the new slide lands: directly after "05 - How It Works".
pub const INSERT_INDEX: usize = 5;

/// Icon, title, and body for the four product cards on the new slide.
const PLATFORM_CARDS: [(&str, &str, &str); 4] = [
    (
        "network",
        "Asset Graph Explorer",
        "Visualise complex relationships and dependencies across your entire asset portfolio.",
    ),
    (
        "calendar-days",
        "Timeline View",
        "Track full lifecycle events and mutable history in a linear, auditable timeline.",
    ),
    (
        "git-merge",
        "Component Dependency Map",
        "Trace sub-assemblies and verify BOMs down to the raw material level.",
    ),
    (
        "bell",
        "Certification Alerts",
        "Proactive monitoring of certification expiry and compliance violations.",
    ),
];

const PLATFORM_DESCRIPTION: &str = "A modern SaaS dashboard built for data-heavy workflows. \
                                    Explore asset graphs, track lifecycles, and monitor \
                                    certifications in real time.";

/// Inserts the "06 - The Platform" slide into the document.
///
/// The slide currently at [`INSERT_INDEX`] serves as the template; it must
/// match the expected header + 2x2 card grid shape or the patch fails
/// before touching anything.
pub fn insert_platform_slide(document: &mut Document) -> Result<(), DocumentError> {
    let found = document.children.len();
    if found <= INSERT_INDEX {
        return Err(DocumentError::MissingSlide {
            index: INSERT_INDEX,
            found,
        });
    }

    let mut template = document.children[INSERT_INDEX].clone();
    SlideView::new(&mut template).validate_template()?;

    let previous = &document.children[INSERT_INDEX - 1];
    let previous_x = previous.x.ok_or_else(|| DocumentError::Shape {
        slide: slide_label(previous),
        reason: String::from("slide has no x coordinate"),
    })?;

    build_platform_slide(&mut template, previous_x + SLIDE_SHIFT)?;

    // Shift and renumber everything at or after the insertion point.
    for slide in document.children.iter_mut().skip(INSERT_INDEX) {
        let x = slide.x.ok_or_else(|| DocumentError::Shape {
            slide: slide_label(slide),
            reason: String::from("slide has no x coordinate"),
        })?;
        slide.x = Some(x + SLIDE_SHIFT);

        if let Some(name) = slide.name.as_deref() {
            if let Some(bumped) = bump_leading_number(name) {
                slide.name = Some(bumped);
            }
        }
        bump_footer(slide);
    }

    document.children.insert(INSERT_INDEX, template);
    info!(
        index = INSERT_INDEX,
        slides = document.children.len();
        "Platform slide inserted",
    );
    Ok(())
}

fn build_platform_slide(template: &mut Node, x: f64) -> Result<(), DocumentError> {
    let mut slide = SlideView::new(template);
    slide.set_id("new_platform_slide");
    slide.set_name("06 - The Platform");
    slide.set_x(x);

    let mut header = slide.header()?;
    header.set_label("THE PLATFORM")?;
    header.set_title("Enterprise Asset Intelligence")?;
    header.set_description(PLATFORM_DESCRIPTION)?;

    // Two cards per grid column, in reading order.
    for (index, (icon, title, body)) in PLATFORM_CARDS.iter().enumerate() {
        let mut card = slide.grid_card(index / 2, index % 2)?;
        card.set_name(&format!("prod_card_{}", index + 1));
        card.set_icon(icon)?;
        card.set_title(title)?;
        card.set_body(body)?;
    }

    slide.set_footer("06")
}

/// Increments the leading number of a `NN - Title` name. Names that do not
/// match the format are left alone.
fn bump_leading_number(name: &str) -> Option<String> {
    let (number, rest) = name.split_once(" - ")?;
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let parsed: u32 = number.parse().ok()?;
    Some(format!("{:02} - {rest}", parsed + 1))
}

/// Increments an all-digit footer label (the slide's last child, when it is
/// a text node). Anything else is left alone.
fn bump_footer(slide: &mut Node) {
    let Some(footer) = slide.children.last_mut() else {
        return;
    };
    if !footer.is_text() {
        return;
    }
    let Some(content) = footer.content.as_deref() else {
        return;
    };
    if content.is_empty() || !content.chars().all(|c| c.is_ascii_digit()) {
        return;
    }
    if let Ok(number) = content.parse::<u32>() {
        footer.content = Some(format!("{:02}", number + 1));
    }
}

fn slide_label(node: &Node) -> String {
    node.name
        .clone()
        .unwrap_or_else(|| String::from("<unnamed>"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, json};

    use super::*;

    fn text_node(content: &str) -> Node {
        Node {
            kind: Some(String::from("text")),
            content: Some(content.to_string()),
            ..Node::default()
        }
    }

    fn card_node(title: &str) -> Node {
        let icon = Node {
            kind: Some(String::from("icon")),
            icon_font_name: Some(String::from("box")),
            ..Node::default()
        };
        Node {
            name: Some(format!("card {title}")),
            children: vec![icon, text_node(title), text_node("body copy")],
            ..Node::default()
        }
    }

    fn column(cards: Vec<Node>) -> Node {
        Node {
            children: cards,
            ..Node::default()
        }
    }

    fn slide(number: usize) -> Node {
        let header = Node {
            children: vec![
                text_node("LABEL"),
                text_node("Title"),
                text_node("Description"),
            ],
            ..Node::default()
        };
        let grid = Node {
            children: vec![
                column(vec![card_node("b1"), card_node("b2")]),
                column(vec![card_node("b3"), card_node("b4")]),
            ],
            ..Node::default()
        };
        Node {
            id: Some(format!("slide_{number}")),
            name: Some(format!("{number:02} - Slide {number}")),
            kind: Some(String::from("frame")),
            x: Some((number - 1) as f64 * SLIDE_SHIFT),
            children: vec![header, grid, text_node(&format!("{number:02}"))],
            ..Node::default()
        }
    }

    fn sample_document(slides: usize) -> Document {
        let mut extra = Map::new();
        extra.insert(String::from("name"), json!("pitch-deck"));
        Document {
            children: (1..=slides).map(slide).collect(),
            extra,
        }
    }

    #[test]
    fn test_inserts_one_slide() {
        let mut document = sample_document(14);
        insert_platform_slide(&mut document).unwrap();
        assert_eq!(document.children.len(), 15);
    }

    #[test]
    fn test_slides_before_insertion_are_unchanged() {
        let mut document = sample_document(14);
        let before: Vec<Node> = document.children[..INSERT_INDEX].to_vec();

        insert_platform_slide(&mut document).unwrap();

        assert_eq!(&document.children[..INSERT_INDEX], &before[..]);
    }

    #[test]
    fn test_new_slide_content_and_position() {
        let mut document = sample_document(14);
        let previous_x = document.children[INSERT_INDEX - 1].x.unwrap();

        insert_platform_slide(&mut document).unwrap();

        let inserted = &document.children[INSERT_INDEX];
        assert_eq!(inserted.id.as_deref(), Some("new_platform_slide"));
        assert_eq!(inserted.name.as_deref(), Some("06 - The Platform"));
        assert_eq!(inserted.x, Some(previous_x + SLIDE_SHIFT));

        let header = &inserted.children[0];
        assert_eq!(header.children[0].content.as_deref(), Some("THE PLATFORM"));
        assert_eq!(
            header.children[1].content.as_deref(),
            Some("Enterprise Asset Intelligence")
        );

        // Four product cards, two per column, in reading order.
        let grid = &inserted.children[1];
        let cards = [
            &grid.children[0].children[0],
            &grid.children[0].children[1],
            &grid.children[1].children[0],
            &grid.children[1].children[1],
        ];
        for (card, (icon, title, body)) in cards.iter().zip(PLATFORM_CARDS) {
            assert_eq!(card.children[0].icon_font_name.as_deref(), Some(icon));
            assert_eq!(card.children[1].content.as_deref(), Some(title));
            assert_eq!(card.children[2].content.as_deref(), Some(body));
        }
        assert_eq!(
            cards[3].name.as_deref(),
            Some("prod_card_4"),
            "cards are renamed in reading order"
        );

        assert_eq!(
            inserted.children.last().unwrap().content.as_deref(),
            Some("06")
        );
    }

    #[test]
    fn test_subsequent_slides_shift_and_renumber() {
        let mut document = sample_document(14);
        let old_xs: Vec<f64> = document
            .children
            .iter()
            .map(|slide| slide.x.unwrap())
            .collect();

        insert_platform_slide(&mut document).unwrap();

        // Slide formerly at index 5 ("06 - Slide 6") is now at index 6.
        for (offset, old_index) in (INSERT_INDEX..14).enumerate() {
            let moved = &document.children[INSERT_INDEX + 1 + offset];
            let expected_number = old_index + 2;
            assert_eq!(
                moved.name.as_deref().unwrap(),
                format!("{expected_number:02} - Slide {}", old_index + 1)
            );
            assert_eq!(moved.x, Some(old_xs[old_index] + SLIDE_SHIFT));
            assert_eq!(
                moved.children.last().unwrap().content.as_deref().unwrap(),
                format!("{expected_number:02}")
            );
        }
    }

    #[test]
    fn test_footer_scenario_05_becomes_06_and_07() {
        // The template's own footer reads "06" after the rebind, and the
        // slide formerly named "06 - ..." is renamed "07 - ..." with footer
        // "07".
        let mut document = sample_document(7);
        insert_platform_slide(&mut document).unwrap();

        let inserted = &document.children[5];
        assert_eq!(
            inserted.children.last().unwrap().content.as_deref(),
            Some("06")
        );

        let displaced = &document.children[6];
        assert_eq!(displaced.name.as_deref(), Some("07 - Slide 6"));
        assert_eq!(
            displaced.children.last().unwrap().content.as_deref(),
            Some("07")
        );
    }

    #[test]
    fn test_non_matching_names_are_left_alone() {
        let mut document = sample_document(14);
        document.children[7].name = Some(String::from("Appendix"));

        insert_platform_slide(&mut document).unwrap();

        assert_eq!(document.children[8].name.as_deref(), Some("Appendix"));
    }

    #[test]
    fn test_fails_when_template_is_missing() {
        let mut document = sample_document(3);
        let err = insert_platform_slide(&mut document).unwrap_err();

        assert!(matches!(
            err,
            DocumentError::MissingSlide { index: 5, found: 3 }
        ));
        assert_eq!(document.children.len(), 3, "nothing was inserted");
    }

    #[test]
    fn test_fails_fast_on_wrong_grid_shape() {
        let mut document = sample_document(14);
        // Collapse the template's grid to one column.
        document.children[INSERT_INDEX].children[1].children.pop();

        let err = insert_platform_slide(&mut document).unwrap_err();
        assert!(matches!(err, DocumentError::Shape { .. }));
        assert_eq!(document.children.len(), 14, "nothing was inserted");
    }

    #[test]
    fn test_bump_leading_number() {
        assert_eq!(
            bump_leading_number("06 - Why Token Packs Matter").as_deref(),
            Some("07 - Why Token Packs Matter")
        );
        assert_eq!(
            bump_leading_number("09 - A - B").as_deref(),
            Some("10 - A - B")
        );
        assert_eq!(bump_leading_number("Appendix"), None);
        assert_eq!(bump_leading_number("x - y"), None);
        assert_eq!(bump_leading_number("+6 - y"), None);
    }

    #[test]
    fn test_document_round_trips_through_json_after_patch() {
        let mut document = sample_document(14);
        insert_platform_slide(&mut document).unwrap();

        let rendered = serde_json::to_string_pretty(&document).unwrap();
        let reparsed: Document = serde_json::from_str(&rendered).unwrap();
        assert_eq!(document, reparsed);
        assert_eq!(reparsed.extra["name"], json!("pitch-deck"));
    }
}
