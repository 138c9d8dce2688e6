//! Integration tests for the public deck-generation API.
//!
//! These tests drive the full content -> render -> export pipeline the way
//! the CLI does.

use deckforge::{
    content, draw::Element, export::svg, pen, render, theme::Theme,
};

#[test]
fn test_full_pipeline_produces_fourteen_slide_svg() {
    let slides = content::pitch_deck();
    let deck = render::render_deck(&slides, Theme::default()).expect("deck renders");
    assert_eq!(deck.len(), 14);

    let document = svg::render_document(&deck).to_string();
    assert!(document.contains("<svg"));
    assert!(document.contains("</svg>"));
    assert!(document.contains("slide-14"));
}

#[test]
fn test_page_numbers_match_slide_positions() {
    let deck = render::render_deck(&content::pitch_deck(), Theme::default()).unwrap();

    for (index, canvas) in deck.slides().iter().enumerate() {
        let stamped = canvas
            .elements()
            .iter()
            .rev()
            .find_map(|element| match element {
                Element::Text(text) => Some(text.content()),
                _ => None,
            })
            .expect("every slide carries a page-number stamp");
        assert_eq!(stamped, format!("{:02}", index + 1));
    }
}

#[test]
fn test_accent_override_reaches_rendered_elements() {
    let magenta = deckforge::color::Color::new("#ff00ff").unwrap();
    let theme = Theme::default().with_accent(magenta.clone());

    let deck = render::render_deck(&content::pitch_deck(), theme).unwrap();

    let title_slide = &deck.slides()[0];
    let has_magenta_rect = title_slide.elements().iter().any(|element| {
        matches!(element, Element::Rect(rect) if rect.fill() == &magenta)
    });
    assert!(has_magenta_rect, "the title slide's accent rules pick up the override");
}

#[test]
fn test_export_to_disk_and_patch_are_independent() {
    // The generator and the patch utility never interact at runtime; a deck
    // export must not touch a design document sitting in the same
    // directory.
    let dir = tempfile::tempdir().unwrap();
    let deck_path = dir.path().join("deck.svg");
    let pen_path = dir.path().join("pitch-deck.pen");

    std::fs::write(&pen_path, r#"{"children": [], "name": "untouched"}"#).unwrap();

    let deck = render::render_deck(&content::pitch_deck(), Theme::default()).unwrap();
    svg::SvgExporter::new(&deck_path).export(&deck).unwrap();

    let document = pen::load(&pen_path).unwrap();
    assert!(document.children.is_empty());
    assert_eq!(document.extra["name"], serde_json::json!("untouched"));
}
