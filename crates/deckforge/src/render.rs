//! The generic rendering pass: declarative slide records in, composed deck
//! out.
//!
//! Each [`SlideBody`] variant has one rendering function that translates the
//! record into layout-builder calls. Layout constants (frames, gaps, font
//! sizes) live here; the copy lives in [`crate::content`].

use log::{debug, info};

use deckforge_core::{
    canvas::Deck,
    draw::{Alignment, TextStyle},
    geometry::{Point, Rect, inches},
};

use crate::{
    compose::{DeckComposer, SlideComposer},
    content::{
        CardGridSlide, CardGridStyle, CardSpec, ClosingSlide, ComparisonSlide, ForcesSlide,
        GoToMarketSlide, Header, LayersSlide, RoadmapSlide, Slide, SlideBody, TitleSlide,
        TokenTreesSlide, Tone, UseCasesSlide,
    },
    error::DeckError,
    theme::Theme,
    widget::card::Badge,
};

/// Left margin shared by most slide layouts, in inches.
const LEFT_MARGIN: f32 = 0.83;

/// Gap between grid cards, in inches.
const GRID_GAP: f32 = 0.2;

/// Renders the slide sequence into a deck.
pub fn render_deck(slides: &[Slide], theme: Theme) -> Result<Deck, DeckError> {
    info!(slides = slides.len(); "Rendering deck");

    let mut composer = DeckComposer::new(theme);
    for slide in slides {
        debug!(name = slide.name; "Rendering slide");
        composer.slide(|s| render_slide(s, slide))?;
    }
    Ok(composer.into_deck())
}

fn render_slide(s: &mut SlideComposer<'_>, slide: &Slide) -> Result<(), DeckError> {
    match &slide.body {
        SlideBody::Title(body) => render_title(s, body),
        SlideBody::CardGrid(body) => render_card_grid(s, body),
        SlideBody::Forces(body) => render_forces(s, body),
        SlideBody::TokenTrees(body) => render_token_trees(s, body),
        SlideBody::Layers(body) => render_layers(s, body),
        SlideBody::UseCases(body) => render_use_cases(s, body),
        SlideBody::Comparison(body) => render_comparison(s, body),
        SlideBody::GoToMarket(body) => render_go_to_market(s, body),
        SlideBody::Roadmap(body) => render_roadmap(s, body),
        SlideBody::Closing(body) => render_closing(s, body),
    }
}

/// Background, section label, title, and optional intro shared by the
/// content slides.
fn apply_header(s: &mut SlideComposer<'_>, header: &Header) -> Result<(), DeckError> {
    s.background(s.theme().bg());
    s.section_label(header.label)?;
    s.title(header.title, header.title_width)?;
    if let Some(intro) = &header.intro {
        s.description(intro.text, intro.width)?;
    }
    Ok(())
}

fn render_title(s: &mut SlideComposer<'_>, body: &TitleSlide) -> Result<(), DeckError> {
    s.background(s.theme().bg());

    let page_width = s.theme().page().width();
    s.accent_line(0.0, 0.0, page_width, None);

    s.text(
        Rect::from_inches(2.0, 2.2, 9.333, 0.9),
        body.brand,
        TextStyle::new()
            .with_size(48.0)
            .bold()
            .with_align(Alignment::Center),
    )?;
    s.text(
        Rect::from_inches(3.5, 3.1, 6.333, 0.6),
        body.tagline,
        TextStyle::new()
            .with_size(20.0)
            .with_color(s.theme().accent())
            .with_align(Alignment::Center),
    )?;
    s.accent_line(inches(6.0), inches(3.8), inches(1.333), Some(2.0));
    s.text(
        Rect::from_inches(3.0, 4.1, 7.333, 1.0),
        body.blurb,
        TextStyle::new()
            .with_size(14.0)
            .with_color(s.theme().gray_light())
            .with_align(Alignment::Center)
            .with_line_spacing(22.0),
    )?;
    Ok(())
}

struct GridGeometry {
    width: f32,
    height: f32,
    top: f32,
    columns: usize,
}

fn grid_geometry(style: CardGridStyle) -> GridGeometry {
    match style {
        CardGridStyle::Compact => GridGeometry {
            width: 2.35,
            height: 2.8,
            top: 3.0,
            columns: 5,
        },
        CardGridStyle::Brick => GridGeometry {
            width: 3.67,
            height: 2.5,
            top: 3.0,
            columns: 3,
        },
        CardGridStyle::Badged => GridGeometry {
            width: 3.67,
            height: 2.7,
            top: 3.0,
            columns: 3,
        },
        CardGridStyle::Centered => GridGeometry {
            width: 2.85,
            height: 3.0,
            top: 3.6,
            columns: 4,
        },
    }
}

fn render_card_grid(s: &mut SlideComposer<'_>, body: &CardGridSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let geo = grid_geometry(body.style);
    let full_row_width = geo.columns as f32 * geo.width + (geo.columns - 1) as f32 * GRID_GAP;

    for (row_index, row) in body.cards.chunks(geo.columns).enumerate() {
        // Short rows (the bottom of a brick layout) are centered.
        let row_width = row.len() as f32 * geo.width + (row.len() - 1) as f32 * GRID_GAP;
        let start_x = LEFT_MARGIN + (full_row_width - row_width) / 2.0;
        let top = geo.top + row_index as f32 * (geo.height + GRID_GAP);

        for (index, card) in row.iter().enumerate() {
            let frame = Rect::from_inches(
                start_x + index as f32 * (geo.width + GRID_GAP),
                top,
                geo.width,
                geo.height,
            );
            match body.style {
                CardGridStyle::Compact | CardGridStyle::Brick => {
                    s.card(frame, card.icon, card.title, card.body)?;
                }
                CardGridStyle::Badged => {
                    let badge = card.badge.as_ref().map(|b| Badge {
                        text: b.text,
                        accent: b.accent,
                    });
                    s.badged_card(frame, card.icon, card.title, card.body, badge)?;
                }
                CardGridStyle::Centered => render_centered_card(s, frame, card)?,
            }
        }
    }
    Ok(())
}

/// The vision-slide card variant: icon, title, and body all centered.
fn render_centered_card(
    s: &mut SlideComposer<'_>,
    frame: Rect,
    card: &CardSpec,
) -> Result<(), DeckError> {
    if card.outlined {
        s.outlined_rect(frame, s.theme().card(), None, s.theme().accent(), 1.0)?;
    } else {
        s.rounded_rect(frame, s.theme().card(), None)?;
    }

    s.text(
        Rect::new(
            frame.x(),
            frame.y() + inches(0.35),
            frame.width(),
            inches(0.5),
        ),
        card.icon,
        TextStyle::new()
            .with_size(30.0)
            .with_color(s.theme().accent())
            .with_align(Alignment::Center),
    )?;
    s.text(
        Rect::new(
            frame.x() + inches(0.2),
            frame.y() + inches(0.9),
            frame.width() - inches(0.4),
            inches(0.6),
        ),
        card.title,
        TextStyle::new()
            .with_size(14.0)
            .bold()
            .with_align(Alignment::Center)
            .with_line_spacing(20.0),
    )?;
    s.text(
        Rect::new(
            frame.x() + inches(0.2),
            frame.y() + inches(1.6),
            frame.width() - inches(0.4),
            inches(1.0),
        ),
        card.body,
        TextStyle::new()
            .with_size(11.0)
            .with_color(s.theme().gray_light())
            .with_align(Alignment::Center)
            .with_line_spacing(18.0),
    )?;
    Ok(())
}

fn render_forces(s: &mut SlideComposer<'_>, body: &ForcesSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let pill_width = 2.8;
    let pill_height = 1.6;
    let pill_top = 3.0;
    let pill_positions = [0.83, 5.27, 9.7];

    for (pill, x) in body.pills.iter().zip(pill_positions) {
        // The emphasized middle pill grows and gets an accent border.
        let (top, height) = if pill.emphasized {
            (pill_top - 0.15, pill_height + 0.3)
        } else {
            (pill_top, pill_height)
        };
        let frame = Rect::from_inches(x, top, pill_width, height);
        if pill.emphasized {
            s.outlined_rect(frame, s.theme().card(), None, s.theme().accent(), 2.0)?;
        } else {
            s.rounded_rect(frame, s.theme().card(), None)?;
        }
        s.text(
            Rect::from_inches(x + 0.3, top + 0.4, pill_width - 0.6, 0.8),
            pill.text,
            TextStyle::new()
                .with_size(if pill.emphasized { 16.0 } else { 14.0 })
                .bold()
                .with_align(Alignment::Center),
        )?;
    }

    for arrow_x in [3.63, 8.07] {
        s.text(
            Rect::from_inches(arrow_x, pill_top + 0.5, 1.64, 0.5),
            "\u{2192}",
            TextStyle::new()
                .with_size(24.0)
                .with_color(s.theme().accent())
                .bold()
                .with_align(Alignment::Center),
        )?;
    }

    let stat_width = 3.5;
    let stat_top = 5.2;
    for (index, stat) in body.stats.iter().enumerate() {
        let x = LEFT_MARGIN + index as f32 * (stat_width + 0.65);
        s.text(
            Rect::from_inches(x, stat_top, stat_width, 0.6),
            stat.value,
            TextStyle::new()
                .with_size(30.0)
                .with_color(s.theme().accent())
                .bold()
                .with_family(s.theme().mono_font()),
        )?;
        s.text(
            Rect::from_inches(x, stat_top + 0.6, stat_width, 0.6),
            stat.caption,
            TextStyle::new()
                .with_size(11.0)
                .with_color(s.theme().gray_light())
                .with_line_spacing(17.0),
        )?;
    }
    Ok(())
}

fn render_token_trees(s: &mut SlideComposer<'_>, body: &TokenTreesSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let tree_top = 3.0;
    for diagram in &body.diagrams {
        s.text(
            Rect::from_inches(diagram.caption_x, tree_top - 0.3, 3.0, 0.25),
            diagram.caption,
            TextStyle::new()
                .with_size(9.0)
                .with_color(s.theme().gray_dark())
                .bold()
                .with_family(s.theme().mono_font()),
        )?;
        s.tree(
            Point::new(inches(diagram.anchor_x), inches(tree_top)),
            &diagram.root,
            &diagram.style,
        );
    }
    Ok(())
}

fn render_layers(s: &mut SlideComposer<'_>, body: &LayersSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let x = 1.4;
    let width = 10.5;
    let height = 0.75;
    let start_top = 2.8;
    let gap = 0.12;

    for (index, layer) in body.layers.iter().enumerate() {
        let top = start_top + index as f32 * (height + gap);
        let frame = Rect::from_inches(x, top, width, height);
        if layer.outlined {
            s.outlined_rect(frame, s.theme().card(), None, s.theme().accent(), 1.0)?;
        } else {
            s.rounded_rect(frame, s.theme().card(), None)?;
        }

        let badge = 0.35;
        let badge_frame = Rect::from_inches(x + 0.3, top + (height - badge) / 2.0, badge, badge);
        s.rounded_rect(badge_frame, s.theme().accent(), None)?;
        s.text(
            badge_frame,
            layer.number,
            TextStyle::new()
                .with_size(14.0)
                .with_color(s.theme().ink())
                .bold()
                .with_family(s.theme().mono_font())
                .with_align(Alignment::Center),
        )?;

        s.text(
            Rect::from_inches(x + 0.8, top + 0.08, 3.0, 0.3),
            layer.title,
            TextStyle::new().with_size(14.0).bold(),
        )?;
        s.text(
            Rect::from_inches(x + 0.8, top + 0.38, 6.0, 0.35),
            layer.body,
            TextStyle::new()
                .with_size(11.0)
                .with_color(s.theme().gray_light()),
        )?;

        let tag_x = x + 8.5;
        for (tag_index, tag) in layer.tags.iter().enumerate() {
            let frame = Rect::from_inches(tag_x + tag_index as f32 * 1.1, top + 0.22, 1.0, 0.3);
            s.rounded_rect(frame, s.theme().darker(), None)?;
            s.text(
                frame,
                *tag,
                TextStyle::new()
                    .with_size(9.0)
                    .with_color(s.theme().accent())
                    .with_family(s.theme().mono_font())
                    .with_align(Alignment::Center),
            )?;
        }
    }
    Ok(())
}

fn render_use_cases(s: &mut SlideComposer<'_>, body: &UseCasesSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let width = 2.85;
    let top = 2.0;
    let header_height = 0.45;
    let body_height = 4.5;

    for (index, case) in body.cases.iter().enumerate() {
        let x = LEFT_MARGIN + index as f32 * (width + GRID_GAP);

        let (header_fill, header_color) = if case.primary {
            (s.theme().accent(), s.theme().ink())
        } else {
            (s.theme().darker(), s.theme().white())
        };
        s.rounded_rect(
            Rect::from_inches(x, top, width, header_height),
            header_fill,
            None,
        )?;
        s.text(
            Rect::from_inches(x + 0.2, top, width - 0.4, header_height),
            case.name,
            TextStyle::new()
                .with_size(13.0)
                .with_color(header_color)
                .bold(),
        )?;

        s.rounded_rect(
            Rect::from_inches(x, top + header_height, width, body_height),
            s.theme().card(),
            None,
        )?;
        s.text(
            Rect::from_inches(x + 0.2, top + header_height + 0.15, width - 0.4, 0.9),
            case.body,
            TextStyle::new()
                .with_size(11.0)
                .with_color(s.theme().gray_light())
                .with_line_spacing(17.0),
        )?;

        let outline_top = top + header_height + 1.1;
        s.rounded_rect(
            Rect::from_inches(x + 0.15, outline_top, width - 0.3, 1.8),
            s.theme().darker(),
            None,
        )?;
        for (line_index, line) in case.outline.iter().enumerate() {
            let color = match line.tone {
                Tone::Accent => s.theme().accent(),
                Tone::Light => s.theme().gray_light(),
                Tone::Medium => s.theme().gray_med(),
            };
            let mut style = TextStyle::new()
                .with_size(10.0)
                .with_color(color)
                .with_family(s.theme().mono_font());
            if line_index == 0 {
                style = style.bold();
            }
            s.text(
                Rect::from_inches(
                    x + 0.3,
                    outline_top + 0.15 + line_index as f32 * 0.35,
                    width - 0.6,
                    0.3,
                ),
                line.text,
                style,
            )?;
        }
    }
    Ok(())
}

fn render_comparison(s: &mut SlideComposer<'_>, body: &ComparisonSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let column_widths = vec![
        inches(2.8),
        inches(2.2),
        inches(2.2),
        inches(2.2),
        inches(2.2),
    ];
    let rows: Vec<(&str, Vec<crate::widget::CellValue>)> = body
        .rows
        .iter()
        .map(|row| (row.capability, row.cells.clone()))
        .collect();

    s.table(
        Point::new(inches(LEFT_MARGIN), inches(2.6)),
        column_widths,
        &body.columns,
        &rows,
    )
}

fn render_go_to_market(s: &mut SlideComposer<'_>, body: &GoToMarketSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let columns_top = 2.4;
    let mono_label = |s: &SlideComposer<'_>| {
        TextStyle::new()
            .with_size(9.0)
            .with_color(s.theme().accent())
            .bold()
            .with_family(s.theme().mono_font())
    };

    // Left column: beachhead verticals.
    let left_x = LEFT_MARGIN;
    let left_width = 5.8;
    s.text(
        Rect::from_inches(left_x, columns_top, 3.0, 0.25),
        "BEACHHEAD VERTICALS",
        mono_label(s),
    )?;

    let vertical_height = 0.8;
    let vertical_gap = 0.12;
    let vertical_top = columns_top + 0.4;
    for (index, vertical) in body.verticals.iter().enumerate() {
        let top = vertical_top + index as f32 * (vertical_height + vertical_gap);
        s.rounded_rect(
            Rect::from_inches(left_x, top, left_width, vertical_height),
            s.theme().card(),
            None,
        )?;
        s.text(
            Rect::from_inches(left_x + 0.2, top + 0.1, left_width - 0.4, 0.25),
            vertical.title,
            TextStyle::new().with_size(13.0).bold(),
        )?;
        s.text(
            Rect::from_inches(left_x + 0.2, top + 0.38, left_width - 0.4, 0.4),
            vertical.body,
            TextStyle::new()
                .with_size(10.0)
                .with_color(s.theme().gray_light())
                .with_line_spacing(15.0),
        )?;
    }

    // Right column: pricing tiers.
    let right_x = 7.0;
    let right_width = 5.8;
    s.text(
        Rect::from_inches(right_x, columns_top, 3.0, 0.25),
        "PRICING TIERS",
        mono_label(s),
    )?;

    let tier_height = 0.78;
    let tier_gap = 0.12;
    let tier_top = columns_top + 0.4;
    for (index, tier) in body.tiers.iter().enumerate() {
        let top = tier_top + index as f32 * (tier_height + tier_gap);
        let frame = Rect::from_inches(right_x, top, right_width, tier_height);
        if tier.highlighted {
            s.outlined_rect(frame, s.theme().card(), None, s.theme().accent(), 1.0)?;
        } else {
            s.rounded_rect(frame, s.theme().card(), None)?;
        }
        s.text(
            Rect::from_inches(right_x + 0.2, top + 0.1, 1.3, 0.25),
            tier.name,
            TextStyle::new().with_size(13.0).bold(),
        )?;
        s.text(
            Rect::from_inches(right_x + 0.2, top + 0.38, 1.3, 0.3),
            tier.price,
            TextStyle::new()
                .with_size(16.0)
                .with_color(s.theme().accent())
                .bold(),
        )?;
        s.text(
            Rect::from_inches(
                right_x + 1.6,
                top + 0.1,
                right_width - 2.0,
                tier_height - 0.2,
            ),
            tier.body,
            TextStyle::new()
                .with_size(10.0)
                .with_color(s.theme().gray_light())
                .with_line_spacing(15.0),
        )?;
    }

    // Defensibility moats below the tiers.
    let moat_top = tier_top + 3.0 * (tier_height + tier_gap) + 0.15;
    s.text(
        Rect::from_inches(right_x, moat_top, 3.0, 0.25),
        "DEFENSIBILITY MOATS",
        mono_label(s),
    )?;

    let moat_width = 1.8;
    let moat_height = 1.1;
    let moat_card_top = moat_top + 0.35;
    for (index, moat) in body.moats.iter().enumerate() {
        let x = right_x + index as f32 * (moat_width + 0.1);
        s.outlined_rect(
            Rect::from_inches(x, moat_card_top, moat_width, moat_height),
            s.theme().darker(),
            None,
            s.theme().accent(),
            0.5,
        )?;
        s.text(
            Rect::from_inches(x + 0.15, moat_card_top + 0.1, moat_width - 0.3, 0.25),
            moat.title,
            TextStyle::new().with_size(10.0).bold(),
        )?;
        s.text(
            Rect::from_inches(x + 0.15, moat_card_top + 0.45, moat_width - 0.3, 0.5),
            moat.body,
            TextStyle::new()
                .with_size(9.0)
                .with_color(s.theme().gray_med())
                .with_line_spacing(14.0),
        )?;
    }
    Ok(())
}

fn render_roadmap(s: &mut SlideComposer<'_>, body: &RoadmapSlide) -> Result<(), DeckError> {
    apply_header(s, &body.header)?;

    let width = 2.85;
    let top = 2.4;
    let head_height = 0.45;
    let body_height = 4.0;

    for (index, phase) in body.phases.iter().enumerate() {
        let x = LEFT_MARGIN + index as f32 * (width + GRID_GAP);

        // Only the first phase header is accent-filled; later active phases
        // keep accent text on the dark fill.
        let (head_fill, head_color) = if index == 0 {
            (s.theme().accent(), s.theme().ink())
        } else if phase.active {
            (s.theme().darker(), s.theme().accent())
        } else {
            (s.theme().darker(), s.theme().gray_med())
        };
        s.rounded_rect(
            Rect::from_inches(x, top, width, head_height),
            head_fill,
            None,
        )?;
        s.text(
            Rect::from_inches(x + 0.2, top, width - 0.4, head_height),
            phase.tag,
            TextStyle::new()
                .with_size(10.0)
                .with_color(head_color)
                .bold()
                .with_family(s.theme().mono_font()),
        )?;

        s.rounded_rect(
            Rect::from_inches(x, top + head_height, width, body_height),
            s.theme().card(),
            None,
        )?;
        s.text(
            Rect::from_inches(x + 0.2, top + head_height + 0.15, width - 0.4, 0.35),
            phase.title,
            TextStyle::new().with_size(16.0).bold(),
        )?;

        let (item_color, dash_color) = if phase.active {
            (s.theme().gray_light(), s.theme().accent())
        } else {
            (s.theme().gray_med(), s.theme().gray_dark())
        };
        for (item_index, item) in phase.items.iter().enumerate() {
            let item_top = top + head_height + 0.6 + item_index as f32 * 0.35;
            s.text(
                Rect::from_inches(x + 0.2, item_top, 0.3, 0.3),
                "\u{2500}",
                TextStyle::new()
                    .with_size(10.0)
                    .with_color(dash_color.clone())
                    .with_family(s.theme().mono_font()),
            )?;
            s.text(
                Rect::from_inches(x + 0.45, item_top, width - 0.65, 0.3),
                *item,
                TextStyle::new().with_size(11.0).with_color(item_color.clone()),
            )?;
        }
    }
    Ok(())
}

fn render_closing(s: &mut SlideComposer<'_>, body: &ClosingSlide) -> Result<(), DeckError> {
    s.background(s.theme().bg());

    let page_width = s.theme().page().width();
    s.accent_line(0.0, 0.0, page_width, None);

    s.text(
        Rect::from_inches(2.5, 2.5, 8.333, 1.0),
        body.quote,
        TextStyle::new()
            .with_size(40.0)
            .bold()
            .with_align(Alignment::Center),
    )?;
    s.accent_line(inches(6.0), inches(3.7), inches(1.333), Some(2.0));
    s.text(
        Rect::from_inches(2.5, 4.0, 8.333, 0.6),
        body.brand,
        TextStyle::new()
            .with_size(20.0)
            .with_color(s.theme().accent())
            .bold()
            .with_align(Alignment::Center),
    )?;

    let contact_style = |s: &SlideComposer<'_>| {
        TextStyle::new()
            .with_size(12.0)
            .with_color(s.theme().gray_med())
            .with_family(s.theme().mono_font())
            .with_align(Alignment::Center)
    };
    s.text(
        Rect::from_inches(2.5, 4.7, 8.333, 0.35),
        body.email,
        contact_style(s),
    )?;
    s.text(
        Rect::from_inches(2.5, 5.05, 8.333, 0.35),
        body.website,
        contact_style(s),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use deckforge_core::draw::Element;

    use super::*;
    use crate::content::pitch_deck;

    #[test]
    fn test_renders_all_fourteen_slides() {
        let deck = render_deck(&pitch_deck(), Theme::default()).unwrap();
        assert_eq!(deck.len(), 14);
    }

    #[test]
    fn test_every_slide_has_dark_background_and_stamp() {
        let theme = Theme::default();
        let deck = render_deck(&pitch_deck(), theme.clone()).unwrap();

        for (index, canvas) in deck.slides().iter().enumerate() {
            assert_eq!(canvas.background(), &theme.bg(), "slide {}", index + 1);
            match canvas.elements().last().unwrap() {
                Element::Text(text) => {
                    assert_eq!(text.content(), format!("{:02}", index + 1));
                }
                other => panic!("slide {} ends with {other:?}", index + 1),
            }
        }
    }

    #[test]
    fn test_title_slide_contains_brand() {
        let deck = render_deck(&pitch_deck(), Theme::default()).unwrap();

        let has_brand = deck.slides()[0].elements().iter().any(|element| {
            matches!(element, Element::Text(text) if text.content() == "BlockTrace")
        });
        assert!(has_brand);
    }

    #[test]
    fn test_comparison_slide_contains_table() {
        let deck = render_deck(&pitch_deck(), Theme::default()).unwrap();

        let table = deck.slides()[8]
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Table(table) => Some(table),
                _ => None,
            })
            .expect("slide 09 holds the comparison table");
        assert_eq!(table.header().len(), 5);
        assert_eq!(table.rows().len(), 5);
    }

    #[test]
    fn test_solution_slide_tree_line_counts() {
        let deck = render_deck(&pitch_deck(), Theme::default()).unwrap();

        // Both trees together: (4 + 2) + (3 + 2 + 2) = 13 connectors.
        let lines = deck.slides()[3]
            .elements()
            .iter()
            .filter(|element| matches!(element, Element::Line(_)))
            .count();
        assert_eq!(lines, 13);
    }
}
