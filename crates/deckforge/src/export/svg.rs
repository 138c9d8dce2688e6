//! SVG exporter: serializes a deck to a single SVG document.
//!
//! Slides are stacked vertically with a fixed gap, each inside a `<g>`
//! element carrying its page number as an id. Text wrapping uses a greedy
//! average-glyph-width estimate; slide copy is fixed, so the estimate is
//! tuned to the deck's fonts rather than measured through font shaping.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::Text as SvgText, node::element as svg_element};

use deckforge_core::{
    canvas::{Canvas, Deck},
    draw::{Alignment, Element, Line, Rectangle, Table, TableCell, TextBox, TextStyle},
};

use crate::error::DeckError;

/// Vertical gap between slides in the output document, in points.
const SLIDE_GAP: f32 = 40.0;

/// Corner radius for table strips, matching the rounded cards.
const STRIP_CORNER: f32 = 10.8;

/// Horizontal text inset inside table cells, in points (0.15 in).
const CELL_INSET: f32 = 10.8;

/// Writes decks to an SVG file.
pub struct SvgExporter {
    path: PathBuf,
}

impl SvgExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the deck and writes it to the exporter's path.
    pub fn export(&self, deck: &Deck) -> Result<(), DeckError> {
        let document = render_document(deck);
        debug!("SVG document rendered");

        info!(path:? = self.path; "Creating SVG file");
        let mut file = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = self.path, err:err; "Failed to create SVG file");
                return Err(DeckError::Io(err));
            }
        };

        if let Err(err) = write!(file, "{document}") {
            error!(path:? = self.path, err:err; "Failed to write SVG content");
            return Err(DeckError::Io(err));
        }

        Ok(())
    }
}

/// Renders the deck to an in-memory SVG document.
pub fn render_document(deck: &Deck) -> Document {
    let page = deck.page();
    let total_height = if deck.is_empty() {
        page.height()
    } else {
        deck.len() as f32 * (page.height() + SLIDE_GAP) - SLIDE_GAP
    };

    let mut document = Document::new()
        .set("width", page.width())
        .set("height", total_height)
        .set("viewBox", (0.0, 0.0, page.width(), total_height));

    for (index, canvas) in deck.slides().iter().enumerate() {
        document = document.add(render_canvas(canvas, index));
    }
    document
}

fn render_canvas(canvas: &Canvas, index: usize) -> svg_element::Group {
    let offset_y = index as f32 * (canvas.size().height() + SLIDE_GAP);
    let mut group = svg_element::Group::new()
        .set("id", format!("slide-{:02}", index + 1))
        .set("transform", format!("translate(0 {offset_y})"));

    group = group.add(
        svg_element::Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", canvas.size().width())
            .set("height", canvas.size().height())
            .set("fill", canvas.background()),
    );

    for element in canvas.elements() {
        group = group.add(render_element(element));
    }
    group
}

fn render_element(element: &Element) -> Box<dyn svg::Node> {
    match element {
        Element::Rect(rect) => render_rect(rect),
        Element::Line(line) => render_line(line),
        Element::Text(text) => render_text(text),
        Element::Table(table) => render_table(table),
    }
}

fn render_rect(rect: &Rectangle) -> Box<dyn svg::Node> {
    let frame = rect.frame();
    let mut node = svg_element::Rectangle::new()
        .set("x", frame.x())
        .set("y", frame.y())
        .set("width", frame.width())
        .set("height", frame.height())
        .set("fill", rect.fill());

    if let Some(radius) = rect.corner_radius() {
        node = node.set("rx", radius).set("ry", radius);
    }
    if let Some(stroke) = rect.stroke() {
        node = node
            .set("stroke", stroke.color())
            .set("stroke-width", stroke.width());
    }
    Box::new(node)
}

fn render_line(line: &Line) -> Box<dyn svg::Node> {
    Box::new(
        svg_element::Line::new()
            .set("x1", line.start().x())
            .set("y1", line.start().y())
            .set("x2", line.end().x())
            .set("y2", line.end().y())
            .set("stroke", line.color())
            .set("stroke-width", line.width()),
    )
}

fn render_text(text: &TextBox) -> Box<dyn svg::Node> {
    let style = text.style();
    let frame = text.frame();
    let (anchor, x) = anchor_for(style.align(), frame.x(), frame.center_x(), frame.right());
    let lines = wrap_lines(text.content(), style, frame.width());
    let line_height = line_height(style);

    let mut node = svg_element::Text::new("")
        .set("x", x)
        .set("y", frame.y())
        .set("text-anchor", anchor)
        .set("font-family", style.font_family())
        .set("font-size", style.font_size())
        .set("fill", style.color());
    if style.is_bold() {
        node = node.set("font-weight", "bold");
    }

    for (index, line) in lines.iter().enumerate() {
        // The first line drops by roughly one ascent; the rest by the line
        // height.
        let dy = if index == 0 {
            style.font_size()
        } else {
            line_height
        };
        let tspan = svg_element::TSpan::new("")
            .set("x", x)
            .set("dy", dy)
            .add(SvgText::new(escape_text(line)));
        node = node.add(tspan);
    }
    Box::new(node)
}

fn render_table(table: &Table) -> Box<dyn svg::Node> {
    let mut group = svg_element::Group::new();
    let x0 = table.origin().x();
    let y0 = table.origin().y();
    let width = table.width();

    group = group.add(
        svg_element::Rectangle::new()
            .set("x", x0)
            .set("y", y0)
            .set("width", width)
            .set("height", table.header_height())
            .set("rx", STRIP_CORNER.min(table.header_height() / 2.0))
            .set("fill", table.header_fill()),
    );
    group = render_cells(group, table, table.header(), y0, table.header_height());

    for (index, row) in table.rows().iter().enumerate() {
        let row_y = y0 + table.header_height() + index as f32 * table.row_height();
        group = group.add(
            svg_element::Rectangle::new()
                .set("x", x0)
                .set("y", row_y)
                .set("width", width)
                .set("height", table.row_height())
                .set("rx", STRIP_CORNER.min(table.row_height() / 2.0))
                .set("fill", row.fill()),
        );
        group = render_cells(group, table, row.cells(), row_y, table.row_height());
    }
    Box::new(group)
}

fn render_cells(
    mut group: svg_element::Group,
    table: &Table,
    cells: &[TableCell],
    top: f32,
    height: f32,
) -> svg_element::Group {
    let mut cell_x = table.origin().x();
    for (cell, cell_width) in cells.iter().zip(table.column_widths()) {
        let style = cell.style();
        let (anchor, x) = anchor_for(
            style.align(),
            cell_x + CELL_INSET,
            cell_x + cell_width / 2.0,
            cell_x + cell_width - CELL_INSET,
        );

        let lines: Vec<&str> = cell.content().split('\n').collect();
        let line_height = line_height(style);
        // Vertically center the block of lines inside the strip.
        let block_height = (lines.len() as f32 - 1.0) * line_height;
        let first_baseline = top + height / 2.0 - block_height / 2.0 + style.font_size() * 0.35;

        let mut node = svg_element::Text::new("")
            .set("x", x)
            .set("y", first_baseline)
            .set("text-anchor", anchor)
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", style.color());
        if style.is_bold() {
            node = node.set("font-weight", "bold");
        }
        for (index, line) in lines.iter().enumerate() {
            let dy = if index == 0 { 0.0 } else { line_height };
            node = node.add(
                svg_element::TSpan::new("")
                    .set("x", x)
                    .set("dy", dy)
                    .add(SvgText::new(escape_text(line))),
            );
        }

        group = group.add(node);
        cell_x += cell_width;
    }
    group
}

fn anchor_for(align: Alignment, left: f32, center: f32, right: f32) -> (&'static str, f32) {
    match align {
        Alignment::Left => ("start", left),
        Alignment::Center => ("middle", center),
        Alignment::Right => ("end", right),
    }
}

fn line_height(style: &TextStyle) -> f32 {
    style.line_spacing().unwrap_or(style.font_size() * 1.2)
}

/// Greedy word wrap against an average glyph width for the style's font.
fn wrap_lines(content: &str, style: &TextStyle, frame_width: f32) -> Vec<String> {
    let max_chars = (frame_width / average_char_width(style)).floor().max(1.0) as usize;

    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        if paragraph.chars().count() <= max_chars {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn average_char_width(style: &TextStyle) -> f32 {
    let factor = if style.font_family().contains("Mono") {
        0.62
    } else if style.is_bold() {
        0.55
    } else {
        0.5
    };
    style.font_size() * factor
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
