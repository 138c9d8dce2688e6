//! Table element definition.
//!
//! A table is a header strip plus one row per data entry. Cell styling is
//! resolved before the element is built; the exporter only lays out what it
//! is given.

use crate::{color::Color, draw::text::TextStyle, geometry::Point};

/// One styled cell of a table.
#[derive(Debug, Clone)]
pub struct TableCell {
    content: String,
    style: TextStyle,
}

impl TableCell {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Returns the cell text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the cell text style
    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

/// One data row with its background fill.
#[derive(Debug, Clone)]
pub struct TableRow {
    fill: Color,
    cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(fill: Color, cells: Vec<TableCell>) -> Self {
        Self { fill, cells }
    }

    /// Returns the row background fill
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the row cells in column order
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// A header strip plus data rows at fixed column widths.
#[derive(Debug, Clone)]
pub struct Table {
    origin: Point,
    column_widths: Vec<f32>,
    header_height: f32,
    row_height: f32,
    header_fill: Color,
    header: Vec<TableCell>,
    rows: Vec<TableRow>,
}

impl Table {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: Point,
        column_widths: Vec<f32>,
        header_height: f32,
        row_height: f32,
        header_fill: Color,
        header: Vec<TableCell>,
        rows: Vec<TableRow>,
    ) -> Self {
        Self {
            origin,
            column_widths,
            header_height,
            row_height,
            header_fill,
            header,
            rows,
        }
    }

    /// Returns the top-left corner of the header strip
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the column widths in points
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// Returns the total table width
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Returns the header strip height
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Returns the height of each data row
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Returns the header strip fill color
    pub fn header_fill(&self) -> &Color {
        &self.header_fill
    }

    /// Returns the header cells in column order
    pub fn header(&self) -> &[TableCell] {
        &self.header
    }

    /// Returns the data rows in order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}
