//! Comparison-table widget: a header strip plus alternating-color data rows
//! with per-cell color rules.
//!
//! The first column holds capability labels; the remaining columns hold
//! [`CellValue`] marks. A match glyph in the designated (final) column
//! renders in the accent color; everywhere else the marks fall back to the
//! gray ramp.

use deckforge_core::{
    color::Color,
    draw::{Alignment, Table, TableCell, TableRow, TextStyle},
    geometry::Point,
};

use crate::theme::Theme;

/// The value of one comparison cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// Full support; rendered as a check mark.
    Yes,
    /// No support; rendered as a cross.
    No,
    /// Partial support; rendered as the word "Partial".
    Partial,
}

impl CellValue {
    fn glyph(self) -> &'static str {
        match self {
            CellValue::Yes => "\u{2713}",
            CellValue::No => "\u{2717}",
            CellValue::Partial => "Partial",
        }
    }
}

/// Builds the comparison table element.
///
/// `header` and `column_widths` must have the same length, and every row must
/// carry exactly one fewer cell than that (its capability label fills the
/// first column). The composer validates this before calling.
pub fn comparison_table(
    origin: Point,
    column_widths: Vec<f32>,
    header: &[&str],
    rows: &[(&str, Vec<CellValue>)],
    theme: &Theme,
) -> Table {
    let header_cells = header
        .iter()
        .enumerate()
        .map(|(column, text)| {
            let align = if column == 0 {
                Alignment::Left
            } else {
                Alignment::Center
            };
            TableCell::new(
                *text,
                TextStyle::new()
                    .with_size(11.0)
                    .with_color(theme.ink())
                    .bold()
                    .with_align(align),
            )
        })
        .collect();

    let accent_column = header.len() - 1;
    let body_rows = rows
        .iter()
        .enumerate()
        .map(|(index, (capability, values))| {
            let fill = if index % 2 == 0 {
                theme.card()
            } else {
                theme.darker()
            };
            let mut cells = vec![TableCell::new(
                *capability,
                TextStyle::new().with_size(11.0).with_color(theme.white()),
            )];
            cells.extend(values.iter().enumerate().map(|(offset, value)| {
                mark_cell(*value, offset + 1 == accent_column, theme)
            }));
            TableRow::new(fill, cells)
        })
        .collect();

    Table::new(
        origin,
        column_widths,
        39.6, // 0.55 in header strip
        32.4, // 0.45 in rows
        theme.accent(),
        header_cells,
        body_rows,
    )
}

fn mark_cell(value: CellValue, designated: bool, theme: &Theme) -> TableCell {
    let (color, size, bold): (Color, f32, bool) = match value {
        CellValue::Yes if designated => (theme.accent(), 14.0, true),
        CellValue::Yes => (theme.gray_light(), 14.0, false),
        CellValue::Partial => (theme.gray_med(), 10.0, false),
        CellValue::No => (theme.gray_dark(), 14.0, false),
    };

    let mut style = TextStyle::new()
        .with_size(size)
        .with_color(color)
        .with_family(theme.mono_font())
        .with_align(Alignment::Center);
    if bold {
        style = style.bold();
    }
    TableCell::new(value.glyph(), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table(theme: &Theme) -> Table {
        comparison_table(
            Point::new(59.76, 187.2),
            vec![201.6, 158.4, 158.4, 158.4, 158.4],
            &["Capability", "NFT", "ERP", "RWA", "BlockTrace"],
            &[
                (
                    "Hierarchical token structures",
                    vec![
                        CellValue::No,
                        CellValue::No,
                        CellValue::No,
                        CellValue::Yes,
                    ],
                ),
                (
                    "Cryptographic provenance",
                    vec![
                        CellValue::Partial,
                        CellValue::No,
                        CellValue::Partial,
                        CellValue::Yes,
                    ],
                ),
            ],
            theme,
        )
    }

    #[test]
    fn test_row_and_column_counts() {
        let theme = Theme::default();
        let table = sample_table(&theme);

        assert_eq!(table.header().len(), 5);
        assert_eq!(table.rows().len(), 2);
        for row in table.rows() {
            assert_eq!(row.cells().len(), 5);
        }
    }

    #[test]
    fn test_alternating_row_fills() {
        let theme = Theme::default();
        let table = sample_table(&theme);

        assert_eq!(table.rows()[0].fill(), &theme.card());
        assert_eq!(table.rows()[1].fill(), &theme.darker());
    }

    #[test]
    fn test_match_glyph_accent_only_in_final_column() {
        let theme = Theme::default();
        let table = sample_table(&theme);

        let row = &table.rows()[1];
        // Final column: accent bold check.
        let last = row.cells().last().unwrap();
        assert_eq!(last.content(), "\u{2713}");
        assert_eq!(last.style().color(), &theme.accent());
        assert!(last.style().is_bold());
        // Partial mark renders medium gray.
        let partial = &row.cells()[1];
        assert_eq!(partial.content(), "Partial");
        assert_eq!(partial.style().color(), &theme.gray_med());
    }

    #[test]
    fn test_total_width_is_sum_of_columns() {
        let theme = Theme::default();
        let table = sample_table(&theme);

        assert!((table.width() - 835.2).abs() < 0.01);
    }
}
