//! The drawable element model.
//!
//! A slide is an ordered sequence of drawable elements, each one a tagged
//! variant over:
//!
//! - [`TextBox`] - a positioned block of styled text
//! - [`Rectangle`] - a filled rectangle, optionally rounded and stroked
//! - [`Line`] - a straight connector segment
//! - [`Table`] - a header strip plus styled data rows
//!
//! Elements never reference one another; composition is purely by coincident
//! geometry. Widgets produce lists of elements at offsets relative to the
//! frame they are given.

mod shape;
mod table;
mod text;

pub use shape::{Line, Rectangle, Stroke};
pub use table::{Table, TableCell, TableRow};
pub use text::{Alignment, TextBox, TextStyle};

/// An atomic visual unit placed on a canvas.
#[derive(Debug, Clone)]
pub enum Element {
    Text(TextBox),
    Rect(Rectangle),
    Line(Line),
    Table(Table),
}
