//! Reusable composition recipes ("widgets").
//!
//! A widget is a stateless pure function: given a bounding frame, a content
//! record, and the theme, it deterministically produces a fixed list of
//! drawable elements at offsets relative to that frame. Widgets own no data
//! after returning; the slide composer appends their output to the canvas.

pub mod card;
pub mod table;
pub mod tree;

pub use card::{Badge, CardLayout};
pub use table::CellValue;
pub use tree::{LevelStyle, RootStyle, TreeNode, TreeStyle};
