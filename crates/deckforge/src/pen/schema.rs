//! Typed schema for the `.pen` design document.
//!
//! The design tool's format is an open JSON tree; this schema names the
//! fields the patch utility reads and writes (ids, names, x-coordinates,
//! text content, icon names, children) and flattens everything else into an
//! untouched side map so a load → save round trip preserves the document.
//!
//! Mutation goes through the typed views ([`SlideView`], [`HeaderView`],
//! [`CardView`]) with named setter operations. The views check the shape
//! they are about to touch and fail with a descriptive
//! [`DocumentError::Shape`] instead of silently writing into the wrong
//! field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pen::DocumentError;

/// The root of a design document: the slide sequence plus whatever other
/// fields the design tool stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the design tree. Slides, headers, grids, columns, cards, and
/// text nodes all share this shape; `kind` tags the node type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(rename = "iconFontName", default, skip_serializing_if = "Option::is_none")]
    pub icon_font_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// Returns true if this node is a text node.
    pub fn is_text(&self) -> bool {
        self.kind.as_deref() == Some("text")
    }

    fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| String::from("<unnamed>"))
    }
}

/// A typed, validated view over one slide frame.
pub struct SlideView<'a> {
    node: &'a mut Node,
}

impl<'a> SlideView<'a> {
    pub fn new(node: &'a mut Node) -> Self {
        Self { node }
    }

    fn shape_error(&self, reason: impl Into<String>) -> DocumentError {
        DocumentError::Shape {
            slide: self.node.display_name(),
            reason: reason.into(),
        }
    }

    /// Checks that the slide has the template shape the patch relies on:
    /// a header with three text nodes, a two-column content grid with at
    /// least two cards of three nodes each per column, and a trailing text
    /// footer.
    pub fn validate_template(&self) -> Result<(), DocumentError> {
        let children = &self.node.children;
        if children.len() < 3 {
            return Err(self.shape_error(
                "expected at least header, content grid, and footer children",
            ));
        }

        let header = &children[0];
        if header.children.len() < 3 {
            return Err(
                self.shape_error("header must hold label, title, and description nodes")
            );
        }
        for (index, child) in header.children.iter().take(3).enumerate() {
            if !child.is_text() {
                return Err(self.shape_error(format!("header child {index} is not a text node")));
            }
        }

        let grid = &children[1];
        if grid.children.len() != 2 {
            return Err(self.shape_error(format!(
                "content grid must hold exactly 2 columns, found {}",
                grid.children.len()
            )));
        }
        for (column_index, column) in grid.children.iter().enumerate() {
            if column.children.len() < 2 {
                return Err(self.shape_error(format!(
                    "grid column {column_index} must hold at least 2 cards"
                )));
            }
            for (card_index, card) in column.children.iter().take(2).enumerate() {
                if card.children.len() < 3 {
                    return Err(self.shape_error(format!(
                        "card {card_index} in column {column_index} must hold icon, title, and body nodes"
                    )));
                }
            }
        }

        match children.last() {
            Some(footer) if footer.is_text() => Ok(()),
            _ => Err(self.shape_error("footer (the last child) must be a text node")),
        }
    }

    pub fn set_id(&mut self, id: &str) {
        self.node.id = Some(id.to_string());
    }

    pub fn set_name(&mut self, name: &str) {
        self.node.name = Some(name.to_string());
    }

    pub fn set_x(&mut self, x: f64) {
        self.node.x = Some(x);
    }

    /// Returns the view over the slide's header.
    pub fn header(&mut self) -> Result<HeaderView<'_>, DocumentError> {
        let slide = self.node.display_name();
        match self.node.children.first_mut() {
            Some(header) if header.children.len() >= 3 => Ok(HeaderView {
                node: header,
                slide,
            }),
            _ => Err(DocumentError::Shape {
                slide,
                reason: String::from("slide has no header with label, title, and description"),
            }),
        }
    }

    /// Returns the view over one card of the content grid.
    pub fn grid_card(&mut self, column: usize, card: usize) -> Result<CardView<'_>, DocumentError> {
        let slide = self.node.display_name();
        let missing = |reason: String| DocumentError::Shape {
            slide: slide.clone(),
            reason,
        };

        let grid = self
            .node
            .children
            .get_mut(1)
            .ok_or_else(|| missing(String::from("slide has no content grid")))?;
        let column_node = grid
            .children
            .get_mut(column)
            .ok_or_else(|| missing(format!("content grid has no column {column}")))?;
        let card_node = column_node
            .children
            .get_mut(card)
            .ok_or_else(|| missing(format!("column {column} has no card {card}")))?;

        if card_node.children.len() < 3 {
            return Err(missing(format!(
                "card {card} in column {column} must hold icon, title, and body nodes"
            )));
        }
        Ok(CardView {
            node: card_node,
            slide,
        })
    }

    /// Overwrites the footer text (the slide's last child).
    pub fn set_footer(&mut self, content: &str) -> Result<(), DocumentError> {
        let slide = self.node.display_name();
        match self.node.children.last_mut() {
            Some(footer) if footer.is_text() => {
                footer.content = Some(content.to_string());
                Ok(())
            }
            _ => Err(DocumentError::Shape {
                slide,
                reason: String::from("footer (the last child) must be a text node"),
            }),
        }
    }
}

/// Named setters for a slide header's three text nodes.
pub struct HeaderView<'a> {
    node: &'a mut Node,
    slide: String,
}

impl HeaderView<'_> {
    pub fn set_label(&mut self, content: &str) -> Result<(), DocumentError> {
        self.set(0, content)
    }

    pub fn set_title(&mut self, content: &str) -> Result<(), DocumentError> {
        self.set(1, content)
    }

    pub fn set_description(&mut self, content: &str) -> Result<(), DocumentError> {
        self.set(2, content)
    }

    fn set(&mut self, index: usize, content: &str) -> Result<(), DocumentError> {
        match self.node.children.get_mut(index) {
            Some(child) => {
                child.content = Some(content.to_string());
                Ok(())
            }
            None => Err(DocumentError::Shape {
                slide: self.slide.clone(),
                reason: format!("header has no child {index}"),
            }),
        }
    }
}

/// Named setters for one content-grid card: icon node, title node, body
/// node.
pub struct CardView<'a> {
    node: &'a mut Node,
    slide: String,
}

impl CardView<'_> {
    pub fn set_name(&mut self, name: &str) {
        self.node.name = Some(name.to_string());
    }

    pub fn set_icon(&mut self, icon_font_name: &str) -> Result<(), DocumentError> {
        self.child(0)?.icon_font_name = Some(icon_font_name.to_string());
        Ok(())
    }

    pub fn set_title(&mut self, content: &str) -> Result<(), DocumentError> {
        self.child(1)?.content = Some(content.to_string());
        Ok(())
    }

    pub fn set_body(&mut self, content: &str) -> Result<(), DocumentError> {
        self.child(2)?.content = Some(content.to_string());
        Ok(())
    }

    fn child(&mut self, index: usize) -> Result<&mut Node, DocumentError> {
        let slide = self.slide.clone();
        self.node
            .children
            .get_mut(index)
            .ok_or(DocumentError::Shape {
                slide,
                reason: format!("card has no child {index}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = json!({
            "name": "pitch-deck",
            "version": 7,
            "children": [
                {
                    "id": "s1",
                    "name": "01 - Title",
                    "type": "frame",
                    "x": 0.0,
                    "fills": [{"color": "#0a0f1c"}],
                    "children": [
                        {"type": "text", "content": "01", "fontSize": 10}
                    ]
                }
            ]
        })
        .to_string();

        let document: Document = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.extra["version"], json!(7));
        assert_eq!(document.children[0].extra["fills"], json!([{"color": "#0a0f1c"}]));

        let rendered = serde_json::to_string(&document).unwrap();
        let reparsed: Document = serde_json::from_str(&rendered).unwrap();
        assert_eq!(document, reparsed);
    }

    #[test]
    fn test_text_node_detection() {
        let text = Node {
            kind: Some(String::from("text")),
            ..Node::default()
        };
        let frame = Node {
            kind: Some(String::from("frame")),
            ..Node::default()
        };
        assert!(text.is_text());
        assert!(!frame.is_text());
        assert!(!Node::default().is_text());
    }

    #[test]
    fn test_validate_rejects_single_column_grid() {
        let mut slide = Node {
            name: Some(String::from("06 - Broken")),
            children: vec![
                Node {
                    children: vec![text(), text(), text()],
                    ..Node::default()
                },
                Node {
                    // One column only.
                    children: vec![Node::default()],
                    ..Node::default()
                },
                text(),
            ],
            ..Node::default()
        };

        let view = SlideView::new(&mut slide);
        let err = view.validate_template().unwrap_err();
        match err {
            DocumentError::Shape { slide, reason } => {
                assert_eq!(slide, "06 - Broken");
                assert!(reason.contains("exactly 2 columns"), "{reason}");
            }
            other => panic!("expected shape error, got {other}"),
        }
    }

    fn text() -> Node {
        Node {
            kind: Some(String::from("text")),
            content: Some(String::new()),
            ..Node::default()
        }
    }
}
