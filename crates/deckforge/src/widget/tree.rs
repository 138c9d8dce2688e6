//! Tree widget: a labeled box per node, children horizontally distributed
//! and centered under their parent, one connector line per child.
//!
//! The node tree is a strict tree by construction (children are an owned,
//! finite sequence), so no cycle handling is needed. Node styling derives
//! from depth: the root is emphasized, mid-level nodes sit on card surfaces,
//! and leaves drop to the darker panel color.

use deckforge_core::{
    draw::{Alignment, Element, Line, Rectangle, Stroke, TextBox, TextStyle},
    geometry::{Point, Rect, inches},
};

use crate::theme::Theme;

/// Width of connector lines, in points.
const CONNECTOR_WIDTH: f32 = 2.0;

/// One node of a tree diagram.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with children.
    pub fn with_children(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Returns the node label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the direct children
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Counts direct children summed recursively over the whole tree.
    pub fn descendant_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .iter()
                .map(TreeNode::descendant_count)
                .sum::<usize>()
    }
}

/// How the root node is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStyle {
    /// Accent fill with ink text.
    Filled,
    /// Card fill with an accent border.
    Outlined,
}

/// Box dimensions and typography for one tree depth.
#[derive(Debug, Clone, Copy)]
pub struct LevelStyle {
    /// Node box width, in inches.
    pub width: f32,
    /// Node box height, in inches.
    pub height: f32,
    /// Label font size, in points.
    pub font_size: f32,
    /// Horizontal gap between sibling boxes, in inches.
    pub gap: f32,
}

/// Styling for a whole tree diagram.
#[derive(Debug, Clone)]
pub struct TreeStyle {
    pub root: RootStyle,
    /// Per-depth box styles; must hold at least one entry. Depths beyond
    /// the last entry reuse it.
    pub levels: Vec<LevelStyle>,
    /// Vertical gap between a parent's bottom edge and its children's top
    /// edges, in inches.
    pub row_gap: f32,
}

impl TreeStyle {
    fn level(&self, depth: usize) -> LevelStyle {
        let index = depth.min(self.levels.len() - 1);
        self.levels[index]
    }
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            root: RootStyle::Filled,
            levels: vec![
                LevelStyle {
                    width: 2.6,
                    height: 0.45,
                    font_size: 13.0,
                    gap: 0.12,
                },
                LevelStyle {
                    width: 1.4,
                    height: 0.38,
                    font_size: 10.0,
                    gap: 0.12,
                },
                LevelStyle {
                    width: 1.1,
                    height: 0.32,
                    font_size: 9.0,
                    gap: 0.1,
                },
            ],
            row_gap: 0.5,
        }
    }
}

/// Builds a tree diagram anchored at the top-center of the root box.
///
/// Produces exactly one box (rounded rect + centered label) per node and
/// exactly one connector line per child, from the parent's bottom-center to
/// the child's top-center.
pub fn tree(anchor: Point, root: &TreeNode, style: &TreeStyle, theme: &Theme) -> Vec<Element> {
    let mut elements = Vec::new();
    layout_node(anchor.x(), anchor.y(), 0, root, style, theme, &mut elements);
    elements
}

fn layout_node(
    center_x: f32,
    top_y: f32,
    depth: usize,
    node: &TreeNode,
    style: &TreeStyle,
    theme: &Theme,
    elements: &mut Vec<Element>,
) {
    let level = style.level(depth);
    let width = inches(level.width);
    let height = inches(level.height);
    let frame = Rect::new(center_x - width / 2.0, top_y, width, height);

    push_node_box(elements, frame, depth, node.label(), level.font_size, style, theme);

    if node.children().is_empty() {
        return;
    }

    let child_level = style.level(depth + 1);
    let child_width = inches(child_level.width);
    let child_gap = inches(child_level.gap);
    let count = node.children().len() as f32;
    let row_width = count * child_width + (count - 1.0) * child_gap;
    let row_start = center_x - row_width / 2.0;
    let child_top = frame.bottom() + inches(style.row_gap);

    for (index, child) in node.children().iter().enumerate() {
        let child_center = row_start + index as f32 * (child_width + child_gap) + child_width / 2.0;

        elements.push(Element::Line(Line::new(
            Point::new(center_x, frame.bottom()),
            Point::new(child_center, child_top),
            theme.accent(),
            CONNECTOR_WIDTH,
        )));

        layout_node(child_center, child_top, depth + 1, child, style, theme, elements);
    }
}

fn push_node_box(
    elements: &mut Vec<Element>,
    frame: Rect,
    depth: usize,
    label: &str,
    font_size: f32,
    style: &TreeStyle,
    theme: &Theme,
) {
    let accent_border = Stroke::new(theme.accent(), 1.0);
    let (rect, text_color, bold) = match depth {
        0 => match style.root {
            RootStyle::Filled => (
                Rectangle::rounded(frame, theme.accent(), None),
                theme.ink(),
                true,
            ),
            RootStyle::Outlined => (
                Rectangle::rounded(frame, theme.card(), None).with_stroke(accent_border),
                theme.white(),
                true,
            ),
        },
        1 => (
            Rectangle::rounded(frame, theme.card(), None).with_stroke(accent_border),
            theme.white(),
            false,
        ),
        _ => (
            Rectangle::rounded(frame, theme.darker(), None).with_stroke(accent_border),
            theme.gray_light(),
            false,
        ),
    };

    elements.push(Element::Rect(rect));

    let mut text_style = TextStyle::new()
        .with_size(font_size)
        .with_color(text_color)
        .with_align(Alignment::Center);
    if bold {
        text_style = text_style.bold();
    }
    elements.push(Element::Text(TextBox::new(frame, label, text_style)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        TreeNode::with_children(
            "Finished Product",
            vec![
                TreeNode::with_children(
                    "Sub-Assembly A",
                    vec![TreeNode::new("Component A1"), TreeNode::new("Component A2")],
                ),
                TreeNode::with_children(
                    "Quality Certificate",
                    vec![
                        TreeNode::new("Lab Test Report"),
                        TreeNode::new("Compliance Cert"),
                    ],
                ),
                TreeNode::new("Shipping Manifest"),
            ],
        )
    }

    fn count_elements(elements: &[Element]) -> (usize, usize, usize) {
        let mut rects = 0;
        let mut lines = 0;
        let mut texts = 0;
        for element in elements {
            match element {
                Element::Rect(_) => rects += 1,
                Element::Line(_) => lines += 1,
                Element::Text(_) => texts += 1,
                Element::Table(_) => {}
            }
        }
        (rects, lines, texts)
    }

    #[test]
    fn test_descendant_count() {
        assert_eq!(sample_tree().descendant_count(), 7);
        assert_eq!(TreeNode::new("leaf").descendant_count(), 0);
    }

    #[test]
    fn test_one_box_per_node_one_line_per_child() {
        let theme = Theme::default();
        let root = sample_tree();
        let elements = tree(
            Point::new(inches(9.6), inches(3.0)),
            &root,
            &TreeStyle::default(),
            &theme,
        );

        let node_count = root.descendant_count() + 1;
        let (rects, lines, texts) = count_elements(&elements);
        assert_eq!(rects, node_count);
        assert_eq!(texts, node_count);
        assert_eq!(lines, root.descendant_count());
    }

    #[test]
    fn test_children_centered_under_parent() {
        let theme = Theme::default();
        let root = TreeNode::with_children(
            "root",
            vec![TreeNode::new("a"), TreeNode::new("b"), TreeNode::new("c")],
        );
        let anchor_x = inches(5.0);
        let elements = tree(
            Point::new(anchor_x, 0.0),
            &root,
            &TreeStyle::default(),
            &theme,
        );

        // Child boxes are every Rect after the root; their centers must be
        // symmetric around the anchor.
        let child_centers: Vec<f32> = elements
            .iter()
            .filter_map(|element| match element {
                Element::Rect(rect) => Some(rect.frame().center_x()),
                _ => None,
            })
            .skip(1)
            .collect();
        assert_eq!(child_centers.len(), 3);
        let mid = child_centers[1];
        assert!((mid - anchor_x).abs() < 0.01);
        let spread_left = mid - child_centers[0];
        let spread_right = child_centers[2] - mid;
        assert!((spread_left - spread_right).abs() < 0.01);
    }

    #[test]
    fn test_connectors_join_parent_bottom_to_child_top() {
        let theme = Theme::default();
        let root = TreeNode::with_children("root", vec![TreeNode::new("only")]);
        let style = TreeStyle::default();
        let elements = tree(Point::new(inches(3.0), inches(1.0)), &root, &style, &theme);

        let line = elements
            .iter()
            .find_map(|element| match element {
                Element::Line(line) => Some(line),
                _ => None,
            })
            .expect("tree with a child must contain a connector");

        let root_bottom = inches(1.0) + inches(style.levels[0].height);
        assert!((line.start().y() - root_bottom).abs() < 0.01);
        assert!((line.end().y() - (root_bottom + inches(style.row_gap))).abs() < 0.01);
    }
}
