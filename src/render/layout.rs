// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Canvas layout for a Morse tree.
//!
//! Places the root at the top centre and halves the horizontal offset on every
//! level, so dot subtrees fan out to the left and dash subtrees to the right.

use serde::Serialize;

use crate::config::render::RenderConfig;
use crate::data_structures::morse_tree::{subtree_height, MorseNodeView, Symbol};

/// Distance symbol labels are lifted above the middle of their edge.
const LABEL_LIFT: f64 = 3.0;

/// A positioned node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    /// Path from the root; empty for the root itself
    pub code: String,
    /// Character held by the node
    pub character: Option<char>,
    /// Centre x coordinate
    pub x: f64,
    /// Centre y coordinate
    pub y: f64,
}

/// A positioned edge between a parent and one of its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    /// `.` or `-`
    pub symbol: char,
    /// Start x, on the parent's bottom edge
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x, on the child's top edge
    pub x2: f64,
    /// End y
    pub y2: f64,
    /// Position of the symbol label
    pub label_x: f64,
    /// Position of the symbol label
    pub label_y: f64,
}

/// Complete layout of a tree, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLayout {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Number of levels in the tree
    pub levels: usize,
    /// Radius every node is drawn with
    pub node_radius: f64,
    /// Nodes in pre-order
    pub nodes: Vec<LayoutNode>,
    /// Edges in pre-order of their child node
    pub edges: Vec<LayoutEdge>,
}

impl TreeLayout {
    /// Lays out the tree rooted at `root`.
    ///
    /// # Returns
    ///
    /// `None` for an empty tree, otherwise the positioned nodes and edges.
    pub fn compute<N: MorseNodeView>(root: Option<&N>, config: &RenderConfig) -> Option<Self> {
        let root = root?;
        let levels = subtree_height(Some(root));
        let (width, height) = canvas_size(levels, config);

        let mut layout = Self {
            width,
            height,
            levels,
            node_radius: config.node_radius,
            nodes: Vec::new(),
            edges: Vec::new(),
        };

        let x = f64::from(width) / 2.0;
        let offset = f64::from(width) / 4.0;
        layout.place(root, String::new(), x, config.top_margin, offset, config);
        Some(layout)
    }

    fn place<N: MorseNodeView>(
        &mut self,
        node: &N,
        code: String,
        x: f64,
        y: f64,
        offset: f64,
        config: &RenderConfig,
    ) {
        self.nodes.push(LayoutNode {
            code: code.clone(),
            character: node.character(),
            x,
            y,
        });

        let radius = config.node_radius;
        for (symbol, dx) in [(Symbol::Dot, -offset), (Symbol::Dash, offset)] {
            let Some(child) = node.child(symbol) else {
                continue;
            };
            let (child_x, child_y) = (x + dx, y + config.level_spacing);

            self.edges.push(LayoutEdge {
                symbol: symbol.as_char(),
                x1: x,
                y1: y + radius,
                x2: child_x,
                y2: child_y - radius,
                label_x: (x + child_x) / 2.0,
                label_y: (y + child_y) / 2.0 - LABEL_LIFT,
            });

            let mut child_code = code.clone();
            child_code.push(symbol.as_char());
            self.place(child, child_code, child_x, child_y, offset / 2.0, config);
        }
    }
}

/// Canvas size for a tree with `levels` levels, clamped to the configured bounds.
pub fn canvas_size(levels: usize, config: &RenderConfig) -> (u32, u32) {
    let levels = u32::try_from(levels).unwrap_or(u32::MAX);

    let width = 2u64
        .saturating_pow(levels)
        .saturating_mul(u64::from(config.width_per_leaf))
        .max(u64::from(config.min_width))
        .min(u64::from(config.max_width));
    let height = u64::from(config.base_height)
        .saturating_add(u64::from(levels) * u64::from(config.height_per_level))
        .max(u64::from(config.min_height))
        .min(u64::from(config.max_height));

    // Both values are capped by u32 maximums above; the maximum wins over an
    // inverted minimum.
    (width as u32, height as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::MorseTree;

    #[test]
    fn test_empty_tree_has_no_layout() {
        let tree = MorseTree::new();
        assert!(TreeLayout::compute(tree.root(), &RenderConfig::default()).is_none());
    }

    #[test]
    fn test_canvas_size_is_clamped() {
        let config = RenderConfig::default();
        assert_eq!(canvas_size(1, &config), (400, 250));
        assert_eq!(canvas_size(6, &config), (800, 300));
        assert_eq!(canvas_size(20, &config), (800, 600));
    }

    #[test]
    fn test_canvas_size_with_inverted_bounds() {
        let config = RenderConfig {
            min_width: 900,
            max_width: 800,
            min_height: 700,
            max_height: 600,
            ..RenderConfig::default()
        };
        assert_eq!(canvas_size(3, &config), (800, 600));
        assert_eq!(canvas_size(0, &config), (800, 600));
    }

    #[test]
    fn test_children_fan_out() {
        let mut tree = MorseTree::new();
        tree.insert('E').unwrap();
        tree.insert('T').unwrap();

        let config = RenderConfig::default();
        let layout = TreeLayout::compute(tree.root(), &config).unwrap();
        assert_eq!(layout.levels, 2);
        assert_eq!((layout.width, layout.height), (400, 250));
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 2);

        let root = &layout.nodes[0];
        assert_eq!((root.x, root.y), (200.0, 40.0));
        assert_eq!(root.character, None);

        let e = &layout.nodes[1];
        assert_eq!((e.code.as_str(), e.character), (".", Some('E')));
        assert_eq!((e.x, e.y), (100.0, 80.0));

        let t = &layout.nodes[2];
        assert_eq!((t.code.as_str(), t.character), ("-", Some('T')));
        assert_eq!((t.x, t.y), (300.0, 80.0));

        let dot = &layout.edges[0];
        assert_eq!(dot.symbol, '.');
        assert_eq!((dot.x1, dot.y1, dot.x2, dot.y2), (200.0, 50.0, 100.0, 70.0));
        assert_eq!((dot.label_x, dot.label_y), (150.0, 57.0));
    }

    #[test]
    fn test_full_alphabet_layout() {
        let tree = MorseTree::with_standard_alphabet();
        let layout = TreeLayout::compute(tree.root(), &RenderConfig::default()).unwrap();

        assert_eq!(layout.nodes.len(), tree.node_count());
        assert_eq!(layout.edges.len(), tree.node_count() - 1);
        let labelled = layout.nodes.iter().filter(|n| n.character.is_some()).count();
        assert_eq!(labelled, 36);
    }
}
