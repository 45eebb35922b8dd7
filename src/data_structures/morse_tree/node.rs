// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node implementation for the Morse tree.
//!
//! Each node is one position in the tree. The dot child hangs on the left and
//! the dash child on the right; a node only carries a character when one was
//! inserted at exactly that code.

use super::alphabet::Symbol;

/// Read-only view over a tree node.
///
/// Renderers only need this much of the tree, so they are written against
/// the trait instead of the tree's mutation API.
pub trait MorseNodeView {
    /// The character terminating at this position, if any.
    fn character(&self) -> Option<char>;

    /// Child reached by a dot.
    fn dot(&self) -> Option<&Self>;

    /// Child reached by a dash.
    fn dash(&self) -> Option<&Self>;

    /// Whether this node is a pure path node.
    fn is_vacant(&self) -> bool {
        self.character().is_none()
    }

    /// Child reached by `symbol`.
    fn child(&self, symbol: Symbol) -> Option<&Self> {
        match symbol {
            Symbol::Dot => self.dot(),
            Symbol::Dash => self.dash(),
        }
    }
}

/// Number of levels below and including `node`; 0 for no node.
pub fn subtree_height<N: MorseNodeView>(node: Option<&N>) -> usize {
    node.map_or(0, |n| 1 + subtree_height(n.dot()).max(subtree_height(n.dash())))
}

/// A node in the Morse tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MorseNode {
    character: Option<char>,
    left: Option<Box<MorseNode>>,
    right: Option<Box<MorseNode>>,
}

impl MorseNode {
    /// Creates a vacant node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn set_character(&mut self, character: char) {
        self.character = Some(character);
    }

    /// Clears the character but keeps the node and its subtrees in place.
    pub(super) fn clear_character(&mut self) {
        self.character = None;
    }

    /// Returns the child for `symbol`, creating a vacant one if missing.
    pub(super) fn child_or_insert(&mut self, symbol: Symbol) -> &mut MorseNode {
        let slot = match symbol {
            Symbol::Dot => &mut self.left,
            Symbol::Dash => &mut self.right,
        };
        slot.get_or_insert_with(Box::default)
    }

    pub(super) fn dot_mut(&mut self) -> Option<&mut MorseNode> {
        self.left.as_deref_mut()
    }

    pub(super) fn dash_mut(&mut self) -> Option<&mut MorseNode> {
        self.right.as_deref_mut()
    }
}

impl MorseNodeView for MorseNode {
    fn character(&self) -> Option<char> {
        self.character
    }

    fn dot(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn dash(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
