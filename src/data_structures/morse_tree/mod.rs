// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Morse Tree Implementation
//!
//! A binary prefix tree for International Morse Code. Every edge is a symbol
//! (dot to the left, dash to the right) and every root-to-node path is a code,
//! so encoding is a search for a character and decoding is a walk along a code.
//!
//! # Example
//!
//! ```
//! use morse_tree_lib::data_structures::MorseTree;
//!
//! let mut tree = MorseTree::new();
//! tree.load_standard_alphabet();
//!
//! let encoded = tree.encode_word("sos").unwrap();
//! assert_eq!(encoded, "... --- ...");
//! assert_eq!(tree.decode_word(&encoded).unwrap(), "SOS");
//! ```
//!
//! # Removal
//!
//! Removing a character only clears it from its node. The node stays in the
//! tree because longer codes may pass through it, so `remove('E')` leaves
//! `I`, `A` and everything below them reachable.

mod alphabet;
mod error;
mod node;
mod shared;

use tracing::{debug, info, warn};

pub use alphabet::{
    normalize, standard_code, Symbol, MAX_CODE_LENGTH, STANDARD_ALPHABET, WORD_SEPARATOR,
    WORD_SEPARATOR_TOKEN,
};
pub use error::{MorseTreeError, MorseTreeResult};
pub use node::{subtree_height, MorseNode, MorseNodeView};
pub use shared::SharedMorseTree;

/// Binary Morse tree mapping codes to characters.
///
/// The tree starts empty; the root is created by the first insertion and
/// dropped again by [`MorseTree::clear`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MorseTree {
    root: Option<Box<MorseNode>>,
}

impl MorseTree {
    /// Creates a new empty `MorseTree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree preloaded with the standard alphabet.
    pub fn with_standard_alphabet() -> Self {
        let mut tree = Self::new();
        tree.load_standard_alphabet();
        tree
    }

    /// Inserts a character at its standard code.
    ///
    /// The character is uppercased first. Missing nodes along the path are
    /// created as vacant placeholders, and an existing occupant at the final
    /// position is overwritten.
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The code the character was stored under.
    /// * `Err(MorseTreeError::NotSupported)` - If the character is not in A-Z or 0-9.
    pub fn insert(&mut self, character: char) -> MorseTreeResult<&'static str> {
        let character = normalize(character);
        let Some(code) = standard_code(character) else {
            warn!(%character, "character has no standard code");
            return Err(MorseTreeError::NotSupported(character));
        };

        let mut node: &mut MorseNode = self.root.get_or_insert_with(Box::default);
        for symbol in code.chars().filter_map(Symbol::from_char) {
            node = node.child_or_insert(symbol);
        }
        node.set_character(character);

        debug!(%character, code, "inserted character");
        Ok(code)
    }

    /// Removes a character from the tree.
    ///
    /// Searches in pre-order (node, dot subtree, dash subtree) and clears only
    /// the first node holding the character. The node itself is kept.
    ///
    /// # Returns
    ///
    /// `true` if a node held the character, `false` otherwise.
    pub fn remove(&mut self, character: char) -> bool {
        let target = normalize(character);
        let removed = self
            .root
            .as_deref_mut()
            .map_or(false, |root| Self::remove_first(root, target));

        if removed {
            debug!(character = %target, "removed character");
        }
        removed
    }

    fn remove_first(node: &mut MorseNode, target: char) -> bool {
        if node.character() == Some(target) {
            node.clear_character();
            return true;
        }
        node.dot_mut()
            .map_or(false, |child| Self::remove_first(child, target))
            || node
                .dash_mut()
                .map_or(false, |child| Self::remove_first(child, target))
    }

    /// Finds the code of a character by searching the tree in pre-order.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The path from the root to the first node holding the character.
    /// * `Err(MorseTreeError::NotFound)` - If no node holds it.
    pub fn lookup(&self, character: char) -> MorseTreeResult<String> {
        let target = normalize(character);
        let mut path = String::with_capacity(MAX_CODE_LENGTH);

        match self.root.as_deref() {
            Some(root) if Self::find_path(root, target, &mut path) => Ok(path),
            _ => Err(MorseTreeError::NotFound(target.to_string())),
        }
    }

    fn find_path(node: &MorseNode, target: char, path: &mut String) -> bool {
        if node.character() == Some(target) {
            return true;
        }
        for symbol in [Symbol::Dot, Symbol::Dash] {
            if let Some(child) = node.child(symbol) {
                path.push(symbol.as_char());
                if Self::find_path(child, target, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    /// Decodes a single code by walking it from the root.
    ///
    /// # Returns
    ///
    /// * `Ok(char)` - The character at the end of the code.
    /// * `Err(MorseTreeError::NotFound)` - If the code is empty, contains
    ///   anything but `.` and `-`, leaves the tree, or ends on a vacant node.
    pub fn decode_symbol(&self, code: &str) -> MorseTreeResult<char> {
        let not_found = || MorseTreeError::NotFound(code.to_string());
        if code.is_empty() {
            return Err(not_found());
        }

        let mut node = self.root.as_deref().ok_or_else(not_found)?;
        for c in code.chars() {
            let symbol = Symbol::from_char(c).ok_or_else(not_found)?;
            node = node.child(symbol).ok_or_else(not_found)?;
        }
        node.character().ok_or_else(not_found)
    }

    /// Encodes text as space-separated codes.
    ///
    /// Spaces become the word separator `" / "`. Every character that is not
    /// in the tree is collected, and if there are any the whole call fails
    /// with [`MorseTreeError::UnknownCharacters`] listing them in order.
    pub fn encode_word(&self, text: &str) -> MorseTreeResult<String> {
        let mut encoded = String::new();
        let mut missing = Vec::new();

        for c in text.to_uppercase().chars() {
            if c == ' ' {
                encoded.push_str(WORD_SEPARATOR);
                continue;
            }
            match self.lookup(c) {
                Ok(code) => {
                    if !encoded.is_empty() && !encoded.ends_with(' ') {
                        encoded.push(' ');
                    }
                    encoded.push_str(&code);
                }
                Err(_) => missing.push(c),
            }
        }

        if !missing.is_empty() {
            warn!(?missing, "characters missing from tree");
            return Err(MorseTreeError::UnknownCharacters(missing));
        }
        Ok(encoded.trim().to_string())
    }

    /// Decodes space-separated codes into text.
    ///
    /// Empty tokens are skipped and `/` becomes a space. Every code that does
    /// not resolve is collected, and if there are any the whole call fails with
    /// [`MorseTreeError::UnknownCodes`] listing them in order.
    pub fn decode_word(&self, code: &str) -> MorseTreeResult<String> {
        let mut decoded = String::new();
        let mut missing = Vec::new();

        for token in code.split(' ').map(str::trim).filter(|t| !t.is_empty()) {
            if token == WORD_SEPARATOR_TOKEN {
                decoded.push(' ');
                continue;
            }
            match self.decode_symbol(token) {
                Ok(c) => decoded.push(c),
                Err(_) => missing.push(token.to_string()),
            }
        }

        if !missing.is_empty() {
            warn!(?missing, "codes missing from tree");
            return Err(MorseTreeError::UnknownCodes(missing));
        }
        Ok(decoded)
    }

    /// Drops every node, returning the tree to the empty state.
    pub fn clear(&mut self) {
        self.root = None;
        debug!("cleared tree");
    }

    /// Inserts A-Z and 0-9 in table order.
    ///
    /// # Returns
    ///
    /// The number of characters inserted.
    pub fn load_standard_alphabet(&mut self) -> usize {
        let loaded = STANDARD_ALPHABET
            .iter()
            .filter(|(c, _)| self.insert(*c).is_ok())
            .count();
        info!(loaded, "loaded standard alphabet");
        loaded
    }

    /// Read-only access to the root node.
    pub fn root(&self) -> Option<&MorseNode> {
        self.root.as_deref()
    }

    /// Returns `true` if the root has not been created.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes holding a character.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Number of allocated nodes, vacant ones included.
    pub fn node_count(&self) -> usize {
        fn count(node: Option<&MorseNode>) -> usize {
            node.map_or(0, |n| 1 + count(n.dot()) + count(n.dash()))
        }
        count(self.root())
    }

    /// Number of levels in the tree.
    pub fn height(&self) -> usize {
        subtree_height(self.root())
    }

    /// Every `(character, code)` pair, in pre-order.
    pub fn entries(&self) -> Vec<(char, String)> {
        fn collect(node: &MorseNode, path: &mut String, out: &mut Vec<(char, String)>) {
            if let Some(c) = node.character() {
                out.push((c, path.clone()));
            }
            for symbol in [Symbol::Dot, Symbol::Dash] {
                if let Some(child) = node.child(symbol) {
                    path.push(symbol.as_char());
                    collect(child, path, out);
                    path.pop();
                }
            }
        }

        let mut out = Vec::new();
        if let Some(root) = self.root() {
            collect(root, &mut String::new(), &mut out);
        }
        out
    }
}
