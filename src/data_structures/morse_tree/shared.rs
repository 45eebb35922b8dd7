// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Thread-safe handle over a [`MorseTree`].
//!
//! Searches read node contents that removals and insertions rewrite in place,
//! so reads and writes are never interleaved: every operation holds the one
//! exclusive lock for its whole duration.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{MorseTree, MorseTreeResult};

/// Cloneable, lock-guarded Morse tree.
#[derive(Debug, Clone, Default)]
pub struct SharedMorseTree {
    inner: Arc<Mutex<MorseTree>>,
}

impl SharedMorseTree {
    /// Creates a handle over a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing tree.
    pub fn from_tree(tree: MorseTree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// See [`MorseTree::insert`].
    pub fn insert(&self, character: char) -> MorseTreeResult<&'static str> {
        self.inner.lock().insert(character)
    }

    /// See [`MorseTree::remove`].
    pub fn remove(&self, character: char) -> bool {
        self.inner.lock().remove(character)
    }

    /// See [`MorseTree::lookup`].
    pub fn lookup(&self, character: char) -> MorseTreeResult<String> {
        self.inner.lock().lookup(character)
    }

    /// See [`MorseTree::decode_symbol`].
    pub fn decode_symbol(&self, code: &str) -> MorseTreeResult<char> {
        self.inner.lock().decode_symbol(code)
    }

    /// See [`MorseTree::encode_word`].
    pub fn encode_word(&self, text: &str) -> MorseTreeResult<String> {
        self.inner.lock().encode_word(text)
    }

    /// See [`MorseTree::decode_word`].
    pub fn decode_word(&self, code: &str) -> MorseTreeResult<String> {
        self.inner.lock().decode_word(code)
    }

    /// See [`MorseTree::clear`].
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// See [`MorseTree::load_standard_alphabet`].
    pub fn load_standard_alphabet(&self) -> usize {
        self.inner.lock().load_standard_alphabet()
    }

    /// Runs `f` against the tree while holding the lock.
    ///
    /// Renderers use this to read a consistent view without copying.
    pub fn with_tree<R>(&self, f: impl FnOnce(&MorseTree) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Returns a deep copy of the current tree.
    pub fn snapshot(&self) -> MorseTree {
        self.inner.lock().clone()
    }
}
