//! Data structures for the Morse tree codec.
//!
//! The only structure here is the Morse tree itself; everything else in the
//! crate (menu, renderer, command line) consumes its public API.

pub mod morse_tree;

// Re-export common data structures
pub use morse_tree::{
    MorseNode, MorseNodeView, MorseTree, MorseTreeError, MorseTreeResult, SharedMorseTree, Symbol,
};
