//! Morse Tree Library
//!
//! An International Morse Code codec built on a binary prefix tree. A dot
//! descends to the left child and a dash to the right, so every code is a path
//! from the root and every character sits at the end of its code.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the tree and its codec operations. It is the
//!   only part with real logic.
//! - [`render`] and [`menu`] are consumers of the tree's public API: the
//!   renderer reads nodes through a read-only view, the menu drives the codec
//!   from text input.
//! - [`config`] and [`error`] carry the application-level settings and errors.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod menu;
pub mod render;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Morse tree.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
