// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error types for the Morse tree.
//!
//! Single-item operations fail fast with [`MorseTreeError::NotSupported`] or
//! [`MorseTreeError::NotFound`]. Word-level operations collect every offending
//! token before failing, so their variants carry the full ordered list.

use std::fmt::Display;

/// Errors that can occur in Morse tree operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum MorseTreeError {
    /// The character has no entry in the standard alphabet table.
    #[error("character '{0}' has no standard Morse code")]
    NotSupported(char),

    /// A single character or code is absent from the tree.
    #[error("'{0}' not found in the tree")]
    NotFound(String),

    /// Characters that could not be encoded, in input order.
    #[error("the following characters are not in the tree: {}", join(.0))]
    UnknownCharacters(Vec<char>),

    /// Codes that could not be decoded, in input order.
    #[error("the following codes are not in the tree: {}", join(.0))]
    UnknownCodes(Vec<String>),
}

/// Result type for Morse tree operations
pub type MorseTreeResult<T> = std::result::Result<T, MorseTreeError>;

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MorseTreeError::NotSupported('@');
        assert_eq!(err.to_string(), "character '@' has no standard Morse code");

        let err = MorseTreeError::NotFound("..--..".to_string());
        assert_eq!(err.to_string(), "'..--..' not found in the tree");

        let err = MorseTreeError::UnknownCharacters(vec!['@', '#']);
        assert_eq!(
            err.to_string(),
            "the following characters are not in the tree: @, #"
        );

        let err = MorseTreeError::UnknownCodes(vec!["..--..".to_string()]);
        assert_eq!(
            err.to_string(),
            "the following codes are not in the tree: ..--.."
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = MorseTreeError::NotFound("E".to_string());
        let err2 = MorseTreeError::NotFound("E".to_string());
        let err3 = MorseTreeError::NotSupported('E');

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
