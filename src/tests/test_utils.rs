//! Test utilities and fixtures for the Morse tree.
//!
//! Reusable proptest strategies for characters, text and code streams.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::data_structures::morse_tree::{standard_code, STANDARD_ALPHABET};

/// Maximum length of generated text.
const MAX_TEXT_LENGTH: usize = 40;

/// Strategy producing one character of the standard alphabet, in either case.
pub fn supported_char_strategy() -> BoxedStrategy<char> {
    (0..STANDARD_ALPHABET.len(), any::<bool>())
        .prop_map(|(index, lower)| {
            let c = STANDARD_ALPHABET[index].0;
            if lower {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .boxed()
}

/// Strategy producing a character outside the standard alphabet.
///
/// Characters that uppercase into the alphabet (such as `ı` or `ß`) are
/// excluded along with the space.
pub fn unsupported_char_strategy() -> BoxedStrategy<char> {
    any::<char>()
        .prop_filter("Character has a standard code", |c| {
            c.to_uppercase()
                .all(|u| u != ' ' && standard_code(u).is_none())
        })
        .boxed()
}

/// Strategy producing words of supported characters separated by single spaces.
pub fn text_strategy() -> BoxedStrategy<String> {
    r"[A-Za-z0-9]{1,8}( [A-Za-z0-9]{1,8}){0,4}"
        .prop_filter("Text too long", |s| s.len() <= MAX_TEXT_LENGTH)
        .boxed()
}

/// Strategy producing arbitrary strings of dots, dashes and spaces.
pub fn code_stream_strategy() -> BoxedStrategy<String> {
    r"[.\- /]{0,30}".boxed()
}
