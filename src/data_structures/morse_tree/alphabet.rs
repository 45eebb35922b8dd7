// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Standard International Morse alphabet and symbol definitions.

use fnv::FnvHashMap;
use once_cell::sync::Lazy;

/// Rendered form of a word boundary in encoded output.
pub const WORD_SEPARATOR: &str = " / ";

/// Token marking a word boundary in encoded input.
pub const WORD_SEPARATOR_TOKEN: &str = "/";

/// Longest code in the standard alphabet.
pub const MAX_CODE_LENGTH: usize = 5;

/// One Morse symbol, which is also one edge of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `.` descends to the left child
    Dot,
    /// `-` descends to the right child
    Dash,
}

impl Symbol {
    /// Parses a code character, returning `None` for anything but `.` or `-`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }

    /// The character this symbol is written as.
    pub fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }
}

/// Canonical codes for A-Z and 0-9, in bootstrap order.
pub static STANDARD_ALPHABET: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

static CODE_INDEX: Lazy<FnvHashMap<char, &'static str>> =
    Lazy::new(|| STANDARD_ALPHABET.iter().copied().collect());

/// Returns the standard code for `c`, ignoring case.
pub fn standard_code(c: char) -> Option<&'static str> {
    CODE_INDEX.get(&normalize(c)).copied()
}

/// Uppercases a single character.
///
/// Characters whose uppercase form is more than one character (such as `ß`)
/// are returned unchanged.
pub fn normalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
