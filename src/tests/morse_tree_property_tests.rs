//! Property-based tests for the Morse tree codec.

use proptest::prelude::*;

use super::{
    code_stream_strategy, supported_char_strategy, text_strategy, unsupported_char_strategy,
};
use crate::data_structures::morse_tree::normalize;
use crate::data_structures::{MorseTree, MorseTreeError};

proptest! {
    // Property: the code returned by insert decodes back to the uppercased character
    #[test]
    fn prop_insert_then_decode(c in supported_char_strategy()) {
        let mut tree = MorseTree::new();
        let code = tree.insert(c).unwrap();
        prop_assert_eq!(tree.decode_symbol(code).unwrap(), normalize(c));
        prop_assert_eq!(tree.lookup(c).unwrap(), code);
    }

    // Property: inserting twice changes nothing the second time
    #[test]
    fn prop_insert_is_idempotent(c in supported_char_strategy()) {
        let mut tree = MorseTree::new();
        let first = tree.insert(c).unwrap();
        let snapshot = tree.clone();
        let second = tree.insert(c).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(tree, snapshot);
    }

    // Property: unsupported characters are rejected without touching the tree
    #[test]
    fn prop_unsupported_insert_is_rejected(c in unsupported_char_strategy()) {
        let mut tree = MorseTree::with_standard_alphabet();
        let before = tree.clone();
        prop_assert_eq!(tree.insert(c), Err(MorseTreeError::NotSupported(normalize(c))));
        prop_assert_eq!(tree, before);
    }

    // Property: encoding then decoding restores the uppercased text
    #[test]
    fn prop_word_round_trip(text in text_strategy()) {
        let tree = MorseTree::with_standard_alphabet();
        let encoded = tree.encode_word(&text).unwrap();
        prop_assert_eq!(encoded.matches(" / ").count(), text.matches(' ').count());
        prop_assert_eq!(tree.decode_word(&encoded).unwrap(), text.to_uppercase());
    }

    // Property: one bad character anywhere fails the whole encoding and is named once
    #[test]
    fn prop_encode_names_bad_character(
        text in text_strategy(),
        bad in unsupported_char_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let tree = MorseTree::with_standard_alphabet();
        let mut chars: Vec<char> = text.chars().collect();
        chars.insert(position.index(chars.len() + 1), bad);
        let input: String = chars.into_iter().collect();

        let err = tree.encode_word(&input).unwrap_err();
        let expected: Vec<char> = bad.to_uppercase().collect();
        prop_assert_eq!(err, MorseTreeError::UnknownCharacters(expected));
    }

    // Property: decoding arbitrary symbol streams never panics, and whatever
    // decodes successfully re-encodes to something that decodes the same way
    #[test]
    fn prop_decode_is_total(code in code_stream_strategy()) {
        let tree = MorseTree::with_standard_alphabet();
        match tree.decode_word(&code) {
            Ok(decoded) => {
                let encoded = tree.encode_word(&decoded).unwrap();
                prop_assert_eq!(tree.decode_word(&encoded).unwrap(), decoded);
            }
            Err(MorseTreeError::UnknownCodes(codes)) => {
                prop_assert!(!codes.is_empty());
                for c in codes {
                    prop_assert!(code.contains(c.as_str()));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    // Property: removal hides exactly one character and keeps the structure
    #[test]
    fn prop_remove_keeps_structure(c in supported_char_strategy()) {
        let mut tree = MorseTree::with_standard_alphabet();
        let nodes = tree.node_count();

        prop_assert!(tree.remove(c));
        prop_assert_eq!(
            tree.lookup(c),
            Err(MorseTreeError::NotFound(normalize(c).to_string()))
        );
        prop_assert_eq!(tree.node_count(), nodes);
        prop_assert_eq!(tree.len(), 35);
        prop_assert_eq!(tree.decode_symbol("-----").is_ok(), normalize(c) != '0');
    }
}
