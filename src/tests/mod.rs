//! Test modules for the Morse tree.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//! - Property-based tests of the codec using proptest
//! - Shared strategies for the property tests

pub mod morse_tree_property_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    code_stream_strategy, supported_char_strategy, text_strategy, unsupported_char_strategy,
};
