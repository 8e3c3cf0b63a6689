//! Test modules for Lanai.
//!
//! This module contains the crate-internal test suite:
//! - Configuration loading and validation tests
//! - Error formatting and reporting tests
//! - Property-based trie tests using proptest
//! - Test fixtures and utilities


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{byte_key_strategy, key_set_strategy, word_strategy, TestFixture};
