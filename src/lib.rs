//! Lanai Library
//!
//! This library contains the core components of Lanai: a byte-indexed prefix
//! tree, the word-list loader that populates it, and the configuration and
//! error layers shared with the `lanai` binary.
//!
//! # Architecture
//!
//! Lanai is designed with the following principles in mind:
//! - Strict component boundaries
//! - Explicit ownership: every trie node has exactly one owner
//! - Bounded stack usage: traversal and teardown never recurse
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
