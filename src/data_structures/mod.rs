//! Data structures for Lanai.
//!
//! This module contains the in-memory structures the rest of the crate is
//! built around. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Bounded stack usage: no recursion proportional to input size
//! - Strict ownership, no shared or back references between nodes

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{
    CountingMode, LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, SharedLanaiTrie,
};
