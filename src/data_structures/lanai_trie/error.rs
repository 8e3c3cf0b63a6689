//! Error types for Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// The key is not stored in the trie.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The missing key, rendered lossily as UTF-8.
        key: String,
    },
}

impl LanaiTrieError {
    /// Builds a [`LanaiTrieError::KeyNotFound`] from raw key bytes.
    pub fn key_not_found(key: &[u8]) -> Self {
        Self::KeyNotFound {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }
}
