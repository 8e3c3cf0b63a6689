//! Thread-safe handle around a [`LanaiTrie`].
//!
//! Mutations take a single exclusive lock over the whole trie; lookups take
//! a shared lock and may run concurrently with each other.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LanaiTrie, LanaiTrieConfig, LanaiTrieResult};

/// Cloneable, lock-protected handle to a [`LanaiTrie`].
///
/// Clones share the same underlying trie.
#[derive(Debug, Clone, Default)]
pub struct SharedLanaiTrie {
    inner: Arc<RwLock<LanaiTrie>>,
}

impl SharedLanaiTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(LanaiTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self::from_trie(LanaiTrie::with_config(config))
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a key under the write lock. See [`LanaiTrie::insert`].
    pub fn insert<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.inner.write().insert(key)
    }

    /// Removes a key under the write lock. See [`LanaiTrie::remove`].
    pub fn remove<K: AsRef<[u8]>>(&self, key: K) -> LanaiTrieResult<()> {
        self.inner.write().remove(key)
    }

    /// Checks membership under a read lock.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.inner.read().contains(key)
    }

    /// Returns the tracked key count under a read lock.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks emptiness under a read lock.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Collects keys with `prefix` under a read lock.
    pub fn keys_with_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> Vec<Vec<u8>> {
        self.inner.read().keys_with_prefix(prefix)
    }

    /// Clears the trie under the write lock.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Runs `f` with shared access to the trie, holding the read lock for the
    /// whole call.
    pub fn with_read<R>(&self, f: impl FnOnce(&LanaiTrie) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the trie, holding the write lock for
    /// the whole call.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut LanaiTrie) -> R) -> R {
        f(&mut self.inner.write())
    }
}
