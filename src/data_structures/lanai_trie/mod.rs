// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! A byte-indexed prefix tree storing a set of keys treated as arbitrary byte
//! sequences. Every node carries a fixed 256-slot child table, so child lookup
//! is a single array index and keys may contain any byte value, including
//! `0x00` and `0xFF`.
//!
//! # Features
//!
//! - O(L) `insert`, `remove` and `contains` in the key length, independent of
//!   how many keys are stored.
//! - Removal compacts the tree: nodes left with no children and no terminal
//!   flag are reclaimed, while prefixes shared with other keys survive.
//! - Teardown and traversal never recurse, so deep keys cannot exhaust the
//!   call stack.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("rust");
//!
//! assert!(trie.contains("rust"));
//! assert!(!trie.contains("rus"));
//! assert_eq!(trie.len(), 1);
//!
//! trie.remove("rust").unwrap();
//! assert!(trie.is_empty());
//! assert!(trie.remove("rust").is_err());
//! ```
//!
//! The trie has no interior synchronization. Use [`SharedLanaiTrie`] when
//! several threads need access.

mod error;
pub mod node;
mod shared;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use error::LanaiTrieError;
pub use shared::SharedLanaiTrie;
use node::TrieNode;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// How the trie accounts for duplicate inserts and non-terminal removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    /// Count distinct stored keys. Re-inserting a stored key leaves the count
    /// unchanged, and removing a key that is only a prefix of stored keys
    /// fails with [`LanaiTrieError::KeyNotFound`].
    #[default]
    Distinct,

    /// Count every call. Each `insert` increments, and each `remove` whose
    /// byte path exists decrements (saturating at zero) whether or not the
    /// key was stored.
    Literal,
}

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanaiTrieConfig {
    /// Counting policy for `len`
    pub counting: CountingMode,
}

/// Lanai Trie is a byte-indexed prefix tree over arbitrary byte-sequence keys.
pub struct LanaiTrie {
    /// The root node, representing the empty prefix
    root: Box<TrieNode>,

    /// Number of stored keys, as accounted by the counting mode
    len: usize,

    /// Number of live nodes, root included
    node_count: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: Box::new(TrieNode::new()),
            len: 0,
            node_count: 1,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a key into the trie.
    ///
    /// Missing nodes along the key's byte path are allocated, one per byte.
    /// Any byte sequence is accepted, including the empty one.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    ///
    /// # Returns
    ///
    /// `true` if the key was not already stored, `false` otherwise.
    pub fn insert<K>(&mut self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        let mut created = 0;

        let mut node: &mut TrieNode = &mut self.root;
        for &byte in key {
            let (child, allocated) = node.child_or_insert(byte);
            created += usize::from(allocated);
            node = child;
        }

        let is_new = !node.terminal;
        node.terminal = true;

        self.node_count += created;
        if is_new || self.config.counting == CountingMode::Literal {
            self.len += 1;
        }

        trace!(key_len = key.len(), created, is_new, "Inserted key");
        is_new
    }

    /// Removes a key from the trie and reclaims the nodes only it was using.
    ///
    /// Walking back from the key's final node toward the root, every node
    /// that has no other child and is not terminal is freed; the first node
    /// that still serves another key stops the compaction. The root is never
    /// freed.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The key was removed.
    /// * `Err(LanaiTrieError::KeyNotFound)` - The key's byte path does not
    ///   exist (or, in [`CountingMode::Distinct`], the key is only a prefix of
    ///   stored keys). The trie is left untouched.
    pub fn remove<K>(&mut self, key: K) -> LanaiTrieResult<()>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();

        // Find the deepest node on the path that must survive compaction.
        let mut node: &TrieNode = &self.root;
        let mut keep_depth = 0;
        for (depth, &byte) in key.iter().enumerate() {
            if depth > 0 && (node.terminal || node.child_count() > 1) {
                keep_depth = depth;
            }
            node = match node.child(byte) {
                Some(child) => child,
                None => {
                    debug!(key_len = key.len(), depth, "Remove found no path for key");
                    return Err(LanaiTrieError::key_not_found(key));
                }
            };
        }

        let was_terminal = node.terminal;
        if node.has_children() {
            keep_depth = key.len();
        }

        if !was_terminal && self.config.counting == CountingMode::Distinct {
            debug!(key_len = key.len(), "Remove target is not a stored key");
            return Err(LanaiTrieError::key_not_found(key));
        }

        let freed = if keep_depth == key.len() {
            let leaf = self
                .descend_mut(key)
                .ok_or_else(|| LanaiTrieError::key_not_found(key))?;
            leaf.terminal = false;
            0
        } else {
            let parent = self
                .descend_mut(&key[..keep_depth])
                .ok_or_else(|| LanaiTrieError::key_not_found(key))?;
            // The detached chain holds exactly the nodes below `keep_depth`.
            drop(parent.take_child(key[keep_depth]));
            key.len() - keep_depth
        };

        self.node_count -= freed;
        self.len = self.len.saturating_sub(1);

        debug!(key_len = key.len(), freed, keep_depth, "Removed key");
        Ok(())
    }

    /// Checks if a key is stored in the trie.
    ///
    /// A key that is only a prefix of stored keys is not contained.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.descend(key.as_ref()).map_or(false, |node| node.terminal)
    }

    /// Returns the number of stored keys as tracked by the counting mode.
    ///
    /// This is an O(1) counter, not a traversal.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Finds all stored keys starting with `prefix`, in ascending byte order.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for. The empty prefix matches every key.
    pub fn keys_with_prefix<P>(&self, prefix: P) -> Vec<Vec<u8>>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        let mut result = Vec::new();

        let Some(start) = self.descend(prefix) else {
            return result;
        };

        // Pre-order walk with an explicit stack; children are pushed in
        // reverse so the smallest byte is visited first.
        let mut stack: Vec<(Vec<u8>, &TrieNode)> = vec![(prefix.to_vec(), start)];
        while let Some((path, node)) = stack.pop() {
            if node.terminal {
                result.push(path.clone());
            }
            for (byte, child) in node.children().rev() {
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(byte);
                stack.push((child_path, child));
            }
        }

        result
    }

    /// Removes every key, releasing all nodes except the root.
    pub fn clear(&mut self) {
        let released = self.root.release_descendants();
        self.root.terminal = false;
        self.len = 0;
        self.node_count = 1;
        debug!(released, "Cleared trie");
    }

    /// Follows the byte path of `key` from the root without allocating.
    fn descend(&self, key: &[u8]) -> Option<&TrieNode> {
        let mut node: &TrieNode = &self.root;
        for &byte in key {
            node = node.child(byte)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`Self::descend`].
    fn descend_mut(&mut self, key: &[u8]) -> Option<&mut TrieNode> {
        let mut node: &mut TrieNode = &mut self.root;
        for &byte in key {
            node = node.child_mut(byte)?;
        }
        Some(node)
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LanaiTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrie")
            .field("len", &self.len)
            .field("node_count", &self.node_count)
            .field("config", &self.config)
            .finish()
    }
}

impl Drop for LanaiTrie {
    fn drop(&mut self) {
        // The root's own Drop drains the tree breadth-first.
        trace!(nodes = self.node_count, "Releasing trie");
    }
}

impl<K: AsRef<[u8]>> Extend<K> for LanaiTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
