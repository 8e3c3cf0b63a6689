// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node is a branching point with one child slot per possible byte value
//! and a terminal flag. Nodes own their children exclusively, so the trie is a
//! strict tree with no shared or back references.

use std::collections::VecDeque;
use std::fmt;

/// Number of child slots per node, one for every byte value.
pub const FANOUT: usize = 256;

/// A node in the Lanai Trie.
pub struct TrieNode {
    /// Child slots indexed by byte value
    children: [Option<Box<TrieNode>>; FANOUT],

    /// Whether the path from the root to this node spells a stored key
    pub terminal: bool,
}

impl TrieNode {
    /// Creates a new node with every child slot empty and `terminal = false`.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            terminal: false,
        }
    }

    /// Returns the child for `byte`, if present.
    #[inline]
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children[byte as usize].as_deref()
    }

    /// Returns the child for `byte` mutably, if present.
    #[inline]
    pub fn child_mut(&mut self, byte: u8) -> Option<&mut TrieNode> {
        self.children[byte as usize].as_deref_mut()
    }

    /// Returns the child for `byte`, allocating it first when absent.
    ///
    /// The second element of the tuple is `true` when a node was allocated.
    pub fn child_or_insert(&mut self, byte: u8) -> (&mut TrieNode, bool) {
        let slot = &mut self.children[byte as usize];
        let created = slot.is_none();
        let child = slot.get_or_insert_with(|| Box::new(TrieNode::new()));
        (&mut **child, created)
    }

    /// Detaches and returns the subtree rooted at the child for `byte`.
    pub fn take_child(&mut self, byte: u8) -> Option<Box<TrieNode>> {
        self.children[byte as usize].take()
    }

    /// Whether any child slot is occupied.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Number of occupied child slots.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over the occupied slots in ascending byte order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (u8, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_deref().map(|node| (i as u8, node)))
    }

    /// A node that is neither terminal nor has children serves no key.
    pub fn is_dead(&self) -> bool {
        !self.terminal && !self.has_children()
    }

    /// Frees every descendant of this node breadth-first and returns how many
    /// nodes were released. The node itself is left childless.
    pub fn release_descendants(&mut self) -> usize {
        let mut queue: VecDeque<Box<TrieNode>> = VecDeque::new();
        queue.extend(self.children.iter_mut().filter_map(Option::take));

        let mut released = 0;
        while let Some(mut node) = queue.pop_front() {
            queue.extend(node.children.iter_mut().filter_map(Option::take));
            // `node` is childless here, so dropping it does not recurse.
            drop(node);
            released += 1;
        }
        released
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrieNode {
    // Only the occupied slots of this level; descending would print the whole tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: Vec<u8> = self.children().map(|(b, _)| b).collect();
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &bytes)
            .finish()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        if self.has_children() {
            self.release_descendants();
        }
    }
}
