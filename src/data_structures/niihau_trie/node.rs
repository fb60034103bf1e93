// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by [`NodeId`].
//! A parent owns its children through its `children` map; the `parent`
//! index on a child is only a back-reference used to rebuild words.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the Niihau Trie.
///
/// Each node represents a single character on the path of one or more
/// stored words.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Character this node represents; `None` only for the root
    pub key: Option<char>,

    /// Back-reference to the owning node; `None` only for the root
    pub parent: Option<NodeId>,

    /// Map of characters to child nodes
    pub children: BTreeMap<char, NodeId>,

    /// Whether a stored word ends exactly here
    pub end: bool,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            key: None,
            parent: None,
            children: BTreeMap::new(),
            end: false,
        }
    }

    /// Creates a node for `key` hanging off `parent`.
    pub fn new(key: char, parent: NodeId) -> Self {
        Self {
            key: Some(key),
            parent: Some(parent),
            children: BTreeMap::new(),
            end: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Slot storage for trie nodes with a free list for reuse.
///
/// Slot 0 holds the root and is never released.
#[derive(Debug, Clone)]
pub struct NodeArena {
    slots: Vec<Option<TrieNode>>,
    free_list: Vec<usize>,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(TrieNode::root())],
            free_list: Vec::new(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Stores `node`, reusing a freed slot when one is available.
    pub fn allocate(&mut self, node: TrieNode) -> NodeId {
        match self.free_list.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Empties the slot at `id` and returns the node it held.
    ///
    /// The caller is responsible for detaching the node from its parent
    /// first. Releasing the root is a no-op returning `None`.
    pub fn release(&mut self, id: NodeId) -> Option<TrieNode> {
        if id == NodeId::ROOT {
            return None;
        }
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        Some(node)
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Rebuilds the word spelled by the path from the root to `id`.
    ///
    /// The root contributes no character, so `word(NodeId::ROOT)` is empty.
    /// Unknown ids also yield an empty string.
    pub fn word(&self, id: NodeId) -> String {
        let mut keys = Vec::new();
        let mut current = self.get(id);

        while let Some(node) = current {
            if let Some(key) = node.key {
                keys.push(key);
            }
            current = node.parent.and_then(|parent| self.get(parent));
        }

        keys.iter().rev().collect()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct slot access for ids known to be live.
///
/// # Panics
///
/// Panics if `id` refers to a released slot.
impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &TrieNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {} was released", id.0),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {} was released", id.0),
        }
    }
}
