// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! This module provides a prefix tree over strings with insertion, exact
//! membership lookup, prefix enumeration and deletion. Nodes live in an
//! arena and are addressed by index, so the parent back-reference used to
//! rebuild words never owns anything.

pub mod config;
mod error;
pub mod node;

use std::borrow::Cow;

use tracing::{debug, trace, warn};

pub use config::{NiihauTrieConfig, PruneStrategy};
pub use error::NiihauTrieError;
use node::{NodeArena, NodeId, TrieNode};

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is a prefix tree storing words one character per node.
///
/// Key features:
/// * Lazy node creation on insert, idempotent re-insertion
/// * Prefix enumeration in lexicographic order
/// * Deletion that demotes shared prefixes and detaches dead leaves
/// * Optional case-insensitive matching
///
/// The trie is single-threaded. Wrap it in a lock to share it.
///
/// # Examples
///
/// ```
/// use niihau_trie_lib::data_structures::niihau_trie::NiihauTrie;
///
/// let mut trie = NiihauTrie::new();
/// trie.insert("picked").unwrap();
/// trie.insert("pickled").unwrap();
///
/// assert!(trie.contains("picked"));
/// assert_eq!(trie.find_prefix("pick"), vec!["picked", "pickled"]);
///
/// assert!(trie.delete("picked"));
/// assert!(!trie.contains("picked"));
/// assert!(trie.contains("pickled"));
/// ```
#[derive(Debug, Clone)]
pub struct NiihauTrie {
    /// Node storage; the root sits at `NodeId::ROOT`
    arena: NodeArena,

    /// Configuration options
    config: NiihauTrieConfig,

    /// Number of words currently stored
    word_count: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            config,
            word_count: 0,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created; the node reached by the
    /// last character is marked as the end of a word. Inserting a word that
    /// is already present leaves the tree unchanged.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was newly added, `false` if it was already present.
    /// * `Err(NiihauTrieError)` - If the word is empty or longer than `max_depth`.
    pub fn insert<W>(&mut self, word: W) -> NiihauTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            warn!("Rejected insert of the empty word");
            return Err(NiihauTrieError::EmptyWord);
        }

        let processed = self.normalize(word);

        // Check depth limit before touching the tree
        let depth = processed.chars().count();
        if depth > self.config.max_depth {
            warn!(depth, max_depth = self.config.max_depth, "Rejected insert of over-long word");
            return Err(NiihauTrieError::WordTooLong {
                word: processed.into_owned(),
                max_depth: self.config.max_depth,
            });
        }

        let mut current = NodeId::ROOT;
        for c in processed.chars() {
            let existing = self.arena[current].children.get(&c).copied();
            current = match existing {
                Some(next) => next,
                None => {
                    let next = self.arena.allocate(TrieNode::new(c, current));
                    self.arena[current].children.insert(c, next);
                    next
                }
            };
        }

        let node = &mut self.arena[current];
        if node.end {
            trace!(word = %processed, "Word already present");
            return Ok(false);
        }

        node.end = true;
        self.word_count += 1;
        trace!(
            word = %processed,
            node = current.index(),
            words = self.word_count,
            "Inserted word"
        );

        Ok(true)
    }

    /// Checks if a word is stored in the trie.
    ///
    /// A word that only exists as a prefix of longer words is not contained.
    /// The empty word is never contained.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to check.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let processed = self.normalize(word.as_ref());
        self.locate(&processed)
            .is_some_and(|id| self.arena[id].end)
    }

    /// Finds all stored words that start with a given prefix.
    ///
    /// The prefix itself is included when it is a stored word. Words come
    /// back in ascending lexicographic order. The empty prefix returns every
    /// stored word.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    ///
    /// # Returns
    ///
    /// The matching words, or an empty vector if no stored word has the prefix.
    pub fn find_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let processed = self.normalize(prefix.as_ref());

        let Some(start) = self.locate(&processed) else {
            trace!(prefix = %processed, "Prefix not found");
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut path = processed.into_owned();

        // Entries carry the byte length of their parent's path. Popping in
        // pre-order keeps that path a prefix of `path`.
        let mut stack = vec![(start, path.len())];

        while let Some((id, parent_len)) = stack.pop() {
            path.truncate(parent_len);
            let node = &self.arena[id];

            if id != start {
                if let Some(key) = node.key {
                    path.push(key);
                }
            }

            if node.end {
                words.push(path.clone());
            }

            // Reverse push so the smallest key is popped first
            for &child in node.children.values().rev() {
                stack.push((child, path.len()));
            }
        }

        trace!(matches = words.len(), "Collected prefix matches");
        words
    }

    /// Removes a word from the trie.
    ///
    /// A terminal node that still has children is only unmarked, since other
    /// words run through it. A childless terminal node is detached from its
    /// parent; with [`PruneStrategy::Chain`] detaching continues upward
    /// through ancestors that are left childless and unmarked.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it was not stored.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let processed = self.normalize(word);
        let Some(id) = self.locate(&processed) else {
            trace!(word = %processed, "Delete of unknown word");
            return false;
        };

        if !self.arena[id].end || self.arena.word(id) != processed {
            trace!(word = %processed, "Delete target is not a stored word");
            return false;
        }

        self.word_count -= 1;

        if !self.arena[id].is_leaf() {
            self.arena[id].end = false;
            debug!(word = %processed, node = id.index(), "Demoted word to prefix node");
            return true;
        }

        let mut parent = self.detach(id);
        let mut pruned = 1usize;

        if self.config.prune == PruneStrategy::Chain {
            while let Some(candidate) = parent {
                let node = &self.arena[candidate];
                if node.is_root() || node.end || !node.is_leaf() {
                    break;
                }
                parent = self.detach(candidate);
                pruned += 1;
            }
        }

        debug!(
            word = %processed,
            pruned,
            words = self.word_count,
            "Detached deleted word"
        );

        true
    }

    /// Applies the configured case folding.
    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_lowercase())
        }
    }

    /// Walks from the root along `path`, returning the node it ends on.
    fn locate(&self, path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in path.chars() {
            current = *self.arena[current].children.get(&c)?;
        }
        Some(current)
    }

    /// Unlinks `id` from its parent and frees its slot, returning the parent.
    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.arena.release(id)?;
        let parent = node.parent?;
        if let Some(key) = node.key {
            self.arena[parent].children.remove(&key);
        }
        Some(parent)
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[cfg(test)]
    pub(crate) fn word_count(&self) -> usize {
        self.word_count
    }

    /// Checks structural invariants, returning a description of the first violation.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        let root = &self.arena[NodeId::ROOT];
        if root.end || root.key.is_some() || root.parent.is_some() {
            return Err("root must be unkeyed, parentless and unmarked".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        let mut terminals = 0usize;
        let mut reachable = 0usize;
        let mut stack = vec![NodeId::ROOT];

        while let Some(id) = stack.pop() {
            reachable += 1;
            let node = &self.arena[id];
            if node.end {
                terminals += 1;
            }
            if self.config.prune == PruneStrategy::Chain && !node.is_root() && !node.end && node.is_leaf() {
                return Err(format!("node {} is childless and unmarked", id.index()));
            }
            if !seen.insert(self.arena.word(id)) {
                return Err(format!("duplicate word for node {}", id.index()));
            }
            for (&c, &child) in &node.children {
                let child_node = &self.arena[child];
                if child_node.parent != Some(id) || child_node.key != Some(c) {
                    return Err(format!("child {} is not linked back to {}", child.index(), id.index()));
                }
                stack.push(child);
            }
        }

        if terminals != self.word_count {
            return Err(format!("{terminals} terminal nodes but {} words", self.word_count));
        }
        if reachable != self.arena.len() {
            return Err(format!("{reachable} reachable nodes but {} live", self.arena.len()));
        }

        Ok(())
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}
