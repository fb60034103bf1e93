// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Niihau Trie.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// How far `delete` prunes once a word's terminal node becomes childless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PruneStrategy {
    /// Detach only the terminal node itself. Ancestors that end up childless
    /// and unmarked stay in the tree.
    #[default]
    Leaf,

    /// Keep detaching upward while the parent is childless and unmarked.
    Chain,
}

/// Configuration for the Niihau Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiihauTrieConfig {
    /// Whether keys are matched case-sensitively
    pub case_sensitive: bool,

    /// Maximum number of characters in a stored word
    pub max_depth: usize,

    /// Pruning applied by `delete`
    pub prune: PruneStrategy,
}

impl NiihauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    /// - max_depth: 1024
    /// - prune: `PruneStrategy::Leaf`
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_depth: 1024,
            prune: PruneStrategy::Leaf,
        }
    }

    /// When disabled, every operation lowercases its input first.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum number of characters a stored word may have.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_prune_strategy(mut self, prune: PruneStrategy) -> Self {
        self.prune = prune;
        self
    }
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for NiihauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
