//! Data structures for the Niihau Trie crate.

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult, PruneStrategy};
