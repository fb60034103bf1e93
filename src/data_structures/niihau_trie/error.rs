// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Niihau Trie.
//!
//! Only insertion can fail. Lookups, prefix enumeration and deletion report
//! absence through their return values instead.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum NiihauTrieError {
    /// The empty word cannot be stored; the root never terminates a word.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word has more characters than the configured depth limit.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NiihauTrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = NiihauTrieError::WordTooLong {
            word: "pickled".to_string(),
            max_depth: 4,
        };
        assert_eq!(err.to_string(), "Word 'pickled' exceeds maximum trie depth of 4");
    }

    #[test]
    fn test_error_equality() {
        let err1 = NiihauTrieError::WordTooLong { word: "abc".to_string(), max_depth: 2 };
        let err2 = NiihauTrieError::WordTooLong { word: "abc".to_string(), max_depth: 2 };

        assert_eq!(err1, err2);
        assert_ne!(err1, NiihauTrieError::EmptyWord);
    }
}
