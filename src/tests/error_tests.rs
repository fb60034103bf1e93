//! Tests for the error module.
//!
//! This module contains tests for error conversion and display.

use crate::data_structures::niihau_trie::{NiihauTrie, NiihauTrieConfig, NiihauTrieError};
use crate::error::config::ConfigError;
use crate::error::{NiihauError, NiihauResult};
use std::path::PathBuf;

fn insert_all(trie: &mut NiihauTrie, words: &[&str]) -> NiihauResult<usize> {
    let mut added = 0;
    for word in words {
        if trie.insert(word)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Test that trie errors propagate through `?` into the crate error.
#[test]
fn test_trie_error_propagation() {
    let mut trie = NiihauTrie::with_config(NiihauTrieConfig::new().with_max_depth(5));

    assert_eq!(insert_all(&mut trie, &["peter", "piper", "peter"]).unwrap(), 2);

    let err = insert_all(&mut trie, &["pepper", "pickled"]).unwrap_err();
    assert!(matches!(
        err,
        NiihauError::Trie(NiihauTrieError::WordTooLong { ref word, max_depth: 5 }) if word == "pepper"
    ));

    let err = insert_all(&mut trie, &[""]).unwrap_err();
    assert!(matches!(err, NiihauError::Trie(NiihauTrieError::EmptyWord)));
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_error_display() {
    let err = NiihauError::from(ConfigError::FileNotFound(PathBuf::from("niihau.toml")));
    assert_eq!(
        err.to_string(),
        "Configuration error: Configuration file not found: niihau.toml"
    );

    let err = NiihauError::from(NiihauTrieError::EmptyWord);
    assert_eq!(err.to_string(), "Trie error: Empty word not allowed");

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = NiihauError::from(io_error);
    assert!(err.to_string().contains("file not found"));
}

/// Test that a second logging initialization is reported, not panicked on.
#[test]
fn test_double_logging_init_is_an_error() {
    let config = crate::config::LogConfig::default();

    // Another test may have installed a subscriber already; either way the
    // second call must fail cleanly.
    let _ = crate::init_logging(&config);
    let result = crate::init_logging(&config);
    assert!(matches!(result, Err(NiihauError::Logging(_))));
}
