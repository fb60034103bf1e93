// Copyright (c) 2025 Niihau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Niihau Trie.
//! Exercises the trie through the public API only, the way an embedding
//! crate would.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};
use std::thread;

use niihau_trie_lib::config::ConfigLoader;
use niihau_trie_lib::data_structures::{NiihauTrie, NiihauTrieConfig, NiihauTrieError, PruneStrategy};

fn set_of(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_trie_basic() {
    let mut trie = NiihauTrie::new();

    for word in ["peter", "piper", "picked", "pickled", "pepper", "peppez"] {
        assert!(trie.insert(word).unwrap());
    }

    assert!(trie.contains("picked"));
    assert!(trie.contains("pepper"));
    assert!(!trie.contains("pick"));

    assert!(trie.delete("pepper"));
    assert!(!trie.contains("pepper"));
    assert!(!trie.delete("peppe"));

    let pi: BTreeSet<String> = trie.find_prefix("pi").into_iter().collect();
    assert_eq!(pi, set_of(&["picked", "pickled", "piper"]));

    let pe: BTreeSet<String> = trie.find_prefix("pe").into_iter().collect();
    assert_eq!(pe, set_of(&["peter", "peppez"]));
}

#[test]
fn test_empty_prefix_lists_each_word_once() {
    let mut trie = NiihauTrie::default();
    for word in ["b", "a", "ab", "ba", "a"] {
        trie.insert(word).unwrap();
    }

    assert_eq!(trie.find_prefix(""), vec!["a", "ab", "b", "ba"]);
}

#[test]
fn test_rejected_inserts() {
    let mut trie = NiihauTrie::with_config(NiihauTrieConfig::new().with_max_depth(3));

    assert_eq!(trie.insert(""), Err(NiihauTrieError::EmptyWord));
    assert!(matches!(
        trie.insert("pipe"),
        Err(NiihauTrieError::WordTooLong { max_depth: 3, .. })
    ));
    assert!(trie.find_prefix("").is_empty());
}

#[test]
fn test_unicode_words() {
    let mut trie = NiihauTrie::new();
    trie.insert("café").unwrap();
    trie.insert("cafés").unwrap();
    trie.insert("日本").unwrap();

    assert!(trie.contains("café"));
    assert!(!trie.contains("cafe"));
    assert_eq!(trie.find_prefix("caf"), vec!["café", "cafés"]);
    assert_eq!(trie.find_prefix("日"), vec!["日本"]);

    assert!(trie.delete("café"));
    assert_eq!(trie.find_prefix("caf"), vec!["cafés"]);
}

#[test]
fn test_config_file_drives_trie() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("niihau.toml");
    std::fs::write(&path, "[trie]\ncase_sensitive = false\nprune = \"chain\"\n").unwrap();

    let config = ConfigLoader::new(Some(&path), "NIIHAU_INTEGRATION").load().unwrap();
    assert_eq!(config.trie.prune, PruneStrategy::Chain);

    let mut trie = NiihauTrie::with_config(config.trie);
    trie.insert("Pickled").unwrap();
    assert_eq!(trie.find_prefix("PICK"), vec!["pickled"]);
    assert!(trie.delete("PICKLED"));
    assert!(trie.find_prefix("").is_empty());
}

/// The trie carries no locks of its own; callers serialize access.
#[test]
fn test_external_lock_sharing() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 50;

    let trie = Arc::new(RwLock::new(NiihauTrie::new()));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for j in 0..WORDS_PER_THREAD {
                    let word = format!("word_{thread_id}_{j}");
                    trie.write().unwrap().insert(&word).unwrap();
                    assert!(trie.read().unwrap().contains(&word));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let trie = trie.read().unwrap();
    assert_eq!(trie.find_prefix("word_").len(), THREAD_COUNT * WORDS_PER_THREAD);
    assert_eq!(trie.find_prefix("word_0_").len(), WORDS_PER_THREAD);
}
