// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Lanai Trie public API.

use std::fs;
use std::thread;

use lanai_lib::config::wordlist::WordListConfig;
use lanai_lib::data_structures::{
    CountingMode, LanaiTrie, LanaiTrieConfig, LanaiTrieError, SharedLanaiTrie,
};
use lanai_lib::wordlist::WordListLoader;

/// A fresh trie is empty and contains nothing.
#[test]
fn test_fresh_trie() {
    let trie = LanaiTrie::default();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    for probe in ["", "a", "anything", "\u{0}"] {
        assert!(!trie.contains(probe));
    }
}

#[test]
fn test_scenario_single_word() {
    let mut trie = LanaiTrie::new();
    trie.insert("rust");
    assert!(trie.contains("rust"));
    assert!(!trie.contains("rus"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_scenario_remove_prefix_word() {
    let mut trie = LanaiTrie::new();
    trie.insert("go");
    trie.insert("goal");
    trie.remove("go").unwrap();
    assert!(trie.contains("goal"));
    assert!(!trie.contains("go"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_scenario_remove_from_empty() {
    let mut trie = LanaiTrie::new();
    let err = trie.remove("missing").unwrap_err();
    assert_eq!(
        err,
        LanaiTrieError::KeyNotFound {
            key: "missing".to_string()
        }
    );
    assert_eq!(trie.len(), 0);
}

/// A failed removal leaves every query result unchanged.
#[test]
fn test_failed_remove_has_no_effect() {
    let mut trie: LanaiTrie = ["cat", "car", "cart"].into_iter().collect();
    let nodes = trie.node_count();

    assert!(trie.remove("cab").is_err());
    assert!(trie.remove("ca").is_err());
    assert!(trie.remove("carts").is_err());

    assert_eq!(trie.len(), 3);
    assert_eq!(trie.node_count(), nodes);
    assert!(trie.contains("cat") && trie.contains("car") && trie.contains("cart"));
}

/// Literal counting keeps the reference accounting, including under-counting
/// when a stored prefix path is removed.
#[test]
fn test_literal_counting_mode() {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig {
        counting: CountingMode::Literal,
    });
    trie.insert("goal");
    trie.insert("goal");
    assert_eq!(trie.len(), 2);

    trie.remove("go").unwrap();
    assert_eq!(trie.len(), 1);
    assert!(trie.contains("goal"));
}

/// Deep and wide tries are torn down without exhausting the stack.
#[test]
fn test_teardown_on_small_stack() {
    let handle = thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let mut trie = LanaiTrie::new();
            let deep: Vec<u8> = (0..20_000u32).map(|i| (i % 256) as u8).collect();
            trie.insert(&deep);
            for a in 0..=255u8 {
                for b in (0..=255u8).step_by(17) {
                    trie.insert([a, b, 0x00, 0xFF]);
                }
            }
            let nodes = trie.node_count();
            assert!(trie.contains(&deep));

            // Removal detaches the whole deep chain at once.
            trie.remove(&deep).unwrap();
            assert_eq!(trie.node_count(), nodes - (deep.len() - 1));
            drop(trie);
        })
        .unwrap();
    handle.join().unwrap();
}

/// Word lists loaded from disk feed a shared trie readable from many threads.
#[test]
fn test_wordlist_into_shared_trie() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("artists.txt");
    fs::write(&path, "Kendrick Lamar & SZA\nShreya Ghoshal;Arijit Singh\n").unwrap();

    let mut trie = LanaiTrie::new();
    let report = WordListLoader::new(WordListConfig::default())
        .load_sources(&mut trie, &[&path])
        .unwrap();
    assert_eq!(report.files, 1);
    assert_eq!(report.entries, 4);

    let shared = SharedLanaiTrie::from_trie(trie);
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                assert!(shared.contains("SZA"));
                assert!(shared.contains("Arijit Singh"));
                assert!(!shared.contains("Arijit"));
            })
        })
        .collect();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(
        shared.keys_with_prefix("S"),
        vec![b"SZA".to_vec(), b"Shreya Ghoshal".to_vec()]
    );
}
