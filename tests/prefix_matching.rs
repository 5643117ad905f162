//! Property tests comparing `RadixTrie` against a naive list of stored strings.

use std::collections::BTreeSet;

use prefix_tree::{RadixTrie, TrieError, TrieStatsTrait};
use proptest::prelude::*;

// A small alphabet keeps shared prefixes, splits and duplicates frequent.
fn word() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..8)
}

fn words() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(word(), 0..40)
}

fn naive_find_all(stored: &BTreeSet<Vec<u8>>, probe: &[u8], offset: usize) -> Vec<usize> {
    let rest = &probe[offset..];
    stored
        .iter()
        .filter(|w| rest.starts_with(w))
        .map(|w| offset + w.len())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

proptest! {
    #[test]
    fn test_find_all_matches_naive_model(stored in words(), probe in word()) {
        let trie: RadixTrie = stored.iter().collect();
        let model: BTreeSet<Vec<u8>> = stored.into_iter().collect();

        for offset in 0..=probe.len() {
            let got = trie.find_all(&probe, offset);
            prop_assert_eq!(&got, &naive_find_all(&model, &probe, offset));
            for end in &got {
                prop_assert!(model.contains(&probe[offset..*end]));
            }
        }
    }

    #[test]
    fn test_exact_match_inclusion(stored in words()) {
        let trie: RadixTrie = stored.iter().collect();
        for w in &stored {
            prop_assert!(trie.find_all(w, 0).contains(&w.len()));
            prop_assert!(trie.contains(w));
        }
    }

    #[test]
    fn test_max_len_is_longest_string(stored in words()) {
        let trie: RadixTrie = stored.iter().collect();
        let expected = stored.iter().map(|w| w.len()).max().unwrap_or(0);
        prop_assert_eq!(trie.max_len(), expected);
    }

    #[test]
    fn test_offset_translation(stored in words(), probe in word()) {
        let trie: RadixTrie = stored.iter().collect();
        for k in 0..=probe.len() {
            let shifted: Vec<usize> = trie
                .find_all(&probe[k..], 0)
                .into_iter()
                .map(|end| end + k)
                .collect();
            prop_assert_eq!(trie.find_all(&probe, k), shifted);
        }
    }

    #[test]
    fn test_matches_agrees_with_find_all(stored in words(), probe in word()) {
        let trie: RadixTrie = stored.iter().collect();
        let lazy: Vec<usize> = trie.matches(&probe, 0).collect();
        prop_assert_eq!(&lazy, &trie.find_all(&probe, 0));
        // Restartable: a second walk sees the same offsets.
        prop_assert_eq!(trie.matches(&probe, 0).collect::<Vec<_>>(), lazy.clone());
        prop_assert_eq!(trie.longest_prefix(&probe, 0), lazy.last().copied());
    }

    #[test]
    fn test_double_insertion_is_idempotent(stored in words()) {
        let mut trie: RadixTrie = stored.iter().collect();
        let stats = trie.get_trie_stats();
        let rendered = trie.to_string();
        for w in &stored {
            prop_assert!(!trie.add(w));
        }
        prop_assert_eq!(trie.get_trie_stats(), stats);
        prop_assert_eq!(trie.to_string(), rendered);
    }

    #[test]
    fn test_iter_yields_sorted_distinct(stored in words()) {
        let trie: RadixTrie = stored.iter().collect();
        let model: BTreeSet<Vec<u8>> = stored.into_iter().collect();
        let keys: Vec<Vec<u8>> = trie.iter().collect();
        prop_assert_eq!(keys, model.iter().cloned().collect::<Vec<_>>());
        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.get_trie_stats().num_strings, model.len());
    }

    #[test]
    fn test_starts_with_matches_naive_model(stored in words(), prefix in word()) {
        let trie: RadixTrie = stored.iter().collect();
        let expected = stored.iter().any(|w| w.starts_with(&prefix));
        prop_assert_eq!(trie.starts_with(&prefix), expected);
    }

    #[test]
    fn test_try_find_all_rejects_offset_past_end(probe in word(), extra in 1usize..4) {
        let trie: RadixTrie = ["a", "b"].into_iter().collect();
        let offset = probe.len() + extra;
        prop_assert_eq!(
            trie.try_find_all(&probe, offset),
            Err(TrieError::OffsetOutOfRange { offset, len: probe.len() })
        );
    }
}

#[test]
fn test_common_prefix_scenario() {
    let mut trie = RadixTrie::new();
    trie.add("pre");
    trie.add("prefix");
    trie.add("prepare");
    assert_eq!(trie.find_all("prefix", 0), vec![3, 6]);

    let stats = trie.get_trie_stats();
    // "pre" -> { "", "fix", "pare" }: one shared edge instead of three copies of "pre".
    assert_eq!(stats.num_nodes, 2);
    assert_eq!(stats.total_label_bytes, 3 + 3 + 4);
}
