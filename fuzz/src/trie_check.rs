#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use prefix_tree::{RadixTrie, TrieStatsTrait};

#[derive(Arbitrary, Debug)]
enum TrieMethod {
    Add { key: Vec<u8> },
    FindAll { probe: Vec<u8>, offset: usize },
    Contains { key: Vec<u8> },
    StartsWith { prefix: Vec<u8> },
}

fuzz_target!(|methods: Vec<TrieMethod>| {
    let mut trie = RadixTrie::new();
    let mut model = BTreeSet::<Vec<u8>>::new();

    for m in &methods {
        match m {
            TrieMethod::Add { key } => {
                let added = trie.add(key);
                assert_eq!(added, model.insert(key.clone()), "Add: {:?}", key);
            }
            TrieMethod::FindAll { probe, offset } => {
                let offset = offset % (probe.len() + 1);
                let expected: Vec<usize> = model
                    .iter()
                    .filter(|w| probe[offset..].starts_with(w))
                    .map(|w| offset + w.len())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect();
                assert_eq!(trie.find_all(probe, offset), expected, "FindAll: {:?}", probe);
            }
            TrieMethod::Contains { key } => {
                assert_eq!(trie.contains(key), model.contains(key), "Contains: {:?}", key);
            }
            TrieMethod::StartsWith { prefix } => {
                let expected = model.iter().any(|w| w.starts_with(prefix));
                assert_eq!(trie.starts_with(prefix), expected, "StartsWith: {:?}", prefix);
            }
        }
    }

    assert_eq!(trie.len(), model.len());
    assert_eq!(trie.get_trie_stats().num_strings, model.len());
    assert_eq!(
        trie.max_len(),
        model.iter().map(|k| k.len()).max().unwrap_or(0)
    );
    assert!(trie.iter().eq(model.iter().cloned()));
});
