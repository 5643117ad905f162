use std::fmt;

use crate::error::{Result, TrieError};
use crate::iter::{Iter, PrefixMatches};
use crate::node::Node;
use crate::partials::key::Key;
use crate::stats::{update_trie_stats, TrieStats, TrieStatsTrait};

/// A compressed prefix tree answering "which stored strings are prefixes of this probe?".
///
/// Every node keeps its outgoing edges sorted by label, and no two labels of a node start
/// with the same byte, so a lookup follows at most one edge per node. Chains of single-child
/// nodes are collapsed into one multi-byte label, and edges along which only one string runs
/// carry no child node at all.
///
/// Keys and probes are matched as raw bytes; for `&str` this means UTF-8 bytes, and all
/// offsets are byte offsets.
///
/// ## Examples
///
/// ```rust
/// use prefix_tree::RadixTrie;
///
/// let mut trie = RadixTrie::new();
/// trie.add("cat");
/// trie.add("car");
/// trie.add("card");
///
/// assert_eq!(trie.find_all("card", 0), vec![3, 4]);
/// assert_eq!(trie.max_len(), 4);
/// assert!(trie.contains("car"));
/// assert!(!trie.contains("ca"));
/// ```
pub struct RadixTrie {
    root: Node,
    num_strings: usize,
}

impl Default for RadixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixTrie {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            num_strings: 0,
        }
    }

    /// Inserts `key`, splitting existing edges where needed.
    ///
    /// Returns `true` if the key was not already stored. Adding a stored key again leaves
    /// the trie unchanged.
    pub fn add<K: Key + ?Sized>(&mut self, key: &K) -> bool {
        let added = self.root.add(key.as_slice());
        if added {
            self.num_strings += 1;
        }
        added
    }

    /// Every end offset `offset + k` such that a stored string equals
    /// `probe[offset..offset + k]`, in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `offset > probe.len()`. Use [`try_find_all`](Self::try_find_all) to get an
    /// error instead.
    ///
    /// ```rust
    /// use prefix_tree::RadixTrie;
    ///
    /// let trie: RadixTrie = ["test"].into_iter().collect();
    /// assert_eq!(trie.find_all("xxtest", 2), vec![6]);
    /// ```
    pub fn find_all<K: Key + ?Sized>(&self, probe: &K, offset: usize) -> Vec<usize> {
        let mut result = Vec::new();
        self.find_all_into(probe, offset, &mut result);
        result
    }

    /// Like [`find_all`](Self::find_all), appending the offsets to `append_to`.
    pub fn find_all_into<K: Key + ?Sized>(
        &self,
        probe: &K,
        offset: usize,
        append_to: &mut Vec<usize>,
    ) {
        let probe = probe.as_slice();
        assert!(
            offset <= probe.len(),
            "offset {} is out of range for a probe of length {}",
            offset,
            probe.len()
        );
        append_to.extend(PrefixMatches::new(&self.root, probe, offset));
    }

    /// Like [`find_all`](Self::find_all), but reports an out of range offset as an error.
    pub fn try_find_all<K: Key + ?Sized>(&self, probe: &K, offset: usize) -> Result<Vec<usize>> {
        let len = probe.length();
        if offset > len {
            return Err(TrieError::OffsetOutOfRange { offset, len });
        }
        Ok(self.find_all(probe, offset))
    }

    /// Lazy form of [`find_all`](Self::find_all). Panics under the same condition.
    pub fn matches<'a, 'p, K: Key + ?Sized>(
        &'a self,
        probe: &'p K,
        offset: usize,
    ) -> PrefixMatches<'a, 'p> {
        let probe = probe.as_slice();
        assert!(
            offset <= probe.len(),
            "offset {} is out of range for a probe of length {}",
            offset,
            probe.len()
        );
        PrefixMatches::new(&self.root, probe, offset)
    }

    /// The end offset of the longest stored string matching at `offset`.
    pub fn longest_prefix<K: Key + ?Sized>(&self, probe: &K, offset: usize) -> Option<usize> {
        self.matches(probe, offset).last()
    }

    /// Length of the longest stored string, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.root.max_len()
    }

    pub fn contains<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.root.contains(key.as_slice())
    }

    /// Whether any stored string begins with `prefix`.
    pub fn starts_with<K: Key + ?Sized>(&self, prefix: &K) -> bool {
        self.root.starts_with(prefix.as_slice())
    }

    /// Number of distinct stored strings.
    pub fn len(&self) -> usize {
        self.num_strings
    }

    pub fn is_empty(&self) -> bool {
        self.num_strings == 0
    }

    /// Stored strings in lexicographic byte order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    pub fn print_tree(&self) {
        if self.root.edges.is_empty() {
            eprintln!("[]");
            return;
        }
        eprint!("{}", self);
    }
}

impl TrieStatsTrait for RadixTrie {
    fn get_trie_stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        update_trie_stats(&mut stats, &self.root, 1);
        stats
    }
}

/// One line per edge, indented two spaces per level; leaf edges end in `-`.
impl fmt::Display for RadixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_tree(f, 0)
    }
}

impl fmt::Debug for RadixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTrie")
            .field("len", &self.num_strings)
            .field("max_len", &self.max_len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a RadixTrie {
    type Item = Vec<u8>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key> Extend<K> for RadixTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(&key);
        }
    }
}

impl<K: Key> FromIterator<K> for RadixTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(iter);
        trie
    }
}
