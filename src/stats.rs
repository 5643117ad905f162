//! Structural statistics for a [`RadixTrie`](crate::tree::RadixTrie).
//!
//! Useful for checking how well shared prefixes compress and for spotting degenerate
//! shapes while debugging.

use crate::node::Node;
use crate::partials::Partial;

pub trait TrieStatsTrait {
    fn get_trie_stats(&self) -> TrieStats;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieStats {
    pub num_strings: usize,
    /// Includes the root.
    pub num_nodes: usize,
    /// Labelled edges; sentinels are counted separately.
    pub num_edges: usize,
    pub num_leaf_edges: usize,
    pub num_sentinels: usize,
    pub max_height: usize,
    pub max_fanout: usize,
    pub total_label_bytes: usize,
}

/// Walks the subtree under `node` with an explicit stack, so chain depth is bounded only by
/// the heap.
pub(crate) fn update_trie_stats(stats: &mut TrieStats, node: &Node, height: usize) {
    let mut pending = vec![(node, height)];
    while let Some((node, height)) = pending.pop() {
        stats.num_nodes += 1;
        stats.max_height = stats.max_height.max(height);
        stats.max_fanout = stats.max_fanout.max(node.num_edges());

        for edge in node.edges.iter() {
            if edge.is_sentinel() {
                stats.num_sentinels += 1;
                stats.num_strings += 1;
                continue;
            }
            stats.num_edges += 1;
            stats.total_label_bytes += edge.label.len();
            match edge.child() {
                None => {
                    stats.num_leaf_edges += 1;
                    stats.num_strings += 1;
                }
                Some(child) => pending.push((child, height + 1)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;
    use crate::stats::{update_trie_stats, TrieStats};

    #[test]
    fn test_stats_shape() {
        let mut n = Node::new();
        for k in ["", "car", "card", "cat"] {
            n.add(k.as_bytes());
        }
        // root: "", "ca" -> { "r" -> { "", "d" }, "t" }
        let mut stats = TrieStats::default();
        update_trie_stats(&mut stats, &n, 1);
        assert_eq!(stats.num_strings, 4);
        assert_eq!(stats.num_nodes, 3);
        assert_eq!(stats.num_edges, 4);
        assert_eq!(stats.num_leaf_edges, 2);
        assert_eq!(stats.num_sentinels, 2);
        assert_eq!(stats.max_height, 3);
        assert_eq!(stats.max_fanout, 2);
        assert_eq!(stats.total_label_bytes, 5);
    }
}
