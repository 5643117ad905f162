use std::fmt;

use tracing::trace;

use crate::mapping::sorted_edge_mapping::{Edge, SortedEdgeMapping};
use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;

pub(crate) struct Node {
    pub(crate) edges: SortedEdgeMapping<Node>,
}

impl Node {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            edges: SortedEdgeMapping::new(),
        }
    }

    /// A node standing in for a leaf edge being extended: the string that ended at the edge
    /// now ends here.
    #[inline]
    pub(crate) fn with_sentinel() -> Self {
        Self {
            edges: SortedEdgeMapping::with_sentinel(),
        }
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.edges.has_sentinel()
    }

    #[inline]
    pub(crate) fn num_edges(&self) -> usize {
        self.edges.num_edges()
    }

    /// Inserts `key` below this node. Returns false if it was already stored.
    pub(crate) fn add(&mut self, key: &[u8]) -> bool {
        let mut node = self;
        let mut key = key;
        loop {
            let Some(&first) = key.first() else {
                return node.edges.add_sentinel();
            };

            let Some(idx) = node.edges.position(first) else {
                node.edges.add_edge(Edge::leaf(VectorPartial::from_slice(key)));
                return true;
            };
            let edge = node.edges.edge_mut(idx);
            let common = edge.label.prefix_length_slice(key);

            if common < edge.label.len() {
                // Key ends inside the label or diverges from it: split at `common`.
                trace!(label = %edge.label, common, key_len = key.len(), "splitting edge");
                let mut split = Node::new();
                if common == key.len() {
                    split.edges.add_sentinel();
                }
                let old_child = edge.child.take();
                split
                    .edges
                    .add_edge(Edge::inner(edge.label.partial_after(common), old_child));
                if common < key.len() {
                    split
                        .edges
                        .add_edge(Edge::leaf(VectorPartial::from_slice(&key[common..])));
                }
                edge.label = edge.label.partial_before(common);
                edge.child = Some(Box::new(split));
                return true;
            }

            // Label fully consumed; continue below it.
            let rest = &key[common..];
            match edge.child {
                Some(ref mut child) => {
                    node = &mut **child;
                    key = rest;
                }
                None if rest.is_empty() => return false,
                None => {
                    trace!(label = %edge.label, rest_len = rest.len(), "extending leaf edge");
                    let mut child = Node::with_sentinel();
                    child
                        .edges
                        .add_edge(Edge::leaf(VectorPartial::from_slice(rest)));
                    edge.child = Some(Box::new(child));
                    return true;
                }
            }
        }
    }

    pub(crate) fn contains(&self, key: &[u8]) -> bool {
        let mut node = self;
        let mut key = key;
        loop {
            let Some(&first) = key.first() else {
                return node.is_terminal();
            };
            let Some(edge) = node.edges.seek_edge(first) else {
                return false;
            };
            if !edge.label.is_prefix_of(key) {
                return false;
            }
            key = &key[edge.label.len()..];
            match &edge.child {
                Some(child) => node = child,
                None => return key.is_empty(),
            }
        }
    }

    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        let mut node = self;
        let mut prefix = prefix;
        loop {
            let Some(&first) = prefix.first() else {
                return !node.edges.is_empty();
            };
            let Some(edge) = node.edges.seek_edge(first) else {
                return false;
            };
            let common = edge.label.prefix_length_slice(prefix);
            if common == prefix.len() {
                return true;
            }
            if common < edge.label.len() {
                return false;
            }
            prefix = &prefix[common..];
            match &edge.child {
                Some(child) => node = child,
                None => return false,
            }
        }
    }

    pub(crate) fn max_len(&self) -> usize {
        let mut longest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            for edge in node.edges.iter() {
                let end = depth + edge.label.len();
                match edge.child() {
                    Some(child) => pending.push((child, end)),
                    None => longest = longest.max(end),
                }
            }
        }
        longest
    }

    /// One line per edge in pre-order, indented two spaces per level below `depth`.
    pub(crate) fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let mut stack = vec![(self.edges.iter(), depth)];
        while let Some((edges, depth)) = stack.last_mut() {
            let depth = *depth;
            let Some(edge) = edges.next() else {
                stack.pop();
                continue;
            };
            let indent = "  ".repeat(depth);
            match edge.child() {
                None => writeln!(f, "{}{}: -", indent, edge.label)?,
                Some(child) => {
                    writeln!(f, "{}{}:", indent, edge.label)?;
                    stack.push((child.edges.iter(), depth + 1));
                }
            }
        }
        Ok(())
    }

    /// Panics if any structural invariant is broken below this node.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self, is_root: bool) {
        let mut pending = vec![(self, is_root)];
        while let Some((node, is_root)) = pending.pop() {
            if !is_root {
                assert!(
                    node.num_edges() >= 2,
                    "inner node holds a single continuation"
                );
            }
            let mut prev: Option<&VectorPartial> = None;
            for (i, edge) in node.edges.iter().enumerate() {
                if edge.is_sentinel() {
                    assert_eq!(i, 0, "sentinel not in first position");
                    assert!(edge.is_leaf(), "sentinel has a child");
                }
                if let Some(p) = prev {
                    assert!(p < &edge.label, "edges out of order");
                    if !p.is_empty() {
                        assert_ne!(p.at(0), edge.label.at(0), "edges share a first byte");
                    }
                }
                prev = Some(&edge.label);
                if let Some(child) = edge.child() {
                    pending.push((child, false));
                }
            }
        }
    }
}

// Children are torn down from a work list; the derived drop would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.edges.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.edges.take_children());
        }
    }
}
