use std::iter::FusedIterator;
use std::slice;

use crate::mapping::sorted_edge_mapping::Edge;
use crate::node::Node;
use crate::partials::Partial;

/// End offsets of stored strings that are prefixes of a probe, in increasing order.
///
/// Created by [`RadixTrie::matches`](crate::tree::RadixTrie::matches). Each call starts a
/// fresh walk from the root; at most one edge is followed per node.
pub struct PrefixMatches<'a, 'p> {
    node: Option<&'a Node>,
    probe: &'p [u8],
    offset: usize,
    sentinel_checked: bool,
}

impl<'a, 'p> PrefixMatches<'a, 'p> {
    pub(crate) fn new(root: &'a Node, probe: &'p [u8], offset: usize) -> Self {
        Self {
            node: Some(root),
            probe,
            offset,
            sentinel_checked: false,
        }
    }
}

impl<'a, 'p> Iterator for PrefixMatches<'a, 'p> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.node?;
            if !self.sentinel_checked {
                self.sentinel_checked = true;
                if node.is_terminal() {
                    return Some(self.offset);
                }
            }

            self.node = None;
            self.sentinel_checked = false;

            let rest = &self.probe[self.offset..];
            let edge = node.edges.seek_edge(*rest.first()?)?;
            if !edge.label.is_prefix_of(rest) {
                return None;
            }
            self.offset += edge.label.len();
            match &edge.child {
                None => return Some(self.offset),
                Some(child) => self.node = Some(child),
            }
        }
    }
}

impl FusedIterator for PrefixMatches<'_, '_> {}

/// All stored strings in lexicographic byte order.
pub struct Iter<'a> {
    stack: Vec<(slice::Iter<'a, Edge<Node>>, usize)>,
    key: Vec<u8>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root.edges.iter(), 0)],
            key: Vec::new(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (edge, depth) = {
                let (edges, depth) = self.stack.last_mut()?;
                match edges.next() {
                    Some(edge) => (edge, *depth),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            };

            self.key.truncate(depth);
            self.key.extend_from_slice(edge.label.to_slice());
            match &edge.child {
                None => return Some(self.key.clone()),
                Some(child) => self.stack.push((child.edges.iter(), self.key.len())),
            }
        }
    }
}

impl FusedIterator for Iter<'_> {}
