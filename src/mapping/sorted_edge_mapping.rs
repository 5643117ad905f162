use std::cmp::Ordering;

use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;

/// One outgoing edge. `child` is `None` for a leaf edge, where exactly one stored string
/// ends at the end of `label`.
pub struct Edge<N> {
    pub(crate) label: VectorPartial,
    pub(crate) child: Option<Box<N>>,
}

impl<N> Edge<N> {
    pub fn leaf(label: VectorPartial) -> Self {
        Self { label, child: None }
    }

    pub fn inner(label: VectorPartial, child: Option<Box<N>>) -> Self {
        Self { label, child }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.label.is_empty()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }

    #[inline]
    pub fn child(&self) -> Option<&N> {
        self.child.as_deref()
    }
}

/// Maps the first byte of a label to its edge, keeping edges in a vector sorted by label.
/// No two labels share a first byte, so ordering by first byte and ordering by label agree,
/// and a single binary search finds the only candidate edge for a byte.
/// The empty-label sentinel always sits at index 0.
pub struct SortedEdgeMapping<N> {
    edges: Vec<Edge<N>>,
}

impl<N> Default for SortedEdgeMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SortedEdgeMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn with_sentinel() -> Self {
        Self {
            edges: vec![Edge::leaf(VectorPartial::empty())],
        }
    }

    #[inline]
    pub fn has_sentinel(&self) -> bool {
        self.edges.first().is_some_and(Edge::is_sentinel)
    }

    /// Returns false if the sentinel was already present.
    pub fn add_sentinel(&mut self) -> bool {
        if self.has_sentinel() {
            return false;
        }
        self.edges.insert(0, Edge::leaf(VectorPartial::empty()));
        true
    }

    fn search(&self, key: u8) -> Result<usize, usize> {
        let skip = usize::from(self.has_sentinel());
        self.edges[skip..]
            .binary_search_by(|e| match e.label.first() {
                Some(b) => b.cmp(&key),
                None => Ordering::Less,
            })
            .map(|i| i + skip)
            .map_err(|i| i + skip)
    }

    #[inline]
    pub fn seek_edge(&self, key: u8) -> Option<&Edge<N>> {
        let idx = self.search(key).ok()?;
        Some(&self.edges[idx])
    }

    /// Index of the edge whose label starts with `key`, for use with [`Self::edge_mut`].
    #[inline]
    pub fn position(&self, key: u8) -> Option<usize> {
        self.search(key).ok()
    }

    #[inline]
    pub fn edge_mut(&mut self, idx: usize) -> &mut Edge<N> {
        &mut self.edges[idx]
    }

    /// Inserts a non-empty-labelled edge. Panics if an edge with the same first byte exists.
    pub fn add_edge(&mut self, edge: Edge<N>) {
        let key = edge.label.at(0);
        let idx = match self.search(key) {
            Ok(_) => panic!("add_edge: an edge starting with {key:#04x} already exists"),
            Err(idx) => idx,
        };
        self.edges.insert(idx, edge);
    }

    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Edge<N>> {
        self.edges.iter()
    }

    /// Detaches every child node, leaving all edges as leaf edges.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<N>> + '_ {
        self.edges.iter_mut().filter_map(|e| e.child.take())
    }
}
