//! A compressed prefix tree (radix trie) for multi-pattern prefix matching.
//!
//! [`RadixTrie`] stores a set of byte strings, sharing common prefixes, and answers for a
//! probe and offset which stored strings are prefixes of the probe at that offset.

pub use crate::error::TrieError;
pub use crate::partials::key::{Key, VectorKey};
pub use crate::stats::{TrieStats, TrieStatsTrait};
pub use crate::tree::RadixTrie;

pub mod error;
pub mod iter;
mod mapping;
mod node;
pub mod partials;
pub mod stats;
pub mod tree;
