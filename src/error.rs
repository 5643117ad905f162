use thiserror::Error;

/// Errors reported by [`RadixTrie`](crate::tree::RadixTrie) queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The query offset lies past the end of the probe.
    #[error("offset {offset} is out of range for a probe of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TrieError>;
