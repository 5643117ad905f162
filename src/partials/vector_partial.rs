use std::cmp::min;
use std::fmt;

use crate::partials::Partial;

/// Heap-allocated edge label. The empty label is the terminal sentinel.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct VectorPartial {
    data: Box<[u8]>,
}

impl VectorPartial {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }

    /// First byte, or `None` for the sentinel.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.data.first().copied()
    }
}

impl From<&[u8]> for VectorPartial {
    fn from(src: &[u8]) -> Self {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for VectorPartial {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for VectorPartial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.data))
    }
}

impl fmt::Display for VectorPartial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl Partial for VectorPartial {
    fn partial_before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        VectorPartial::from_slice(&self.data[..length])
    }

    fn partial_after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        VectorPartial::from_slice(&self.data[start..])
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> u8 {
        assert!(pos < self.data.len());
        self.data[pos]
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn prefix_length_slice(&self, slice: &[u8]) -> usize {
        let len = min(self.data.len(), slice.len());
        let mut idx = 0;
        while idx < len {
            if self.data[idx] != slice[idx] {
                break;
            }
            idx += 1;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use crate::partials::vector_partial::VectorPartial;
    use crate::partials::Partial;

    #[test]
    fn test_split_points() {
        let p = VectorPartial::from_slice(b"prefix");
        assert_eq!(p.partial_before(3).to_slice(), b"pre");
        assert_eq!(p.partial_after(3).to_slice(), b"fix");
        assert_eq!(p.partial_after(6).len(), 0);
        assert!(p.partial_after(6).is_empty());
        assert_eq!(p.at(0), b'p');
        assert_eq!(p.first(), Some(b'p'));
        assert_eq!(VectorPartial::empty().first(), None);
    }

    #[test]
    fn test_prefix_length() {
        let p = VectorPartial::from_slice(b"prefix");
        assert_eq!(p.prefix_length_slice(b"prepare"), 3);
        assert_eq!(p.prefix_length_slice(b"pre"), 3);
        assert_eq!(p.prefix_length_slice(b"prefixes"), 6);
        assert_eq!(p.prefix_length_slice(b"x"), 0);
        assert_eq!(p.prefix_length_slice(b""), 0);
        assert!(p.is_prefix_of(b"prefixes"));
        assert!(!p.is_prefix_of(b"pref"));
    }

    #[test]
    fn test_sentinel_sorts_first() {
        assert!(VectorPartial::empty() < VectorPartial::from_slice(b"\0"));
        assert!(VectorPartial::from_slice(b"ab") < VectorPartial::from_slice(b"b"));
    }
}
