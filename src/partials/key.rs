use num_traits::{ToBytes, Unsigned};

/// Anything that can be viewed as the byte sequence matched by the trie.
pub trait Key {
    fn as_slice(&self) -> &[u8];

    fn length(&self) -> usize {
        self.as_slice().len()
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn as_slice(&self) -> &[u8] {
        (**self).as_slice()
    }
}

impl Key for str {
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for String {
    fn as_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Key for Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Key for [u8; N] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

// Owns variable sized key data. Integers are stored big-endian so that numeric order and
// byte order agree.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VectorKey {
    data: Vec<u8>,
}

impl VectorKey {
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: Vec::from(data),
        }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::from_slice(un.to_be_bytes().as_ref())
    }
}

impl Key for VectorKey {
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for VectorKey {
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<String> for VectorKey {
    fn from(data: String) -> Self {
        Self::from_vec(data.into_bytes())
    }
}

impl From<&[u8]> for VectorKey {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Vec<u8>> for VectorKey {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

macro_rules! vector_key_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VectorKey {
                fn from(data: $t) -> Self {
                    Self::from_unsigned(data)
                }
            }
        )*
    };
}

vector_key_from_unsigned!(u8, u16, u32, u64, u128, usize);

// Flip the sign bit so that negative values sort below positive ones:
// -128 => 0x00, -1 => 0x7f, 0 => 0x80, 127 => 0xff
macro_rules! vector_key_from_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl From<$t> for VectorKey {
                fn from(val: $t) -> Self {
                    let v = (val as $u) ^ (1 << (<$u>::BITS - 1));
                    Self::from_unsigned(v)
                }
            }
        )*
    };
}

vector_key_from_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
