//! Owned fixed-length byte blocks with XOR helpers.

use std::ops::{BitXor, BitXorAssign};

#[cfg(test)]
mod block_tests;

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
/// Block is one block-sized byte buffer as moved between the array and its stores.
pub struct Block(Vec<u8>);

impl Block {
    #[inline]
    #[must_use]
    /// `zero` returns an all-zero block of `len` bytes.
    pub fn zero(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    /// `as_bytes` returns a shared view of the block contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    /// `as_bytes_mut` returns a mutable view of the block contents.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    #[must_use]
    /// `is_zero` reports whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    #[inline]
    /// `xor_in_place` folds `rhs` into this block byte by byte.
    ///
    /// # Arguments
    /// * `rhs` - Bytes to XOR in; must have the same length as the block.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn xor_in_place(&mut self, rhs: &[u8]) {
        assert_eq!(
            self.0.len(),
            rhs.len(),
            "XOR operands must be {} bytes.",
            self.0.len()
        );
        for (a, b) in self.0.iter_mut().zip(rhs) {
            *a ^= *b;
        }
    }
}

impl From<Vec<u8>> for Block {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Block {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for Block {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<u8>> for Block {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.0 == other
    }
}

impl BitXor<&Self> for Block {
    type Output = Self;
    #[inline]
    fn bitxor(mut self, rhs: &Self) -> Self::Output {
        self.xor_in_place(&rhs.0);
        self
    }
}

impl BitXor for Block {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self ^ &rhs
    }
}

impl BitXorAssign<&Self> for Block {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.xor_in_place(&rhs.0);
    }
}

impl BitXorAssign for Block {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.xor_in_place(&rhs.0);
    }
}
