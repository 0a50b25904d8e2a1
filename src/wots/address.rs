//! Hash addresses
//!
//! An address is eight 32-bit words that domain-separate every PRF and
//! compression call. Layout:
//!
//! ```text
//! word 0      layer
//! words 1-2   tree (64-bit, high word first)
//! word 3      type
//! word 4      OTS key index
//! word 5      chain index
//! word 6      hash-step index
//! word 7      key/mask selector
//! ```
//!
//! Addresses are plain `Copy` values. Every setter returns a new address, so
//! chains computed on different threads never share one.

use crate::wots::params::N;

/// Key/mask selector value used when deriving the compression key
pub const SELECT_KEY: u32 = 0;

/// Key/mask selector value used when deriving the bitmask
pub const SELECT_MASK: u32 = 1;

const LAYER: usize = 0;
const TREE_HIGH: usize = 1;
const TREE_LOW: usize = 2;
const TYPE: usize = 3;
const OTS: usize = 4;
const CHAIN: usize = 5;
const HASH: usize = 6;
const KEY_AND_MASK: usize = 7;

/// WOTS+ hash address
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address {
    words: [u32; 8],
}

impl Address {
    /// Address from eight raw words
    pub const fn from_words(words: [u32; 8]) -> Self {
        Self { words }
    }

    /// Base address for an account: the address seed read as eight big-endian words
    pub fn from_seed(seed: &[u8; N]) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// Big-endian serialization used as PRF input
    pub fn to_bytes(&self) -> [u8; N] {
        let mut bytes = [0u8; N];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// All eight words
    pub const fn words(&self) -> [u32; 8] {
        self.words
    }

    /// Word 0
    pub const fn layer(&self) -> u32 {
        self.words[LAYER]
    }

    /// Words 1-2 as one 64-bit value
    pub const fn tree(&self) -> u64 {
        ((self.words[TREE_HIGH] as u64) << 32) | self.words[TREE_LOW] as u64
    }

    /// Word 3
    pub const fn address_type(&self) -> u32 {
        self.words[TYPE]
    }

    /// Word 4
    pub const fn ots_index(&self) -> u32 {
        self.words[OTS]
    }

    /// Word 5
    pub const fn chain(&self) -> u32 {
        self.words[CHAIN]
    }

    /// Word 6
    pub const fn hash(&self) -> u32 {
        self.words[HASH]
    }

    /// Word 7
    pub const fn key_and_mask(&self) -> u32 {
        self.words[KEY_AND_MASK]
    }

    /// Copy with word 0 replaced
    pub const fn with_layer(self, layer: u32) -> Self {
        self.with_word(LAYER, layer)
    }

    /// Copy with words 1-2 replaced, high word first
    pub const fn with_tree(self, tree: u64) -> Self {
        self.with_word(TREE_HIGH, (tree >> 32) as u32)
            .with_word(TREE_LOW, tree as u32)
    }

    /// Copy with word 3 replaced
    pub const fn with_type(self, address_type: u32) -> Self {
        self.with_word(TYPE, address_type)
    }

    /// Copy with word 4 replaced
    pub const fn with_ots_index(self, index: u32) -> Self {
        self.with_word(OTS, index)
    }

    /// Select which of the chains is being walked
    pub const fn with_chain(self, chain: u32) -> Self {
        self.with_word(CHAIN, chain)
    }

    /// Select the position inside a chain
    pub const fn with_hash(self, hash: u32) -> Self {
        self.with_word(HASH, hash)
    }

    /// Select key (`SELECT_KEY`) or bitmask (`SELECT_MASK`) derivation
    pub const fn with_key_and_mask(self, key_and_mask: u32) -> Self {
        self.with_word(KEY_AND_MASK, key_and_mask)
    }

    const fn with_word(mut self, index: usize, value: u32) -> Self {
        self.words[index] = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_is_big_endian() {
        let mut seed = [0u8; N];
        seed[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        seed[28..].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        let addr = Address::from_seed(&seed);
        assert_eq!(addr.layer(), 0x0102_0304);
        assert_eq!(addr.key_and_mask(), 0xdead_beef);
        assert_eq!(addr.to_bytes(), seed);
    }

    #[test]
    fn test_setters_touch_one_field() {
        let base = Address::from_words([1, 2, 3, 4, 5, 6, 7, 8]);

        let chained = base.with_chain(40);
        assert_eq!(chained.words(), [1, 2, 3, 4, 5, 40, 7, 8]);

        let hashed = chained.with_hash(9);
        assert_eq!(hashed.words(), [1, 2, 3, 4, 5, 40, 9, 8]);

        let masked = hashed.with_key_and_mask(SELECT_MASK);
        assert_eq!(masked.words(), [1, 2, 3, 4, 5, 40, 9, 1]);

        // the original value is untouched
        assert_eq!(base.words(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_tree_spans_two_words() {
        let addr = Address::default().with_tree(0x0000_0001_ffff_fffe);
        assert_eq!(addr.words()[1], 1);
        assert_eq!(addr.words()[2], 0xffff_fffe);
        assert_eq!(addr.tree(), 0x0000_0001_ffff_fffe);

        let other = addr.with_layer(3).with_type(0).with_ots_index(12);
        assert_eq!(other.tree(), addr.tree());
        assert_eq!(other.layer(), 3);
        assert_eq!(other.ots_index(), 12);
    }
}
