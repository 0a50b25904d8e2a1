//! Keychain - one-time key handout from a single wallet secret
//!
//! A WOTS+ key may sign once. The keychain derives an independent master seed
//! per index and hands each index out only once:
//!
//! ```text
//! master_i = SHA-256(keychain_seed || "wots" || i as u64 big-endian)
//! ```
//!
//! # Usage
//!
//! ```
//! use wotsp::wots::{Keychain, hash::sha256};
//!
//! let mut keychain = Keychain::new([7u8; 32]);
//! let key = keychain.next_key()?;
//! let public = key.public_parts();
//! let signature = key.sign(&sha256(b"spend"));   // consumes the key
//! assert!(public.verify(&signature, &sha256(b"spend")).is_ok());
//! # Ok::<(), wotsp::wots::WotsError>(())
//! ```
//!
//! The next index is only held in memory. Callers that restart must store it
//! themselves and come back with [`Keychain::resume`].
//!
//! Secret material for an index only leaves the keychain inside the
//! [`OneTimeKey`] handed out for it. A keychain cannot be cloned, and the
//! per-index master seed is not reachable from outside the crate:
//!
//! ```compile_fail
//! use wotsp::wots::Keychain;
//!
//! let keychain = Keychain::new([7u8; 32]);
//! let copy: Keychain = keychain.clone();
//! ```
//!
//! ```compile_fail
//! use wotsp::wots::Keychain;
//!
//! let keychain = Keychain::new([7u8; 32]);
//! let master = keychain.master_at(0);
//! ```
//!
//! Share a keychain between threads through [`SharedKeychain`].

use crate::wots::{
    fixed,
    keygen::PublicKey,
    params::N,
    seeds::{AddrSeed, MasterSeed, PublicSeed, SeedTriple},
    sign::Signature,
    verify::verify,
    MessageDigest, Result, WotsError,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ops::Range;
use std::sync::{Arc, Mutex};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain tag for per-index master seed derivation
pub const KEYCHAIN_TAG: &[u8; 4] = b"wots";

/// Deterministic sequence of one-time keys
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Keychain {
    seed: [u8; N],
    next_index: u64,
}

impl Keychain {
    /// Keychain starting at index 0
    pub fn new(seed: [u8; N]) -> Self {
        Self::resume(seed, 0)
    }

    /// Keychain from a 32-byte seed slice, starting at index 0
    pub fn from_slice(seed: &[u8]) -> Result<Self> {
        Ok(Self::new(fixed("keychain seed", seed)?))
    }

    /// Continue a keychain whose indices below `next_index` are spent
    pub fn resume(seed: [u8; N], next_index: u64) -> Self {
        Self { seed, next_index }
    }

    /// Keychain with a fresh seed from the OS RNG
    pub fn generate() -> Self {
        let mut seed = [0u8; N];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        Self::new(seed)
    }

    /// Index the next call to [`next_key`](Self::next_key) hands out
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub(crate) fn master_at(&self, index: u64) -> MasterSeed {
        let mut h = Sha256::new();
        h.update(self.seed);
        h.update(KEYCHAIN_TAG);
        h.update(index.to_be_bytes());
        MasterSeed::new(h.finalize().into())
    }

    /// Public half of the key at `index`; does not consume the index
    pub fn public_at(&self, index: u64) -> PublicParts {
        OneTimeKey::from_master(index, &self.master_at(index)).public_parts()
    }

    /// Hand out the key at the next index and advance past it
    pub fn next_key(&mut self) -> Result<OneTimeKey> {
        if self.next_index == u64::MAX {
            return Err(WotsError::KeyExhausted);
        }
        let index = self.next_index;
        self.next_index += 1;
        log::trace!("keychain handed out index {}", index);

        Ok(OneTimeKey::from_master(index, &self.master_at(index)))
    }

    /// Spend key plus the public half of the following key
    ///
    /// The following key receives change and becomes the next spend key, so
    /// the keychain advances by one.
    pub fn next_with_change(&mut self) -> Result<(OneTimeKey, PublicParts)> {
        if self.next_index >= u64::MAX - 1 {
            return Err(WotsError::KeyExhausted);
        }
        let change = self.public_at(self.next_index + 1);
        let key = self.next_key()?;
        Ok((key, change))
    }

    /// Move forward to `index`, abandoning everything before it
    pub fn skip_to(&mut self, index: u64) -> Result<()> {
        if index < self.next_index {
            return Err(WotsError::KeyAlreadyUsed { index });
        }
        log::trace!("keychain skipped from {} to {}", self.next_index, index);
        self.next_index = index;
        Ok(())
    }

    /// Index in `range` whose public key equals `public_key`
    pub fn find_index(&self, public_key: &PublicKey, mut range: Range<u64>) -> Option<u64> {
        range.find(|&index| self.public_at(index).public_key == *public_key)
    }
}

/// Everything a verifier needs about one keychain key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParts {
    /// Keychain index of this key
    pub index: u64,
    /// Chain tips
    pub public_key: PublicKey,
    /// Public seed the key was generated under
    pub public_seed: PublicSeed,
    /// Address seed the key was generated under
    pub addr_seed: AddrSeed,
}

impl PublicParts {
    /// Check `signature` over `digest` against this key
    pub fn verify(&self, signature: &Signature, digest: &MessageDigest) -> Result<()> {
        verify(&self.public_key, signature, digest, &self.public_seed, &self.addr_seed)
    }
}

/// A key that has been handed out and can sign exactly once
#[derive(Debug)]
pub struct OneTimeKey {
    index: u64,
    seeds: SeedTriple,
}

impl OneTimeKey {
    /// Key for `index` derived from its master seed
    pub fn from_master(index: u64, master: &MasterSeed) -> Self {
        Self { index, seeds: master.derive() }
    }

    /// Keychain index of this key
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Public seed of this key
    pub fn public_seed(&self) -> &PublicSeed {
        self.seeds.public_seed()
    }

    /// Address seed of this key
    pub fn addr_seed(&self) -> &AddrSeed {
        self.seeds.addr_seed()
    }

    /// Public key of this key
    pub fn public_key(&self) -> PublicKey {
        self.seeds.public_key()
    }

    /// Everything a verifier needs, without the secret seed
    pub fn public_parts(&self) -> PublicParts {
        PublicParts {
            index: self.index,
            public_key: self.public_key(),
            public_seed: *self.public_seed(),
            addr_seed: *self.addr_seed(),
        }
    }

    /// Sign and destroy the key
    pub fn sign(self, digest: &MessageDigest) -> Signature {
        self.seeds.sign(digest)
    }
}

/// Keychain shared between threads
///
/// The mutex serializes index handout, so two callers never receive the
/// same index.
#[derive(Clone)]
pub struct SharedKeychain {
    inner: Arc<Mutex<Keychain>>,
}

impl SharedKeychain {
    /// Take ownership of `keychain` for shared use
    pub fn new(keychain: Keychain) -> Self {
        Self { inner: Arc::new(Mutex::new(keychain)) }
    }

    /// Hand out the next index under the lock
    pub fn next_key(&self) -> Result<OneTimeKey> {
        let mut keychain = self.inner.lock().map_err(|_| WotsError::KeychainPoisoned)?;
        keychain.next_key()
    }

    /// Index the next handout will use
    pub fn next_index(&self) -> Result<u64> {
        let keychain = self.inner.lock().map_err(|_| WotsError::KeychainPoisoned)?;
        Ok(keychain.next_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wots::hash::sha256;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_indices_are_sequential_and_distinct() {
        let mut keychain = Keychain::new([1; N]);
        let a = keychain.next_key().unwrap();
        let b = keychain.next_key().unwrap();
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(keychain.next_index(), 2);
        assert_ne!(a.public_key(), b.public_key());
        assert_ne!(a.public_seed(), b.public_seed());
    }

    #[test]
    fn test_master_at_is_deterministic() {
        let keychain = Keychain::new([1; N]);
        assert_eq!(keychain.master_at(5).as_bytes(), Keychain::new([1; N]).master_at(5).as_bytes());
        assert_ne!(keychain.master_at(5).as_bytes(), keychain.master_at(6).as_bytes());
        assert_ne!(keychain.master_at(5).as_bytes(), Keychain::new([2; N]).master_at(5).as_bytes());
    }

    #[test]
    fn test_handed_out_key_matches_public_at() {
        let mut keychain = Keychain::new([3; N]);
        let expected = keychain.public_at(0);
        let key = keychain.next_key().unwrap();
        assert_eq!(key.public_parts(), expected);

        let digest = sha256(b"spend");
        let signature = key.sign(&digest);
        assert!(expected.verify(&signature, &digest).is_ok());
    }

    #[test]
    fn test_skip_backward_refused() {
        let mut keychain = Keychain::new([4; N]);
        keychain.skip_to(10).unwrap();
        assert_eq!(keychain.next_key().unwrap().index(), 10);
        assert_eq!(keychain.skip_to(3), Err(WotsError::KeyAlreadyUsed { index: 3 }));
        assert_eq!(keychain.next_index(), 11);
    }

    #[test]
    fn test_exhaustion() {
        let mut keychain = Keychain::resume([5; N], u64::MAX - 1);
        assert!(keychain.next_with_change().is_err());
        assert_eq!(keychain.next_key().unwrap().index(), u64::MAX - 1);
        assert!(matches!(keychain.next_key(), Err(WotsError::KeyExhausted)));
    }

    #[test]
    fn test_next_with_change() {
        let mut keychain = Keychain::new([6; N]);
        let (spend, change) = keychain.next_with_change().unwrap();
        assert_eq!(spend.index(), 0);
        assert_eq!(change.index, 1);
        assert_eq!(keychain.next_index(), 1);
        assert_eq!(keychain.next_key().unwrap().public_parts(), change);
    }

    #[test]
    fn test_spent_index_only_exposes_public_parts() {
        let mut keychain = Keychain::new([9; N]);
        let key = keychain.next_key().unwrap();
        let digest = sha256(b"first");
        let signature = key.sign(&digest);

        // the spent index stays verifiable, but a second handout moves on
        let spent = keychain.public_at(0);
        assert!(spent.verify(&signature, &digest).is_ok());
        assert_eq!(keychain.next_key().unwrap().index(), 1);
        assert_eq!(keychain.skip_to(0), Err(WotsError::KeyAlreadyUsed { index: 0 }));
    }

    #[test]
    fn test_find_index() {
        let keychain = Keychain::new([7; N]);
        let target = keychain.public_at(4).public_key;
        assert_eq!(keychain.find_index(&target, 0..8), Some(4));
        assert_eq!(keychain.find_index(&target, 5..8), None);
    }

    #[test]
    fn test_shared_keychain_concurrent_handout() {
        let shared = SharedKeychain::new(Keychain::new([8; N]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.next_key().unwrap().index())
            })
            .collect();

        let indices: HashSet<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(indices.len(), 8);
        assert_eq!(shared.next_index().unwrap(), 8);
    }
}
