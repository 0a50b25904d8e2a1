//! WOTS+ (Winternitz One-Time Signature Plus)
//!
//! Hash-based one-time signatures over SHA-256 with w = 16:
//! - Seed derivation from a single 32-byte master secret
//! - Bitmasked keyed chain compression
//! - Checksum-protected base-16 digit encoding
//! - Public-key recovery from a signature
//!
//! A master seed must sign at most once. Nothing below `keychain` tracks that;
//! signing the same private seed twice silently leaks chain values.

/// Scheme constants
pub mod params;
/// Hash addresses
pub mod address;
/// PRF and chain compression
pub mod hash;
/// Chain walking
pub mod chain;
/// Digest to chain-length encoding
pub mod encoding;
/// Master and derived seeds
pub mod seeds;
/// Public keys
pub mod keygen;
/// Signatures
pub mod sign;
/// Recovery and verification
pub mod verify;
/// Byte-slice API
pub mod raw;

/// One-time key handout from a single wallet secret
pub mod keychain;

use thiserror::Error;

pub use params::*;
pub use address::Address;
pub use encoding::chain_lengths;
pub use seeds::{derive, AddrSeed, MasterSeed, PrivateSeed, PublicSeed, SeedTriple};
pub use keygen::{generate_public_key, PublicKey};
pub use sign::{sign, Signature};
pub use verify::{recover_public_key, verify};
pub use keychain::{Keychain, OneTimeKey, PublicParts, SharedKeychain};

/// The value actually signed
pub type MessageDigest = [u8; N];

/// WOTS+ errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WotsError {
    /// A fixed-size input had the wrong length
    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which input
        what: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Recovered key differs from the expected key
    #[error("Invalid signature")]
    InvalidSignature,

    /// No keychain index left to hand out
    #[error("Key exhausted: keychain index space used up")]
    KeyExhausted,

    /// Index lies behind the keychain position
    #[error("Key at index {index} was already handed out")]
    KeyAlreadyUsed {
        /// Refused index
        index: u64,
    },

    /// A thread panicked while holding the shared keychain
    #[error("Keychain lock poisoned")]
    KeychainPoisoned,
}

/// WOTS+ result
pub type Result<T> = std::result::Result<T, WotsError>;

/// Copy `bytes` into a fixed array, or fail with `InvalidLength`
pub(crate) fn fixed<const L: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; L]> {
    <[u8; L]>::try_from(bytes).map_err(|_| WotsError::InvalidLength {
        what,
        expected: L,
        actual: bytes.len(),
    })
}
