//! Account-layer packaging of WOTS+ public keys
//!
//! Ledger accounts publish a 2208-byte "wide" key:
//!
//! ```text
//! public key (2144) || public seed (32) || address seed (32)
//! ```
//!
//! Accounts may overwrite the last 12 bytes (address words 5-7) with a fixed
//! tag. Those words hold the chain, hash-step and key/mask fields, which every
//! chain computation overwrites, so a tagged key still verifies. The tag is
//! applied here and never inside key generation.

use crate::utils::{decode_hex, impl_hex_serde, short_hex};
use crate::wots::{
    self, AddrSeed, MessageDigest, PublicKey, PublicParts, PublicSeed, Signature, N, PK_BYTES,
};
use std::fmt;
use thiserror::Error;

/// Wide public key size
pub const WIDE_PK_BYTES: usize = PK_BYTES + 2 * N;

/// Default account tag written over the final address words
pub const DEFAULT_TAG: [u8; 12] = [0x42, 0, 0, 0, 0x0e, 0, 0, 0, 0x01, 0, 0, 0];

const PUBLIC_SEED_OFFSET: usize = PK_BYTES;
const ADDR_SEED_OFFSET: usize = PK_BYTES + N;
const TAG_OFFSET: usize = WIDE_PK_BYTES - DEFAULT_TAG.len();

/// Wide public key decoding errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// Input is not exactly `WIDE_PK_BYTES` long
    #[error("Invalid wide public key length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Input is not valid hex
    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Account result
pub type Result<T> = std::result::Result<T, AccountError>;

/// Public key with its public seed and address seed attached
#[derive(Clone, PartialEq, Eq)]
pub struct WidePublicKey([u8; WIDE_PK_BYTES]);

impl WidePublicKey {
    /// Concatenate a public key with its two public seeds
    pub fn from_parts(public_key: &PublicKey, public_seed: &PublicSeed, addr_seed: &AddrSeed) -> Self {
        let mut bytes = [0u8; WIDE_PK_BYTES];
        bytes[..PK_BYTES].copy_from_slice(public_key.as_bytes());
        bytes[PUBLIC_SEED_OFFSET..ADDR_SEED_OFFSET].copy_from_slice(public_seed.as_bytes());
        bytes[ADDR_SEED_OFFSET..].copy_from_slice(addr_seed.as_bytes());
        Self(bytes)
    }

    /// Wide key from exactly `WIDE_PK_BYTES` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = <[u8; WIDE_PK_BYTES]>::try_from(bytes).map_err(|_| AccountError::InvalidLength {
            expected: WIDE_PK_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Wide key from hex, optional `0x` prefix
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_slice(&decode_hex(text)?)
    }

    /// Raw 2208 bytes
    pub fn as_bytes(&self) -> &[u8; WIDE_PK_BYTES] {
        &self.0
    }

    /// Lowercase hex of the raw bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Chain tips part
    pub fn public_key(&self) -> PublicKey {
        let mut bytes = [0u8; PK_BYTES];
        bytes.copy_from_slice(&self.0[..PK_BYTES]);
        PublicKey::new(bytes)
    }

    /// Public seed part
    pub fn public_seed(&self) -> PublicSeed {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.0[PUBLIC_SEED_OFFSET..ADDR_SEED_OFFSET]);
        PublicSeed::new(bytes)
    }

    /// Address seed part, tag included if present
    pub fn addr_seed(&self) -> AddrSeed {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.0[ADDR_SEED_OFFSET..]);
        AddrSeed::new(bytes)
    }

    /// Copy with the trailing 12 bytes replaced by [`DEFAULT_TAG`]
    pub fn with_default_tag(&self) -> Self {
        let mut bytes = self.0;
        bytes[TAG_OFFSET..].copy_from_slice(&DEFAULT_TAG);
        Self(bytes)
    }

    /// Whether the trailing 12 bytes equal [`DEFAULT_TAG`]
    pub fn is_default_tagged(&self) -> bool {
        self.0[TAG_OFFSET..] == DEFAULT_TAG
    }

    /// Recover from `signature` and compare with the embedded key
    pub fn verify(&self, signature: &Signature, digest: &MessageDigest) -> wots::Result<()> {
        wots::verify(&self.public_key(), signature, digest, &self.public_seed(), &self.addr_seed())
    }
}

impl From<&PublicParts> for WidePublicKey {
    fn from(parts: &PublicParts) -> Self {
        Self::from_parts(&parts.public_key, &parts.public_seed, &parts.addr_seed)
    }
}

impl fmt::Debug for WidePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WidePublicKey({})", short_hex(&self.0))
    }
}

impl_hex_serde!(WidePublicKey);
