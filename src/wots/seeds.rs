//! Seed derivation: one master secret, three sub-seeds

use crate::utils::{impl_hex_serde, short_hex};
use crate::wots::{fixed, params::*, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 32-byte master secret of one signing identity
///
/// Sole source of key material for one public key. Sign with it once.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSeed([u8; N]);

impl MasterSeed {
    /// Master seed from raw bytes
    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Master seed from exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed("master seed", bytes)?))
    }

    /// Fresh master seed from the OS RNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; N];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw secret bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Private, public and address seeds of this master seed
    pub fn derive(&self) -> SeedTriple {
        derive(self)
    }
}

impl fmt::Debug for MasterSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSeed(<redacted>)")
    }
}

/// Seeds the secret chain starts
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateSeed([u8; N]);

impl PrivateSeed {
    /// Private seed from raw bytes
    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Private seed from exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed("private seed", bytes)?))
    }

    /// Raw secret bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl fmt::Debug for PrivateSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateSeed(<redacted>)")
    }
}

/// Keys the chain compression function; published with the public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicSeed([u8; N]);

/// Base hash address binding a key to its account context; published
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrSeed([u8; N]);

macro_rules! public_seed_type {
    ($ty:ident, $what:literal) => {
        impl $ty {
            #[doc = concat!("Wrap raw ", $what, " bytes")]
            pub fn new(bytes: [u8; N]) -> Self {
                Self(bytes)
            }

            #[doc = concat!("Read a ", $what, " from exactly 32 bytes")]
            pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                Ok(Self(fixed($what, bytes)?))
            }

            /// Raw bytes
            pub fn as_bytes(&self) -> &[u8; N] {
                &self.0
            }

            /// Lowercase hex
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($ty), "({})"), short_hex(&self.0))
            }
        }

        impl_hex_serde!($ty);
    };
}

public_seed_type!(PublicSeed, "public seed");
public_seed_type!(AddrSeed, "address seed");

/// The three sub-seeds of one master seed
#[derive(Clone)]
pub struct SeedTriple {
    private_seed: PrivateSeed,
    public_seed: PublicSeed,
    addr_seed: AddrSeed,
}

impl SeedTriple {
    /// Bundle already derived seeds
    pub fn from_parts(private_seed: PrivateSeed, public_seed: PublicSeed, addr_seed: AddrSeed) -> Self {
        Self { private_seed, public_seed, addr_seed }
    }

    /// Secret seed of the chain starts
    pub fn private_seed(&self) -> &PrivateSeed {
        &self.private_seed
    }

    /// Public seed keying the chains
    pub fn public_seed(&self) -> &PublicSeed {
        &self.public_seed
    }

    /// Base address seed
    pub fn addr_seed(&self) -> &AddrSeed {
        &self.addr_seed
    }
}

impl fmt::Debug for SeedTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedTriple")
            .field("private_seed", &self.private_seed)
            .field("public_seed", &self.public_seed)
            .field("addr_seed", &self.addr_seed)
            .finish()
    }
}

fn tagged_hash(master: &[u8; N], tag: &[u8]) -> [u8; N] {
    let mut h = Sha256::new();
    h.update(master);
    h.update(tag);
    h.finalize().into()
}

/// `Hash(master || tag)` for each of the tags `seed`, `publ`, `addr`
pub fn derive(master: &MasterSeed) -> SeedTriple {
    let bytes = master.as_bytes();
    SeedTriple {
        private_seed: PrivateSeed(tagged_hash(bytes, TAG_PRIVATE)),
        public_seed: PublicSeed(tagged_hash(bytes, TAG_PUBLIC)),
        addr_seed: AddrSeed(tagged_hash(bytes, TAG_ADDR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wots::WotsError;

    #[test]
    fn test_derive_is_deterministic() {
        let a = MasterSeed::new([5; N]).derive();
        let b = MasterSeed::new([5; N]).derive();
        assert_eq!(a.private_seed().as_bytes(), b.private_seed().as_bytes());
        assert_eq!(a.public_seed(), b.public_seed());
        assert_eq!(a.addr_seed(), b.addr_seed());
    }

    #[test]
    fn test_sub_seeds_are_distinct() {
        let seeds = MasterSeed::new([0; N]).derive();
        assert_ne!(seeds.private_seed().as_bytes(), seeds.public_seed().as_bytes());
        assert_ne!(seeds.public_seed().as_bytes(), seeds.addr_seed().as_bytes());
        assert_ne!(seeds.private_seed().as_bytes(), seeds.addr_seed().as_bytes());
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(matches!(
            MasterSeed::from_slice(&[0u8; 31]),
            Err(WotsError::InvalidLength { what: "master seed", expected: 32, actual: 31 })
        ));
        assert!(PublicSeed::from_slice(&[0u8; 33]).is_err());
        assert!(AddrSeed::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let seeds = MasterSeed::new([0xaa; N]).derive();
        let text = format!("{:?} {:?}", MasterSeed::new([0xaa; N]), seeds);
        assert!(!text.contains(&hex::encode(seeds.private_seed().as_bytes())));
        assert!(text.contains("<redacted>"));
    }

    #[test]
    fn test_public_seed_serde_hex() {
        let seed = PublicSeed::new([0x0f; N]);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(N)));
        let back: PublicSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
        assert!(serde_json::from_str::<AddrSeed>("\"0f0f\"").is_err());
    }
}
