//! WOTS+ Signing

use crate::utils::{impl_hex_serde, short_hex};
use crate::wots::{
    address::Address,
    chain::{expand_seed, gen_chain, map_chains},
    encoding::chain_lengths,
    fixed,
    params::*,
    seeds::{AddrSeed, PrivateSeed, PublicSeed, SeedTriple},
    MessageDigest, Result,
};
use std::fmt;

/// One intermediate chain value per chain, `LEN * N` bytes
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; SIG_BYTES]);

impl Signature {
    /// Signature from raw chain values
    pub fn new(bytes: [u8; SIG_BYTES]) -> Self {
        Self(bytes)
    }

    /// Signature from exactly `SIG_BYTES` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed("signature", bytes)?))
    }

    /// Raw chain values
    pub fn as_bytes(&self) -> &[u8; SIG_BYTES] {
        &self.0
    }

    /// Lowercase hex of the signature
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Revealed value of chain `i`
    ///
    /// # Panics
    ///
    /// If `i >= LEN`.
    pub fn chain_value(&self, i: usize) -> [u8; N] {
        let mut value = [0u8; N];
        value.copy_from_slice(&self.0[i * N..(i + 1) * N]);
        value
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", short_hex(&self.0))
    }
}

impl_hex_serde!(Signature);

/// Walk chain `i` from its secret start to depth `lengths[i]`
///
/// Signing two different digests with the same private seed reveals chain
/// values past the first signature's depths. Callers must prevent that, for
/// example by only signing through [`crate::wots::OneTimeKey`].
pub fn sign(
    private_seed: &PrivateSeed,
    public_seed: &PublicSeed,
    addr_seed: &AddrSeed,
    digest: &MessageDigest,
) -> Signature {
    let lengths = chain_lengths(digest);
    let starts = expand_seed(private_seed.as_bytes());
    let base = Address::from_seed(addr_seed.as_bytes());
    let pub_seed = public_seed.as_bytes();

    let values = map_chains(|i| {
        gen_chain(&starts[i], 0, lengths[i] as u32, pub_seed, &base.with_chain(i as u32))
    });

    log::debug!("signed digest {} (public seed {})", short_hex(digest), short_hex(pub_seed));
    Signature(values)
}

impl SeedTriple {
    /// Sign `digest` with these seeds. Once per master seed.
    pub fn sign(&self, digest: &MessageDigest) -> Signature {
        sign(self.private_seed(), self.public_seed(), self.addr_seed(), digest)
    }
}
