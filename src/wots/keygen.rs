//! WOTS+ Key Generation

use crate::utils::{impl_hex_serde, short_hex};
use crate::wots::{
    address::Address,
    chain::{expand_seed, gen_chain, map_chains},
    fixed,
    params::*,
    seeds::{AddrSeed, PrivateSeed, PublicSeed, SeedTriple},
    Result,
};
use std::fmt;
use subtle::{Choice, ConstantTimeEq};

/// Concatenated chain tips, `LEN * N` bytes
///
/// Verification needs the matching public seed and address seed alongside;
/// see [`crate::account::WidePublicKey`] for one way to ship them together.
#[derive(Clone)]
pub struct PublicKey([u8; PK_BYTES]);

impl PublicKey {
    /// Public key from raw chain tips
    pub fn new(bytes: [u8; PK_BYTES]) -> Self {
        Self(bytes)
    }

    /// Public key from exactly `PK_BYTES` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed("public key", bytes)?))
    }

    /// Raw chain tips
    pub fn as_bytes(&self) -> &[u8; PK_BYTES] {
        &self.0
    }

    /// Lowercase hex of the key
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Tip of chain `i`
    ///
    /// # Panics
    ///
    /// If `i >= LEN`.
    pub fn chain_tip(&self, i: usize) -> &[u8] {
        &self.0[i * N..(i + 1) * N]
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", short_hex(&self.0))
    }
}

impl_hex_serde!(PublicKey);

/// Walk every chain from its secret start to the tip
pub fn generate_public_key(
    private_seed: &PrivateSeed,
    public_seed: &PublicSeed,
    addr_seed: &AddrSeed,
) -> PublicKey {
    let starts = expand_seed(private_seed.as_bytes());
    let base = Address::from_seed(addr_seed.as_bytes());
    let pub_seed = public_seed.as_bytes();

    let tips = map_chains(|i| {
        gen_chain(&starts[i], 0, MAX_CHAIN_STEP, pub_seed, &base.with_chain(i as u32))
    });

    log::debug!("generated WOTS+ public key {} (public seed {})", short_hex(&tips), short_hex(pub_seed));
    PublicKey(tips)
}

impl SeedTriple {
    /// Walk every chain of these seeds to its tip
    pub fn public_key(&self) -> PublicKey {
        generate_public_key(self.private_seed(), self.public_seed(), self.addr_seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wots::seeds::MasterSeed;
    use crate::wots::WotsError;

    #[test]
    fn test_public_key_length_and_determinism() {
        let seeds = MasterSeed::new([1; N]).derive();
        let a = seeds.public_key();
        let b = seeds.public_key();
        assert_eq!(a.as_bytes().len(), PK_BYTES);
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_seed_changes_key() {
        let seeds = MasterSeed::new([1; N]).derive();
        let base = seeds.public_key();

        let other_private = generate_public_key(&PrivateSeed::new([9; N]), seeds.public_seed(), seeds.addr_seed());
        let other_public = generate_public_key(seeds.private_seed(), &PublicSeed::new([9; N]), seeds.addr_seed());
        let other_addr = generate_public_key(seeds.private_seed(), seeds.public_seed(), &AddrSeed::new([9; N]));

        assert_ne!(base, other_private);
        assert_ne!(base, other_public);
        assert_ne!(base, other_addr);
    }

    #[test]
    fn test_chain_tips_match_manual_walk() {
        let seeds = MasterSeed::new([2; N]).derive();
        let pk = seeds.public_key();

        let starts = expand_seed(seeds.private_seed().as_bytes());
        let addr = Address::from_seed(seeds.addr_seed().as_bytes()).with_chain(66);
        let tip = gen_chain(&starts[66], 0, 15, seeds.public_seed().as_bytes(), &addr);
        assert_eq!(pk.chain_tip(66), &tip[..]);
    }

    #[test]
    fn test_from_slice() {
        assert!(PublicKey::from_slice(&[0u8; PK_BYTES]).is_ok());
        assert_eq!(
            PublicKey::from_slice(&[0u8; PK_BYTES + 64]).unwrap_err(),
            WotsError::InvalidLength { what: "public key", expected: PK_BYTES, actual: PK_BYTES + 64 }
        );
    }
}
