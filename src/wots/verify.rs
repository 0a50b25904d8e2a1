//! WOTS+ Verification

use crate::utils::short_hex;
use crate::wots::{
    address::Address,
    chain::{gen_chain, map_chains},
    encoding::chain_lengths,
    keygen::PublicKey,
    params::*,
    seeds::{AddrSeed, PublicSeed},
    sign::Signature,
    MessageDigest, Result, WotsError,
};
use subtle::ConstantTimeEq;

/// Finish every chain walk the signature started
///
/// For a genuine signature the result equals the signer's public key. Any
/// other input still yields 2144 bytes, just not the right ones.
pub fn recover_public_key(
    signature: &Signature,
    digest: &MessageDigest,
    public_seed: &PublicSeed,
    addr_seed: &AddrSeed,
) -> PublicKey {
    let lengths = chain_lengths(digest);
    let base = Address::from_seed(addr_seed.as_bytes());
    let pub_seed = public_seed.as_bytes();

    let tips = map_chains(|i| {
        let start = lengths[i] as u32;
        gen_chain(
            &signature.chain_value(i),
            start,
            MAX_CHAIN_STEP - start,
            pub_seed,
            &base.with_chain(i as u32),
        )
    });

    log::debug!("recovered public key {} for digest {}", short_hex(&tips), short_hex(digest));
    PublicKey::new(tips)
}

/// Recover and compare against the expected key in constant time
pub fn verify(
    public_key: &PublicKey,
    signature: &Signature,
    digest: &MessageDigest,
    public_seed: &PublicSeed,
    addr_seed: &AddrSeed,
) -> Result<()> {
    let recovered = recover_public_key(signature, digest, public_seed, addr_seed);
    if bool::from(recovered.ct_eq(public_key)) {
        Ok(())
    } else {
        Err(WotsError::InvalidSignature)
    }
}
