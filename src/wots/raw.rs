//! Slice-based entry points
//!
//! Same four operations as the typed API, for callers holding untyped
//! buffers. Every length is checked before any hashing; a wrong length is
//! [`WotsError::InvalidLength`](crate::wots::WotsError::InvalidLength).

use crate::wots::{
    fixed,
    keygen::PublicKey,
    seeds::{AddrSeed, MasterSeed, PrivateSeed, PublicSeed, SeedTriple},
    sign::Signature,
    Result,
};

/// 32-byte master seed → (private seed, public seed, address seed)
pub fn derive(master_seed: &[u8]) -> Result<SeedTriple> {
    Ok(MasterSeed::from_slice(master_seed)?.derive())
}

/// Public key from 32-byte private, public and address seed slices
pub fn generate_public_key(private_seed: &[u8], public_seed: &[u8], addr_seed: &[u8]) -> Result<PublicKey> {
    let private_seed = PrivateSeed::from_slice(private_seed)?;
    let public_seed = PublicSeed::from_slice(public_seed)?;
    let addr_seed = AddrSeed::from_slice(addr_seed)?;
    Ok(super::generate_public_key(&private_seed, &public_seed, &addr_seed))
}

/// Signature over a 32-byte digest from 32-byte seed slices
pub fn sign(private_seed: &[u8], public_seed: &[u8], addr_seed: &[u8], digest: &[u8]) -> Result<Signature> {
    let private_seed = PrivateSeed::from_slice(private_seed)?;
    let public_seed = PublicSeed::from_slice(public_seed)?;
    let addr_seed = AddrSeed::from_slice(addr_seed)?;
    let digest = fixed("digest", digest)?;
    Ok(super::sign(&private_seed, &public_seed, &addr_seed, &digest))
}

/// Public key implied by a 2144-byte signature and a 32-byte digest
pub fn recover_public_key(signature: &[u8], digest: &[u8], public_seed: &[u8], addr_seed: &[u8]) -> Result<PublicKey> {
    let signature = Signature::from_slice(signature)?;
    let digest = fixed("digest", digest)?;
    let public_seed = PublicSeed::from_slice(public_seed)?;
    let addr_seed = AddrSeed::from_slice(addr_seed)?;
    Ok(super::recover_public_key(&signature, &digest, &public_seed, &addr_seed))
}
