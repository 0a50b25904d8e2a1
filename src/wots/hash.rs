//! Keyed PRF and bitmasked compression (thash F)

use crate::wots::address::{Address, SELECT_KEY, SELECT_MASK};
use crate::wots::params::*;
use sha2::{Digest, Sha256};

/// `v` as a big-endian integer, zero-padded on the left to `N` bytes
pub const fn u64_block(v: u64) -> [u8; N] {
    let mut out = [0u8; N];
    let bytes = v.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        out[N - 8 + i] = bytes[i];
        i += 1;
    }
    out
}

const PAD_F: [u8; N] = u64_block(PADDING_F);
const PAD_PRF: [u8; N] = u64_block(PADDING_PRF);

/// SHA-256 of arbitrary data
pub fn sha256(data: &[u8]) -> [u8; N] {
    Sha256::digest(data).into()
}

/// `SHA-256(PAD_PRF || seed || input)`
pub fn prf(seed: &[u8; N], input: &[u8; N]) -> [u8; N] {
    let mut h = Sha256::new();
    h.update(PAD_PRF);
    h.update(seed);
    h.update(input);
    h.finalize().into()
}

/// One chain step: `SHA-256(PAD_F || key || (input XOR mask))`
///
/// `key` and `mask` are PRF outputs keyed by the public seed over `addr` with
/// the key/mask selector set to 0 and 1. `addr` itself is not modified.
pub fn thash_f(input: &[u8; N], public_seed: &[u8; N], addr: &Address) -> [u8; N] {
    let key = prf(public_seed, &addr.with_key_and_mask(SELECT_KEY).to_bytes());
    let mask = prf(public_seed, &addr.with_key_and_mask(SELECT_MASK).to_bytes());

    let mut masked = [0u8; N];
    for ((out, x), m) in masked.iter_mut().zip(input).zip(mask.iter()) {
        *out = x ^ m;
    }

    let mut h = Sha256::new();
    h.update(PAD_F);
    h.update(key);
    h.update(masked);
    h.finalize().into()
}
