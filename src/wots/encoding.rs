//! Base-w digit encoding and checksum
//!
//! A digest becomes `LEN_1` message digits (its nibbles, high nibble first)
//! followed by `LEN_2` checksum digits encoding `sum(W - 1 - digit)`.
//! Advancing any message digit lowers the checksum, so some checksum digit
//! would have to move backwards along its chain, which needs a preimage.

use crate::wots::params::*;

/// Split `input` into `D` base-w digits, most significant nibble first
///
/// Consumes `ceil(D * LOG_W / 8)` bytes; callers pass at least that many.
pub(crate) fn base_w<const D: usize>(input: &[u8]) -> [u8; D] {
    let mut out = [0u8; D];
    let mut bits = 0usize;
    let mut total = 0u8;
    let mut consumed = 0usize;

    for digit in out.iter_mut() {
        if bits == 0 {
            total = input[consumed];
            consumed += 1;
            bits = 8;
        }
        bits -= LOG_W;
        *digit = (total >> bits) & (W as u8 - 1);
    }
    out
}

/// The `LEN_1` message digits of a digest: its nibbles, high nibble first
pub fn message_digits(digest: &[u8; N]) -> [u8; LEN_1] {
    base_w::<LEN_1>(digest)
}

/// Numeric value of the checksum over the message digits
pub fn checksum(msg_digits: &[u8; LEN_1]) -> u32 {
    msg_digits
        .iter()
        .map(|&d| (W as u32 - 1) - d as u32)
        .sum()
}

/// Checksum digits for the given message digits
pub fn checksum_digits(msg_digits: &[u8; LEN_1]) -> [u8; LEN_2] {
    let shifted = (checksum(msg_digits) as u64) << CSUM_SHIFT;
    let bytes = shifted.to_be_bytes();
    base_w::<LEN_2>(&bytes[8 - CSUM_BYTES..])
}

/// Per-chain signing depth for a digest: message digits then checksum digits
///
/// Signer and verifier both derive the chain walk from this, so it must be
/// recomputed from the digest itself and never transmitted.
pub fn chain_lengths(digest: &[u8; N]) -> [u8; LEN] {
    let msg = message_digits(digest);
    let csum = checksum_digits(&msg);

    let mut lengths = [0u8; LEN];
    lengths[..LEN_1].copy_from_slice(&msg);
    lengths[LEN_1..].copy_from_slice(&csum);
    lengths
}
