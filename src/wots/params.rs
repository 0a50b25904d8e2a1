//! WOTS+ Parameters
//!
//! One fixed parameter set: SHA-256, n = 32 bytes, Winternitz width w = 16.
//! Signer and verifier must agree on every value here, so none of them is
//! configurable at runtime.

/// Hash output size and size of every seed, digest and chain value (SHA-256)
pub const N: usize = 32;

/// Winternitz parameter: values per chain
pub const W: usize = 16;

/// log2(W): bits per base-w digit
pub const LOG_W: usize = 4;

/// Message digits: every nibble of the 32-byte digest
pub const LEN_1: usize = (8 * N) / LOG_W;

/// Checksum digits
///
/// The checksum is at most `LEN_1 * (W - 1) = 960`, which fits in three
/// 4-bit digits (4095).
pub const LEN_2: usize = 3;

/// Total number of hash chains
pub const LEN: usize = LEN_1 + LEN_2;

/// Checksum field width in bytes after byte alignment
pub const CSUM_BYTES: usize = (LEN_2 * LOG_W + 7) / 8;

/// Left shift that byte-aligns the checksum field
pub const CSUM_SHIFT: usize = (8 - (LEN_2 * LOG_W) % 8) % 8;

/// Signature size (one intermediate chain value per chain)
pub const SIG_BYTES: usize = LEN * N;

/// Public key size (one chain tip per chain)
pub const PK_BYTES: usize = LEN * N;

/// Domain padding for the chain compression function
pub const PADDING_F: u64 = 0;

/// Domain padding for the keyed PRF
pub const PADDING_PRF: u64 = 3;

/// Seed derivation tag for the private seed
pub const TAG_PRIVATE: &[u8; 4] = b"seed";

/// Seed derivation tag for the public seed
pub const TAG_PUBLIC: &[u8; 4] = b"publ";

/// Seed derivation tag for the address seed
pub const TAG_ADDR: &[u8; 4] = b"addr";

/// Highest hash-step index a chain walk may use
pub const MAX_CHAIN_STEP: u32 = (W - 1) as u32;
