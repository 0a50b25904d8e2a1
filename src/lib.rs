//! WOTS+ One-Time Signature Library
//!
//! A complete implementation of the Winternitz One-Time Signature Plus
//! primitive over SHA-256 (n = 32, w = 16), as used by ledger accounts that
//! identify a spender by a one-time public key.
//!
//! # Features
//!
//! - **Seed derivation**: one 32-byte master secret → private, public and address seeds
//! - **Chain engine**: bitmasked keyed compression and chain walking
//! - **Encoder**: 64 message digits plus 3 checksum digits
//! - **Key pairs**: public-key generation, signing, public-key recovery
//! - **Keychain**: per-index one-time keys from a single wallet secret
//! - **Account packaging**: 2208-byte wide public keys with optional tag
//!
//! # Security
//!
//! - Every master seed must sign at most once
//! - Secret seeds are zeroized on drop
//! - Public-key comparison is constant time
//!
//! # Example
//!
//! ```rust
//! use wotsp::wots::{hash::sha256, recover_public_key, MasterSeed};
//!
//! let seeds = MasterSeed::generate().derive();
//! let digest = sha256(b"transfer 10 to alice");
//!
//! let public_key = seeds.public_key();
//! let signature = seeds.sign(&digest);
//!
//! let recovered = recover_public_key(&signature, &digest, seeds.public_seed(), seeds.addr_seed());
//! assert_eq!(recovered, public_key);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

/// WOTS+ primitive: parameters, chains, key pairs, keychain
pub mod wots;
/// Ledger-account packaging of public keys
pub mod account;

/// Crate-level error type
pub mod error;
/// Hex helpers shared with the `wotsctl` binary
pub mod utils;

pub use error::Error;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
