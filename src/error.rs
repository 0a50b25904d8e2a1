//! Error types for the library

use thiserror::Error;

/// Any error surfaced by this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Failure in the WOTS+ layer
    #[error("WOTS+ error: {0}")]
    Wots(#[from] crate::wots::WotsError),
    /// Failure decoding an account key
    #[error("Account error: {0}")]
    Account(#[from] crate::account::AccountError),
    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Malformed caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-wide result
pub type Result<T> = std::result::Result<T, Error>;
