//! Error types for the outer surfaces of the script core
//!
//! Decoding, execution and classification never fail with an error; they
//! report rejection through `bool` or `Option`. These variants cover
//! configuration lookup and user-supplied text only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid network configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Address checksum mismatch: {0}")]
    ChecksumMismatch(String),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
