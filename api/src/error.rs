//! Error types for all remote lookups performed by this crate.

use thiserror::Error;

/// Everything that can go wrong while building a portfolio snapshot.
///
/// The dashboard shows one generic message for all of these. The variants
/// exist so that logs can tell a bad address from an unreachable node.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(#[from] crate::address::ParseAddressError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed rpc response: {0}")]
    MalformedResponse(String),

    #[error("price lookup failed: {0}")]
    Price(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}
