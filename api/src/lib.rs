//! This crate contains everything the dashboard needs from the outside world:
//! wallet address parsing, the Solana JSON-RPC client, price providers and
//! user prefs. It has no UI dependencies.

pub mod address;
mod error;
pub mod native_amount;
pub mod network;
pub mod portfolio;
pub mod prefs;
pub mod price_caching;
pub mod price_providers;
pub mod solana_rpc;

pub use error::ApiError;
