//! The Solana clusters this app knows how to talk to.

use serde::Deserialize;
use serde::Serialize;

/// A Solana cluster and its public RPC endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Cluster {
    #[default]
    #[strum(serialize = "devnet")]
    Devnet,
    #[strum(serialize = "testnet")]
    Testnet,
    #[strum(to_string = "mainnet-beta", serialize = "mainnet")]
    MainnetBeta,
    #[strum(to_string = "localnet", serialize = "localhost")]
    Localnet,
}

impl Cluster {
    /// Default JSON-RPC endpoint for the cluster.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Human readable name shown next to the balance.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Devnet => "Devnet",
            Self::Testnet => "Testnet",
            Self::MainnetBeta => "Mainnet Beta",
            Self::Localnet => "Localnet",
        }
    }
}
