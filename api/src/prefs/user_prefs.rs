use super::price_preference::PricePreference;
use crate::network::Cluster;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    cluster: Cluster,
    rpc_endpoint: String,
    price_preference: PricePreference,
}

impl UserPrefs {
    /// Reads prefs from environment variables, falling back to in-code defaults.
    ///
    /// # Environment Variables
    /// - `SOLANA_CLUSTER`: "devnet", "testnet", "mainnet-beta" or "localnet".
    ///   defaults to devnet.
    /// - `SOLANA_RPC_URL`: overrides the cluster's public endpoint.
    /// - `PRICE_PROVIDER`: "coingecko", "coinpaprika" or "none" (default).
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`UserPrefs::from_env`] with an arbitrary variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cluster = match lookup("SOLANA_CLUSTER") {
            Some(name) => Cluster::from_str(name.trim()).unwrap_or_else(|_| {
                dioxus_logger::tracing::warn!("unknown SOLANA_CLUSTER '{}', using devnet", name);
                Cluster::default()
            }),
            None => Cluster::default(),
        };

        let rpc_endpoint = lookup("SOLANA_RPC_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| cluster.endpoint().to_string());

        let price_preference = PricePreference::from_setting(lookup("PRICE_PROVIDER").as_deref());

        Self {
            cluster,
            rpc_endpoint,
            price_preference,
        }
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn rpc_endpoint(&self) -> &str {
        &self.rpc_endpoint
    }

    pub fn price_preference(&self) -> &PricePreference {
        &self.price_preference
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_providers::PriceProviderKind;
    use std::collections::HashMap;

    fn prefs(vars: &[(&str, &str)]) -> UserPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_devnet_without_pricing() {
        let prefs = UserPrefs::default();
        assert_eq!(prefs.cluster(), Cluster::Devnet);
        assert_eq!(prefs.rpc_endpoint(), "https://api.devnet.solana.com");
        assert!(prefs.price_preference().is_disabled());
    }

    #[test]
    fn cluster_selects_endpoint() {
        let prefs = prefs(&[("SOLANA_CLUSTER", "mainnet-beta")]);
        assert_eq!(prefs.cluster(), Cluster::MainnetBeta);
        assert_eq!(prefs.rpc_endpoint(), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn explicit_endpoint_wins() {
        let prefs = prefs(&[
            ("SOLANA_CLUSTER", "testnet"),
            ("SOLANA_RPC_URL", "http://10.0.0.5:8899"),
        ]);
        assert_eq!(prefs.cluster(), Cluster::Testnet);
        assert_eq!(prefs.rpc_endpoint(), "http://10.0.0.5:8899");
    }

    #[test]
    fn bad_cluster_falls_back_to_devnet() {
        let prefs = prefs(&[("SOLANA_CLUSTER", "nope"), ("SOLANA_RPC_URL", "  ")]);
        assert_eq!(prefs.cluster(), Cluster::Devnet);
        assert_eq!(prefs.rpc_endpoint(), Cluster::Devnet.endpoint());
    }

    #[test]
    fn price_provider_is_read() {
        let prefs = prefs(&[("PRICE_PROVIDER", "coinpaprika")]);
        assert_eq!(
            prefs.price_preference().provider(),
            Some(PriceProviderKind::CoinPaprika)
        );
    }
}
