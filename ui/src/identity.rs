//! The wallet identity the dashboard is showing.

/// Account reference and active network label, as supplied by whatever
/// wallet connection is in use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub address: Option<String>,
    pub network_label: Option<String>,
}

impl Identity {
    pub fn connected(address: impl Into<String>, network_label: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            network_label: Some(network_label.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    /// The connected address. An empty string counts as not connected.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }

    pub fn network_label(&self) -> &str {
        self.network_label.as_deref().unwrap_or("Unknown")
    }
}
