use crate::price_providers::PriceProviderKind;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// Whether the dashboard values the portfolio in USD, and with which provider.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum PricePreference {
    /// No price lookups. The total value always reads 0.
    #[default]
    Disabled,

    /// Look up the SOL/USD price and value the native balance with it.
    Enabled { provider: PriceProviderKind },
}

impl PricePreference {
    /// Builds the preference from a `PRICE_PROVIDER` setting.
    ///
    /// `none`, `off`, an empty value, or an unknown provider name all mean
    /// disabled.
    pub fn from_setting(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim) else {
            return Self::Disabled;
        };
        if value.is_empty() || value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("off") {
            return Self::Disabled;
        }
        match PriceProviderKind::from_str(value) {
            Ok(provider) => Self::Enabled { provider },
            Err(_) => {
                dioxus_logger::tracing::warn!("unknown PRICE_PROVIDER '{}', pricing disabled", value);
                Self::Disabled
            }
        }
    }

    pub fn provider(&self) -> Option<PriceProviderKind> {
        match self {
            Self::Disabled => None,
            Self::Enabled { provider } => Some(*provider),
        }
    }
}
