//! Defines traits and implementations for external SOL price providers.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::ApiError;

/// A trait for any service that can quote the price of one SOL in USD.
pub trait PriceProvider {
    async fn sol_usd_price(&self) -> Result<Decimal, ApiError>;
}

fn price_from_f64(value: f64) -> Result<Decimal, ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Price(format!("unusable price {value}")));
    }
    Decimal::from_f64(value).ok_or_else(|| ApiError::Price(format!("unusable price {value}")))
}

/// Provides price data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use std::collections::HashMap;

    const URL: &str = "https://api.coingecko.com/api/v3/simple/price?ids=solana&vs_currencies=usd";

    /// The structure of the JSON response from CoinGecko's simple price API.
    #[derive(Deserialize, Debug)]
    struct CoinGeckoResponse {
        solana: HashMap<String, f64>,
    }

    pub(super) fn parse(body: &str) -> Result<Decimal, ApiError> {
        let resp: CoinGeckoResponse = serde_json::from_str(body)?;
        let usd = resp
            .solana
            .get("usd")
            .ok_or_else(|| ApiError::Price("no usd quote for solana".into()))?;
        price_from_f64(*usd)
    }

    /// An implementation of the `PriceProvider` trait for CoinGecko.
    #[derive(Debug, Clone, Default)]
    pub struct CoinGecko {
        http: reqwest::Client,
    }

    impl PriceProvider for CoinGecko {
        async fn sol_usd_price(&self) -> Result<Decimal, ApiError> {
            let body = self
                .http
                .get(URL)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            parse(&body)
        }
    }
}

/// Provides price data from the CoinPaprika API.
pub mod coin_paprika {
    use super::*;
    use serde_json::Value;

    const URL: &str = "https://api.coinpaprika.com/v1/tickers/sol-solana?quotes=USD";

    pub(super) fn parse(body: &str) -> Result<Decimal, ApiError> {
        // The price lives at resp["quotes"]["USD"]["price"].
        let resp: Value = serde_json::from_str(body)?;
        let usd = resp
            .get("quotes")
            .and_then(|q| q.get("USD"))
            .and_then(|q| q.get("price"))
            .and_then(Value::as_f64)
            .ok_or_else(|| ApiError::Price("no USD quote in ticker".into()))?;
        price_from_f64(usd)
    }

    /// An implementation of the `PriceProvider` trait for CoinPaprika.
    #[derive(Debug, Clone, Default)]
    pub struct CoinPaprika {
        http: reqwest::Client,
    }

    impl PriceProvider for CoinPaprika {
        async fn sol_usd_price(&self) -> Result<Decimal, ApiError> {
            let body = self
                .http
                .get(URL)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            parse(&body)
        }
    }
}

/// The price providers selectable from user prefs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PriceProviderKind {
    #[default]
    #[strum(serialize = "coingecko")]
    CoinGecko,
    #[strum(serialize = "coinpaprika")]
    CoinPaprika,
}

/// The provider picked in prefs, holding its own HTTP client.
#[derive(Debug, Clone)]
pub enum PriceFeed {
    CoinGecko(coin_gecko::CoinGecko),
    CoinPaprika(coin_paprika::CoinPaprika),
}

impl From<PriceProviderKind> for PriceFeed {
    fn from(kind: PriceProviderKind) -> Self {
        match kind {
            PriceProviderKind::CoinGecko => Self::CoinGecko(Default::default()),
            PriceProviderKind::CoinPaprika => Self::CoinPaprika(Default::default()),
        }
    }
}

impl PriceProvider for PriceFeed {
    async fn sol_usd_price(&self) -> Result<Decimal, ApiError> {
        match self {
            Self::CoinGecko(p) => p.sol_usd_price().await,
            Self::CoinPaprika(p) => p.sol_usd_price().await,
        }
    }
}
