//! Portfolio records and the service that builds them.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::address::WalletAddress;
use crate::prefs::user_prefs::UserPrefs;
use crate::price_caching::CachedPriceProvider;
use crate::price_providers::PriceProvider;
use crate::price_providers::PriceFeed;
use crate::solana_rpc::BalanceSource;
use crate::solana_rpc::SolanaRpcClient;
use crate::ApiError;

/// A non-native token balance held by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHolding {
    mint_address: String,
    /// raw amount as reported by the node, kept as text to preserve precision.
    amount: String,
    decimals: u8,
    symbol: Option<String>,
}

impl TokenHolding {
    pub fn new(
        mint_address: impl Into<String>,
        amount: impl Into<String>,
        decimals: u8,
        symbol: Option<String>,
    ) -> Self {
        Self {
            mint_address: mint_address.into(),
            amount: amount.into(),
            decimals,
            symbol,
        }
    }

    pub fn mint_address(&self) -> &str {
        &self.mint_address
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

/// What the dashboard displays for one wallet.
///
/// Built fresh by every successful fetch and swapped in whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// native balance in SOL.
    pub native_balance: Decimal,
    pub tokens: Vec<TokenHolding>,
    pub total_value_usd: Decimal,
}

/// Produces a snapshot for a wallet address in a single attempt.
pub trait PortfolioFetcher {
    async fn fetch_portfolio(&self, address: &str) -> Result<PortfolioSnapshot, ApiError>;
}

/// Builds snapshots from a balance source and an optional price provider.
pub struct PortfolioService<B, P> {
    balances: B,
    pricing: Option<P>,
}

impl<B: BalanceSource, P: PriceProvider> PortfolioService<B, P> {
    pub fn new(balances: B, pricing: Option<P>) -> Self {
        Self { balances, pricing }
    }

    /// USD value of `native_balance`. Pricing problems never fail a fetch;
    /// they just leave the value at zero.
    async fn value_in_usd(&self, native_balance: Decimal) -> Decimal {
        let Some(pricing) = &self.pricing else {
            return Decimal::ZERO;
        };
        match pricing.sol_usd_price().await {
            Ok(price) => native_balance.checked_mul(price).unwrap_or_else(|| {
                dioxus_logger::tracing::warn!("overflow valuing {} SOL at {}", native_balance, price);
                Decimal::ZERO
            }),
            Err(e) => {
                dioxus_logger::tracing::warn!("failed to fetch SOL price: {}", e);
                Decimal::ZERO
            }
        }
    }
}

impl<B: BalanceSource, P: PriceProvider> PortfolioFetcher for PortfolioService<B, P> {
    async fn fetch_portfolio(&self, address: &str) -> Result<PortfolioSnapshot, ApiError> {
        let wallet: WalletAddress = address.parse()?;
        dioxus_logger::tracing::info!("fetching portfolio data for account: {}", wallet);

        let native_balance = self.balances.get_balance(&wallet).await?.to_sol();
        let total_value_usd = self.value_in_usd(native_balance).await;

        // token enumeration is not wired up yet.
        Ok(PortfolioSnapshot {
            native_balance,
            tokens: vec![],
            total_value_usd,
        })
    }
}

/// The service used by the app: JSON-RPC balances, cached public prices.
pub type SolanaPortfolioService =
    PortfolioService<SolanaRpcClient, CachedPriceProvider<PriceFeed>>;

impl SolanaPortfolioService {
    pub fn from_prefs(prefs: &UserPrefs) -> Self {
        let pricing = prefs
            .price_preference()
            .provider()
            .map(|kind| CachedPriceProvider::new(PriceFeed::from(kind)));
        let balances = SolanaRpcClient::new(prefs.rpc_endpoint());
        dioxus_logger::tracing::info!(
            "using rpc endpoint {} (pricing: {:?})",
            balances.endpoint(),
            prefs.price_preference()
        );
        Self::new(balances, pricing)
    }
}
