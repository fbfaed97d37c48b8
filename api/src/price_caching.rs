//! Handles the caching logic for external price provider data.

use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use web_time::Instant;

use crate::price_providers::PriceProvider;
use crate::ApiError;

/// How long a fetched price stays fresh.
pub const CACHE_DURATION: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
struct CachedPrice {
    price: Decimal,
    last_fetched: Instant,
}

/// Wraps a provider with a lazy, time-based cache.
///
/// The inner provider is only called when the cache is empty or older than
/// the configured duration. Failures are not cached.
pub struct CachedPriceProvider<P> {
    inner: P,
    ttl: Duration,
    cache: RwLock<Option<CachedPrice>>,
}

impl<P: PriceProvider> CachedPriceProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, CACHE_DURATION)
    }

    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(None),
        }
    }

    fn fresh(&self, cached: &Option<CachedPrice>) -> Option<Decimal> {
        cached
            .as_ref()
            .filter(|c| c.last_fetched.elapsed() < self.ttl)
            .map(|c| c.price)
    }
}

impl<P: PriceProvider> PriceProvider for CachedPriceProvider<P> {
    async fn sol_usd_price(&self) -> Result<Decimal, ApiError> {
        if let Some(price) = self.fresh(&*self.cache.read().await) {
            return Ok(price);
        }

        let mut write_lock = self.cache.write().await;

        // another task may have refreshed the cache while we waited for the lock.
        if let Some(price) = self.fresh(&write_lock) {
            return Ok(price);
        }

        let price = self.inner.sol_usd_price().await?;
        *write_lock = Some(CachedPrice {
            price,
            last_fetched: Instant::now(),
        });
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl PriceProvider for CountingProvider {
        async fn sol_usd_price(&self) -> Result<Decimal, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ApiError::Price("down".into()))
            } else {
                Ok(Decimal::new(150, 0))
            }
        }
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let cached = CachedPriceProvider::new(CountingProvider::new(false));
        assert_eq!(cached.sol_usd_price().await.unwrap(), Decimal::new(150, 0));
        assert_eq!(cached.sol_usd_price().await.unwrap(), Decimal::new(150, 0));
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        let cached = CachedPriceProvider::with_ttl(CountingProvider::new(false), Duration::ZERO);
        cached.sol_usd_price().await.unwrap();
        cached.sol_usd_price().await.unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cached = CachedPriceProvider::new(CountingProvider::new(true));
        assert!(cached.sol_usd_price().await.is_err());
        assert!(cached.sol_usd_price().await.is_err());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }
}
