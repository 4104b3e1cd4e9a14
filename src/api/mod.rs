use async_trait::async_trait;

use crate::error::Result;
use crate::models::RawMarketResponse;

pub mod dexscreener;

pub use dexscreener::DexScreenerClient;

/// Source of the raw pair listing consumed by the analyzer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource {
    async fn fetch_pairs(&self) -> Result<RawMarketResponse>;
}
