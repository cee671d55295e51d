//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use tracing::debug;

use super::client::YahooClient;
use crate::models::TimeSeries;
use crate::services::market_data::{Lookback, MarketDataError, MarketDataProvider, PriceField};

pub struct YahooMarketDataProvider {
    client: YahooClient,
}

impl YahooMarketDataProvider {
    pub fn new(client: YahooClient) -> Self {
        Self { client }
    }

    pub fn from_env() -> Result<Self, MarketDataError> {
        Ok(Self::new(YahooClient::from_env()?))
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_history(
        &self,
        symbol: &str,
        lookback: Lookback,
        field: PriceField,
    ) -> Result<TimeSeries, MarketDataError> {
        let chart = self.client.chart(symbol, lookback).await?;
        let series = chart.to_series(field).map_err(|message| MarketDataError::Parse {
            symbol: symbol.to_string(),
            message,
        })?;

        if series.is_empty() {
            return Err(MarketDataError::Unavailable(symbol.to_string()));
        }

        debug!(
            symbol = %symbol,
            field = %field,
            count = series.len(),
            missing = series.missing_count(),
            "Parsed chart series"
        );
        Ok(series)
    }
}
