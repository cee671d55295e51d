//! Daily returns and their rolling mean / standard deviation.

use tracing::info;

use super::{PipelineContext, PipelineError};
use crate::indicators::volatility::RollingStats;
use crate::indicators::{daily_percent_changes, fill_missing, IndicatorError};
use crate::models::TimeSeries;
use crate::services::market_data::{Lookback, PriceField};

#[derive(Debug, Clone)]
pub struct VolatilityConfig {
    pub symbol: String,
    pub lookback: Lookback,
    pub price_field: PriceField,
    pub window: usize,
    /// Drop the leading rows where the window is not yet full.
    pub drop_incomplete: bool,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            symbol: "RELIANCE.NS".to_string(),
            lookback: Lookback::Months(6),
            price_field: PriceField::Close,
            window: 7,
            drop_incomplete: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VolatilityReport {
    pub symbol: String,
    pub prices: TimeSeries,
    pub daily_returns: TimeSeries,
    pub stats: RollingStats,
}

pub async fn run_volatility(
    ctx: &PipelineContext,
    config: &VolatilityConfig,
) -> Result<VolatilityReport, PipelineError> {
    if config.window == 0 {
        return Err(IndicatorError::InvalidWindow.into());
    }

    let raw = ctx
        .data_provider
        .get_history(&config.symbol, config.lookback, config.price_field)
        .await?;
    let prices = fill_missing(&raw);
    if !prices.has_values() {
        return Err(PipelineError::NoData(config.symbol.clone()));
    }
    if prices.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            actual: prices.len(),
        }
        .into());
    }

    let daily_returns = daily_percent_changes(&prices);
    let mut stats = RollingStats::compute(&daily_returns, config.window)?;
    if config.drop_incomplete {
        stats = stats.drop_incomplete();
    }
    info!(
        symbol = %config.symbol,
        returns = daily_returns.len(),
        window = config.window,
        "Computed rolling statistics"
    );

    Ok(VolatilityReport {
        symbol: config.symbol.clone(),
        prices,
        daily_returns,
        stats,
    })
}
