//! SMA crossover buy/sell signals for one symbol.

use tracing::info;

use super::{PipelineContext, PipelineError};
use crate::indicators::fill_missing;
use crate::models::TimeSeries;
use crate::services::market_data::{Lookback, PriceField};
use crate::signals::{CrossoverAnalysis, CrossoverDetector};

#[derive(Debug, Clone)]
pub struct SmaCrossoverConfig {
    pub symbol: String,
    pub lookback: Lookback,
    pub price_field: PriceField,
    pub fast_window: usize,
    pub slow_window: usize,
}

impl Default for SmaCrossoverConfig {
    fn default() -> Self {
        Self {
            symbol: "BAJFINANCE.NS".to_string(),
            lookback: Lookback::Months(6),
            price_field: PriceField::Close,
            fast_window: 5,
            slow_window: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmaCrossoverReport {
    pub symbol: String,
    pub prices: TimeSeries,
    pub analysis: CrossoverAnalysis,
}

pub async fn run_sma_crossover(
    ctx: &PipelineContext,
    config: &SmaCrossoverConfig,
) -> Result<SmaCrossoverReport, PipelineError> {
    let detector = CrossoverDetector::new(config.fast_window, config.slow_window)?;

    let raw = ctx
        .data_provider
        .get_history(&config.symbol, config.lookback, config.price_field)
        .await?;
    let prices = fill_missing(&raw);
    if !prices.has_values() {
        return Err(PipelineError::NoData(config.symbol.clone()));
    }

    let analysis = detector.analyze(&prices)?;
    info!(
        symbol = %config.symbol,
        buys = analysis.crossovers.buys.len(),
        sells = analysis.crossovers.sells.len(),
        "Detected crossovers"
    );

    Ok(SmaCrossoverReport {
        symbol: config.symbol.clone(),
        prices,
        analysis,
    })
}
