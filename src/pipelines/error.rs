use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::models::SeriesError;
use crate::portfolio::PortfolioError;
use crate::services::market_data::MarketDataError;
use crate::universe::UniverseError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Universe(#[from] UniverseError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    #[error("no price data for {0}")]
    NoData(String),
}

/// Why a symbol was left out of a batch result.
#[derive(Debug, Error)]
pub enum ExclusionReason {
    #[error("data unavailable: {0}")]
    Unavailable(MarketDataError),

    #[error(transparent)]
    Indicator(IndicatorError),
}
