//! Total portfolio value over the lookback window.

use tracing::{debug, info, warn};

use super::{PipelineContext, PipelineError};
use crate::indicators::clean_set;
use crate::models::Holdings;
use crate::portfolio::{value_portfolio, PortfolioError, PortfolioValuation};
use crate::services::market_data::{fetch_many, Lookback, MarketDataError, PriceField};

#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub holdings: Holdings,
    pub lookback: Lookback,
    pub price_field: PriceField,
}

impl PortfolioConfig {
    pub fn new(holdings: Holdings) -> Self {
        Self {
            holdings,
            lookback: Lookback::Days(30),
            price_field: PriceField::AdjClose,
        }
    }
}

#[derive(Debug)]
pub struct PortfolioReport {
    pub valuation: PortfolioValuation,
    /// Holdings left out because their prices could not be fetched.
    pub unavailable: Vec<(String, MarketDataError)>,
}

pub async fn run_portfolio(
    ctx: &PipelineContext,
    config: &PortfolioConfig,
) -> Result<PortfolioReport, PipelineError> {
    let symbols = config.holdings.symbols();
    let fetched = fetch_many(
        ctx.data_provider.as_ref(),
        &symbols,
        config.lookback,
        config.price_field,
    )
    .await;

    if fetched.series.is_empty() {
        return Err(PipelineError::NoData(symbols.join(", ")));
    }

    let missing: Vec<String> = fetched.unavailable.iter().map(|(s, _)| s.clone()).collect();
    if !missing.is_empty() {
        warn!(symbols = ?missing, "Valuing portfolio without unavailable holdings");
    }
    let holdings = config.holdings.without(&missing);

    // Value only the dates every holding traded on.
    let common = fetched.series.intersection_index();
    if common.is_empty() {
        let symbols: Vec<&str> = fetched.series.symbols().collect();
        return Err(PortfolioError::NoCommonIndex(symbols.join(", ")).into());
    }
    debug!(
        dates = common.len(),
        fetched = fetched.series.len(),
        "Restricted prices to common trading dates"
    );
    let prices = clean_set(&fetched.series.reindexed(&common)?);
    let valuation = value_portfolio(&prices, &holdings)?;
    info!(
        positions = valuation.positions.len(),
        points = valuation.total.len(),
        latest = ?valuation.latest_total(),
        "Valued portfolio"
    );

    Ok(PortfolioReport {
        valuation,
        unavailable: fetched.unavailable,
    })
}
