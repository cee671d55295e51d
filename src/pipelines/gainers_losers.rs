//! Top gainers and losers over a random sample of the universe.

use rand::Rng;
use tracing::{info, warn};

use super::error::ExclusionReason;
use super::{PipelineContext, PipelineError};
use crate::indicators::{clean_set, total_percent_changes};
use crate::models::Instrument;
use crate::services::market_data::{fetch_many, Lookback, PriceField};
use crate::signals::{RankedChange, Ranking};
use crate::universe::Universe;

#[derive(Debug, Clone)]
pub struct GainersLosersConfig {
    pub sample_size: usize,
    pub top_k: usize,
    /// Appended to each universe symbol to form the provider ticker.
    pub symbol_suffix: String,
    pub lookback: Lookback,
    pub price_field: PriceField,
}

impl Default for GainersLosersConfig {
    fn default() -> Self {
        Self {
            sample_size: 20,
            top_k: 5,
            symbol_suffix: ".NS".to_string(),
            lookback: Lookback::Months(1),
            price_field: PriceField::AdjClose,
        }
    }
}

#[derive(Debug)]
pub struct GainersLosersReport {
    pub selected: Vec<Instrument>,
    pub ranking: Ranking,
    pub top_k: usize,
    pub excluded: Vec<(String, ExclusionReason)>,
}

impl GainersLosersReport {
    pub fn gainers(&self) -> &[RankedChange] {
        self.ranking.gainers(self.top_k)
    }

    pub fn losers(&self) -> &[RankedChange] {
        self.ranking.losers(self.top_k)
    }
}

pub async fn run_gainers_losers<R>(
    ctx: &PipelineContext,
    universe: &Universe,
    config: &GainersLosersConfig,
    rng: &mut R,
) -> Result<GainersLosersReport, PipelineError>
where
    R: Rng + ?Sized,
{
    let selected = universe.sample(config.sample_size, rng)?;
    let tickers: Vec<String> = selected
        .iter()
        .map(|i| i.ticker(&config.symbol_suffix))
        .collect();
    info!(count = tickers.len(), lookback = %config.lookback, "Selected instruments");

    let fetched = fetch_many(
        ctx.data_provider.as_ref(),
        &tickers,
        config.lookback,
        config.price_field,
    )
    .await;

    let prices = clean_set(&fetched.series.aligned()?);

    let mut excluded: Vec<(String, ExclusionReason)> = fetched
        .unavailable
        .into_iter()
        .map(|(symbol, e)| (symbol, ExclusionReason::Unavailable(e)))
        .collect();

    let mut changes = Vec::with_capacity(prices.len());
    for (symbol, outcome) in total_percent_changes(&prices) {
        match outcome {
            Ok(change) => changes.push((symbol, change)),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Excluding symbol from ranking");
                excluded.push((symbol, ExclusionReason::Indicator(e)));
            }
        }
    }

    let ranking = Ranking::new(changes);
    info!(
        ranked = ranking.len(),
        excluded = excluded.len(),
        "Ranked percent changes"
    );

    Ok(GainersLosersReport {
        selected,
        ranking,
        top_k: config.top_k,
        excluded,
    })
}
