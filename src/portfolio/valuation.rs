//! Portfolio value over time: the per-timestamp sum of price x quantity.

use tracing::{debug, warn};

use crate::models::{Holdings, SymbolSeriesSet, TimeSeries};
use crate::portfolio::PortfolioError;

/// Value of one holding over time.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValue {
    pub symbol: String,
    pub quantity: f64,
    pub value: TimeSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioValuation {
    /// Sum of all usable positions, on the common price index.
    pub total: TimeSeries,
    pub positions: Vec<PositionValue>,
    /// Held symbols whose price series had no observed values.
    pub excluded: Vec<String>,
}

impl PortfolioValuation {
    pub fn latest_total(&self) -> Option<f64> {
        self.total.last().and_then(|o| o.value)
    }
}

/// Value `holdings` against a cleaned, index-aligned price set.
///
/// Every priced symbol needs a quantity and every holding needs prices; a
/// mismatch fails before any arithmetic. Symbols with no data at all are
/// excluded and reported rather than failing the whole valuation.
pub fn value_portfolio(
    prices: &SymbolSeriesSet,
    holdings: &Holdings,
) -> Result<PortfolioValuation, PortfolioError> {
    validate(prices, holdings)?;

    let mut positions = Vec::with_capacity(holdings.len());
    let mut excluded = Vec::new();

    for (symbol, series) in prices.iter() {
        if !series.has_values() {
            warn!(symbol = %symbol, "No price data, excluding from portfolio");
            excluded.push(symbol.to_string());
            continue;
        }
        let quantity = holdings
            .quantity(symbol)
            .ok_or_else(|| PortfolioError::MissingQuantity(symbol.to_string()))?;
        let value = series.with_values(
            series
                .values()
                .into_iter()
                .map(|price| price.map(|p| p * quantity))
                .collect(),
        );
        debug!(symbol = %symbol, quantity, "Valued position");
        positions.push(PositionValue {
            symbol: symbol.to_string(),
            quantity,
            value,
        });
    }

    let Some(first) = positions.first() else {
        return Err(PortfolioError::NoUsablePositions);
    };

    // A timestamp where any position is missing has no defined total.
    let totals = (0..first.value.len())
        .map(|i| {
            positions
                .iter()
                .map(|p| p.value.value_at(i))
                .sum::<Option<f64>>()
        })
        .collect();
    let total = first.value.with_values(totals);

    Ok(PortfolioValuation {
        total,
        positions,
        excluded,
    })
}

fn validate(prices: &SymbolSeriesSet, holdings: &Holdings) -> Result<(), PortfolioError> {
    if holdings.is_empty() {
        return Err(PortfolioError::EmptyHoldings);
    }
    if let Some(symbol) = prices.symbols().find(|s| holdings.quantity(s).is_none()) {
        return Err(PortfolioError::MissingQuantity(symbol.to_string()));
    }
    if let Some(holding) = holdings.iter().find(|h| !prices.contains(&h.symbol)) {
        return Err(PortfolioError::MissingPrices(holding.symbol.clone()));
    }
    if prices.common_index().is_none() {
        let mut series = prices.iter();
        if let Some((_, reference)) = series.next() {
            if let Some((symbol, _)) = series.find(|(_, s)| !s.same_index(reference)) {
                return Err(PortfolioError::MisalignedIndex(symbol.to_string()));
            }
        }
    }
    Ok(())
}
