//! Market data provider interface.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{SymbolSeriesSet, TimeSeries};

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("provider returned error for {symbol}: {message}")]
    Api { symbol: String, message: String },

    #[error("failed to parse response for {symbol}: {message}")]
    Parse { symbol: String, message: String },

    #[error("no data available for {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

/// Which column of the daily bar to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    Close,
    AdjClose,
}

impl FromStr for PriceField {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "close" => Ok(PriceField::Close),
            "adj-close" | "adjclose" | "adj_close" => Ok(PriceField::AdjClose),
            _ => Err(ParseOptionError {
                kind: "price field",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Close => f.write_str("close"),
            PriceField::AdjClose => f.write_str("adj-close"),
        }
    }
}

/// How far back to request history, e.g. `30d`, `1mo`, `6mo`, `1y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
    YearToDate,
    Max,
}

impl FromStr for Lookback {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseOptionError {
            kind: "lookback",
            value: s.to_string(),
        };
        let s_lower = s.trim().to_ascii_lowercase();
        match s_lower.as_str() {
            "ytd" => return Ok(Lookback::YearToDate),
            "max" => return Ok(Lookback::Max),
            _ => {}
        }

        let split = s_lower
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (count, unit) = s_lower.split_at(split);
        let count: u32 = count.parse().map_err(|_| invalid())?;
        if count == 0 {
            return Err(invalid());
        }
        match unit {
            "d" => Ok(Lookback::Days(count)),
            "wk" => Ok(Lookback::Weeks(count)),
            "mo" => Ok(Lookback::Months(count)),
            "y" => Ok(Lookback::Years(count)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookback::Days(n) => write!(f, "{}d", n),
            Lookback::Weeks(n) => write!(f, "{}wk", n),
            Lookback::Months(n) => write!(f, "{}mo", n),
            Lookback::Years(n) => write!(f, "{}y", n),
            Lookback::YearToDate => f.write_str("ytd"),
            Lookback::Max => f.write_str("max"),
        }
    }
}

/// Source of daily price history. Implementations either return a complete
/// series or an error; callers never see a partially fetched series.
#[async_trait]
pub trait MarketDataProvider {
    async fn get_history(
        &self,
        symbol: &str,
        lookback: Lookback,
        field: PriceField,
    ) -> Result<TimeSeries, MarketDataError>;
}

/// Result of fetching several symbols: what arrived, and what did not.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub series: SymbolSeriesSet,
    pub unavailable: Vec<(String, MarketDataError)>,
}

/// Fetch each symbol in turn. A failed symbol is recorded in
/// [`FetchOutcome::unavailable`] and does not stop the rest.
pub async fn fetch_many<P>(
    provider: &P,
    symbols: &[String],
    lookback: Lookback,
    field: PriceField,
) -> FetchOutcome
where
    P: MarketDataProvider + Send + Sync + ?Sized,
{
    let mut outcome = FetchOutcome::default();
    for symbol in symbols {
        if outcome.series.contains(symbol) {
            continue;
        }
        match provider.get_history(symbol, lookback, field).await {
            Ok(series) => {
                debug!(symbol = %symbol, count = series.len(), "Fetched price history");
                if let Err(e) = outcome.series.insert(symbol.clone(), series) {
                    warn!(symbol = %symbol, error = %e, "Skipping duplicate symbol");
                }
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Price history unavailable");
                outcome.unavailable.push((symbol.clone(), e));
            }
        }
    }
    outcome
}

/// Serves preloaded series; the requested lookback is ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<(String, PriceField), TimeSeries>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: impl Into<String>, field: PriceField, series: TimeSeries) -> Self {
        self.series.insert((symbol.into(), field), series);
        self
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_history(
        &self,
        symbol: &str,
        _lookback: Lookback,
        field: PriceField,
    ) -> Result<TimeSeries, MarketDataError> {
        self.series
            .get(&(symbol.to_string(), field))
            .cloned()
            .ok_or_else(|| MarketDataError::Unavailable(symbol.to_string()))
    }
}
