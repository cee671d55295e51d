//! Command-line options for each binary.

use std::path::PathBuf;

use clap::Parser;

use crate::models::{Holding, Holdings};
use crate::pipelines::gainers_losers::GainersLosersConfig;
use crate::pipelines::portfolio::PortfolioConfig;
use crate::pipelines::sma_crossover::SmaCrossoverConfig;
use crate::pipelines::volatility::VolatilityConfig;
use crate::services::market_data::{Lookback, PriceField};

#[derive(Debug, Parser)]
#[command(
    name = "gainers-losers",
    about = "Rank a random sample of the universe by percent change over the lookback"
)]
pub struct GainersLosersArgs {
    /// CSV with at least `Symbol` and `Company Name` columns
    #[arg(long, default_value = "nifty50list.csv")]
    pub universe: PathBuf,

    /// Number of instruments to draw from the universe
    #[arg(long, default_value_t = 20)]
    pub sample_size: usize,

    /// How many gainers and losers to report
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Seed for the instrument draw; a fresh seed is used when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exchange suffix appended to every universe symbol
    #[arg(long, default_value = ".NS", allow_hyphen_values = true)]
    pub symbol_suffix: String,

    #[arg(long, default_value = "1mo")]
    pub lookback: Lookback,

    #[arg(long, default_value = "adj-close")]
    pub price_field: PriceField,

    /// Where to write the `Stock Symbol,Percent Change` CSV
    #[arg(long, default_value = "percent_change.csv")]
    pub output: PathBuf,

    /// Optional PNG bar chart of gainers and losers
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

impl GainersLosersArgs {
    pub fn to_config(&self) -> GainersLosersConfig {
        GainersLosersConfig {
            sample_size: self.sample_size,
            top_k: self.top,
            symbol_suffix: self.symbol_suffix.clone(),
            lookback: self.lookback,
            price_field: self.price_field,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sma-crossover",
    about = "Buy/sell signals from a fast/slow simple moving average crossover"
)]
pub struct SmaCrossoverArgs {
    #[arg(long, default_value = "BAJFINANCE.NS")]
    pub symbol: String,

    #[arg(long, default_value = "6mo")]
    pub lookback: Lookback,

    #[arg(long, default_value = "close")]
    pub price_field: PriceField,

    #[arg(long, default_value_t = 5)]
    pub fast_window: usize,

    #[arg(long, default_value_t = 20)]
    pub slow_window: usize,

    /// Optional PNG of price, SMAs and signals
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

impl SmaCrossoverArgs {
    pub fn to_config(&self) -> SmaCrossoverConfig {
        SmaCrossoverConfig {
            symbol: self.symbol.clone(),
            lookback: self.lookback,
            price_field: self.price_field,
            fast_window: self.fast_window,
            slow_window: self.slow_window,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "volatility",
    about = "Daily returns with rolling mean and standard deviation"
)]
pub struct VolatilityArgs {
    #[arg(long, default_value = "RELIANCE.NS")]
    pub symbol: String,

    #[arg(long, default_value = "6mo")]
    pub lookback: Lookback,

    #[arg(long, default_value = "close")]
    pub price_field: PriceField,

    #[arg(long, default_value_t = 7)]
    pub window: usize,

    /// Keep the leading rows where the rolling window is not yet full
    #[arg(long)]
    pub keep_incomplete: bool,

    /// Optional PNG of returns and rolling statistics
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

impl VolatilityArgs {
    pub fn to_config(&self) -> VolatilityConfig {
        VolatilityConfig {
            symbol: self.symbol.clone(),
            lookback: self.lookback,
            price_field: self.price_field,
            window: self.window,
            drop_incomplete: !self.keep_incomplete,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "portfolio-tracker",
    about = "Total value of a fixed-quantity portfolio over the lookback"
)]
pub struct PortfolioArgs {
    /// TOML file with a `[holdings]` table of symbol = quantity
    #[arg(long)]
    pub holdings_file: Option<PathBuf>,

    /// Extra holding as SYMBOL=QUANTITY; may be repeated
    #[arg(long = "holding")]
    pub holdings: Vec<Holding>,

    #[arg(long, default_value = "30d")]
    pub lookback: Lookback,

    #[arg(long, default_value = "adj-close")]
    pub price_field: PriceField,

    #[arg(long, default_value = "outputs/portfoliotracker.png")]
    pub chart: PathBuf,

    /// Skip writing the chart
    #[arg(long)]
    pub no_chart: bool,
}

impl PortfolioArgs {
    pub fn to_config(&self, holdings: Holdings) -> PortfolioConfig {
        PortfolioConfig {
            holdings,
            lookback: self.lookback,
            price_field: self.price_field,
        }
    }
}
