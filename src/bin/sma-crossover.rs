//! SMA Crossover
//!
//! Fetches one symbol, computes fast and slow simple moving averages and
//! prints every buy/sell crossover.

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use equity_pulse::charts;
use equity_pulse::config::cli::SmaCrossoverArgs;
use equity_pulse::logging;
use equity_pulse::models::SignalDirection;
use equity_pulse::pipelines::sma_crossover::run_sma_crossover;
use equity_pulse::pipelines::PipelineContext;
use equity_pulse::services::YahooMarketDataProvider;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = SmaCrossoverArgs::parse();
    let config = args.to_config();

    let ctx = PipelineContext::new(Arc::new(YahooMarketDataProvider::from_env()?));
    let report = run_sma_crossover(&ctx, &config).await?;

    println!(
        "{}: {} bars, SMA {}/{}",
        report.symbol,
        report.prices.len(),
        config.fast_window,
        config.slow_window
    );
    for signal in report.analysis.crossovers.chronological() {
        let label = match signal.direction {
            SignalDirection::Buy => "BUY ",
            SignalDirection::Sell => "SELL",
        };
        println!(
            "  {} {} @ {:.2}",
            signal.timestamp.format("%Y-%m-%d"),
            label,
            signal.price
        );
    }
    if report.analysis.crossovers.is_empty() {
        println!("  no crossovers in range");
    }

    if let Some(path) = &args.chart {
        charts::plot_crossovers(&report, path)?;
        info!(path = %path.display(), "Wrote chart");
    }

    Ok(())
}
