//! Rolling Statistics and Volatility
//!
//! Derives daily percent returns for one symbol and their rolling mean and
//! sample standard deviation.

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use equity_pulse::charts;
use equity_pulse::config::cli::VolatilityArgs;
use equity_pulse::logging;
use equity_pulse::pipelines::volatility::run_volatility;
use equity_pulse::pipelines::PipelineContext;
use equity_pulse::services::YahooMarketDataProvider;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = VolatilityArgs::parse();
    let config = args.to_config();

    let ctx = PipelineContext::new(Arc::new(YahooMarketDataProvider::from_env()?));
    let report = run_volatility(&ctx, &config).await?;

    let stats = &report.stats;
    println!(
        "{}: {} daily returns, window {}",
        report.symbol,
        report.daily_returns.len(),
        stats.window
    );
    println!("  {:<10} {:>10} {:>10}", "date", "mean %", "std %");
    let fmt = |v: Option<f64>| v.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".into());
    for mean in stats.mean.iter() {
        println!(
            "  {:<10} {:>10} {:>10}",
            mean.timestamp.format("%Y-%m-%d"),
            fmt(mean.value),
            fmt(stats.std_dev.value_on(mean.timestamp))
        );
    }

    if let Some(path) = &args.chart {
        charts::plot_volatility(&report, path)?;
        info!(path = %path.display(), "Wrote chart");
    }

    Ok(())
}
