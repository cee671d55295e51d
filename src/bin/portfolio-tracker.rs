//! Portfolio Tracker
//!
//! Values a fixed set of holdings over the lookback and prints the latest
//! total.

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use equity_pulse::charts;
use equity_pulse::config::cli::PortfolioArgs;
use equity_pulse::config::holdings::resolve_holdings;
use equity_pulse::logging;
use equity_pulse::pipelines::portfolio::run_portfolio;
use equity_pulse::pipelines::PipelineContext;
use equity_pulse::services::YahooMarketDataProvider;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = PortfolioArgs::parse();
    let holdings = resolve_holdings(args.holdings_file.as_deref(), &args.holdings)?;
    if holdings.is_empty() {
        return Err("no holdings given; use --holdings-file or --holding SYMBOL=QTY".into());
    }
    info!(count = holdings.len(), "Loaded holdings");
    let config = args.to_config(holdings);

    let ctx = PipelineContext::new(Arc::new(YahooMarketDataProvider::from_env()?));
    let report = run_portfolio(&ctx, &config).await?;

    for (symbol, e) in &report.unavailable {
        warn!(symbol = %symbol, error = %e, "Holding left out of valuation");
    }
    for symbol in &report.valuation.excluded {
        warn!(symbol = %symbol, "Holding had no price data");
    }

    for position in &report.valuation.positions {
        let latest = position.value.last().and_then(|o| o.value);
        println!(
            "  {:<16} x {:>8} = {}",
            position.symbol,
            position.quantity,
            latest.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".into())
        );
    }
    match report.valuation.latest_total() {
        Some(total) => println!("Latest Total Value of the Portfolio: {:.2}", total),
        None => println!("Latest Total Value of the Portfolio: unavailable"),
    }

    if !args.no_chart {
        charts::plot_portfolio(&report.valuation, &args.chart)?;
        info!(path = %args.chart.display(), "Wrote chart");
    }

    Ok(())
}
