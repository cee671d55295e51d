//! Gainers/Losers
//!
//! Draws a random sample from the instrument universe, ranks it by percent
//! change over the lookback, writes the ranking to CSV and prints the top and
//! bottom of the table.

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use equity_pulse::charts;
use equity_pulse::config::cli::GainersLosersArgs;
use equity_pulse::logging;
use equity_pulse::output::write_percent_changes_to_path;
use equity_pulse::pipelines::gainers_losers::run_gainers_losers;
use equity_pulse::pipelines::PipelineContext;
use equity_pulse::services::YahooMarketDataProvider;
use equity_pulse::universe::Universe;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args = GainersLosersArgs::parse();
    let config = args.to_config();

    let universe = Universe::from_csv(&args.universe)?;
    info!(path = %args.universe.display(), size = universe.len(), "Loaded universe");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let ctx = PipelineContext::new(Arc::new(YahooMarketDataProvider::from_env()?));
    let report = run_gainers_losers(&ctx, &universe, &config, &mut rng).await?;

    println!("Selected {} companies:", report.selected.len());
    for instrument in &report.selected {
        println!("  {}", instrument.company_name);
    }

    for (symbol, reason) in &report.excluded {
        warn!(symbol = %symbol, reason = %reason, "Excluded from ranking");
    }

    write_percent_changes_to_path(&args.output, &report.ranking)?;
    info!(path = %args.output.display(), rows = report.ranking.len(), "Wrote percent changes");

    println!();
    println!("Top {} gainers:", config.top_k);
    for entry in report.gainers() {
        println!("  {:<16} {:>8.2}%", entry.symbol, entry.percent_change);
    }
    println!("Top {} losers:", config.top_k);
    for entry in report.losers() {
        println!("  {:<16} {:>8.2}%", entry.symbol, entry.percent_change);
    }

    if let Some(path) = &args.chart {
        charts::plot_gainers_losers(report.gainers(), report.losers(), path)?;
        info!(path = %path.display(), "Wrote chart");
    }

    Ok(())
}
