//! PNG charts for each pipeline result.
//!
//! Charts only read the series they are given. The x axis is the bar index of
//! the primary series, labelled with its dates.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Utc};
use plotters::prelude::*;

use crate::models::TimeSeries;
use crate::pipelines::sma_crossover::SmaCrossoverReport;
use crate::pipelines::volatility::VolatilityReport;
use crate::portfolio::PortfolioValuation;
use crate::signals::RankedChange;

const SIZE: (u32, u32) = (1400, 700);
const DARK_VIOLET: RGBColor = RGBColor(148, 0, 211);
const ORANGE: RGBColor = RGBColor(255, 140, 0);

type ChartResult = Result<(), Box<dyn Error>>;

/// Horizontal bars: gainers in green, losers in red.
pub fn plot_gainers_losers<P: AsRef<Path>>(
    gainers: &[RankedChange],
    losers: &[RankedChange],
    path: P,
) -> ChartResult {
    prepare_output(path.as_ref())?;
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Losers at the bottom, gainers on top, each group in ranking order.
    let rows: Vec<(&RankedChange, RGBColor)> = losers
        .iter()
        .rev()
        .map(|r| (r, RED))
        .chain(gainers.iter().rev().map(|r| (r, GREEN)))
        .collect();
    let x_range = padded(
        rows.iter()
            .map(|(r, _)| r.percent_change)
            .chain(std::iter::once(0.0)),
    );
    let n = rows.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Top Gainers and Losers", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(x_range, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .x_desc("Percentage Change")
        .y_desc("Stock Symbol")
        .y_labels(n)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => rows
                .get(*i)
                .map(|(r, _)| r.symbol.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, (r, color))| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (r.percent_change, SegmentValue::Exact(i + 1)),
            ],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Price with fast/slow SMAs; buys as green triangles, sells as red crosses.
pub fn plot_crossovers<P: AsRef<Path>>(report: &SmaCrossoverReport, path: P) -> ChartResult {
    prepare_output(path.as_ref())?;
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let index = report.prices.timestamps();
    let analysis = &report.analysis;
    let y_range = padded(
        [&report.prices, &analysis.fast, &analysis.slow]
            .into_iter()
            .flat_map(|s| s.iter().filter_map(|o| o.value)),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("SMA Crossover Strategy: {}", report.symbol),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..index.len().max(1), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price")
        .x_label_formatter(&|x| date_label(&index, *x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points(&report.prices, &index), &BLUE))?
        .label("Close Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(points(&analysis.fast, &index), &ORANGE))?
        .label(format!("{}-Day SMA", analysis.fast_window))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORANGE));
    chart
        .draw_series(LineSeries::new(points(&analysis.slow, &index), &DARK_VIOLET))?
        .label(format!("{}-Day SMA", analysis.slow_window))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_VIOLET));

    chart
        .draw_series(analysis.crossovers.buys.iter().filter_map(|s| {
            position(&index, s.timestamp)
                .map(|i| TriangleMarker::new((i, s.price), 8, GREEN.filled()))
        }))?
        .label("Buy Signal")
        .legend(|(x, y)| TriangleMarker::new((x, y), 8, GREEN.filled()));
    chart
        .draw_series(analysis.crossovers.sells.iter().filter_map(|s| {
            position(&index, s.timestamp).map(|i| Cross::new((i, s.price), 8, RED.stroke_width(3)))
        }))?
        .label("Sell Signal")
        .legend(|(x, y)| Cross::new((x, y), 8, RED.stroke_width(3)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Daily returns with their rolling mean and standard deviation.
pub fn plot_volatility<P: AsRef<Path>>(report: &VolatilityReport, path: P) -> ChartResult {
    prepare_output(path.as_ref())?;
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let index = report.daily_returns.timestamps();
    let stats = &report.stats;
    let y_range = padded(
        [&report.daily_returns, &stats.mean, &stats.std_dev]
            .into_iter()
            .flat_map(|s| s.iter().filter_map(|o| o.value)),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Rolling Statistics and Volatility: {}", report.symbol),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..index.len().max(1), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Percent")
        .x_label_formatter(&|x| date_label(&index, *x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points(&report.daily_returns, &index), &BLUE))?
        .label("Daily Returns")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(points(&stats.mean, &index), &ORANGE))?
        .label(format!("Rolling Average ({})", stats.window))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORANGE));
    chart
        .draw_series(LineSeries::new(points(&stats.std_dev, &index), &DARK_VIOLET))?
        .label(format!("Rolling Standard Deviation ({})", stats.window))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_VIOLET));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Total portfolio value over time.
pub fn plot_portfolio<P: AsRef<Path>>(valuation: &PortfolioValuation, path: P) -> ChartResult {
    prepare_output(path.as_ref())?;
    let root = BitMapBackend::new(path.as_ref(), SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let index = valuation.total.timestamps();
    let y_range = padded(valuation.total.iter().filter_map(|o| o.value));

    let mut chart = ChartBuilder::on(&root)
        .caption("Portfolio Tracker", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0usize..index.len().max(1), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Portfolio Value")
        .x_label_formatter(&|x| date_label(&index, *x))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points(&valuation.total, &index), &DARK_VIOLET))?
        .label("Total value")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_VIOLET));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn prepare_output(path: &Path) -> std::io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

/// Min..max of `values`, widened so a flat or empty series still draws.
fn padded<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((max - min) * 0.05).max(max.abs() * 0.01).max(1e-6);
    (min - pad)..(max + pad)
}

fn position(index: &[DateTime<Utc>], timestamp: DateTime<Utc>) -> Option<usize> {
    index.binary_search(&timestamp).ok()
}

fn points(series: &TimeSeries, index: &[DateTime<Utc>]) -> Vec<(usize, f64)> {
    series
        .iter()
        .filter_map(|o| Some((position(index, o.timestamp)?, o.value?)))
        .collect()
}

fn date_label(index: &[DateTime<Utc>], i: usize) -> String {
    index
        .get(i)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
