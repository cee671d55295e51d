//! Percentage change: whole-period and day-over-day.

use crate::common::math;
use crate::indicators::{IndicatorError, UndefinedReason};
use crate::models::{Observation, SymbolSeriesSet, TimeSeries};

/// `(last - first) / first * 100` over the whole series.
///
/// A zero or missing first value, or a missing last value, is reported as
/// [`IndicatorError::UndefinedChange`] instead of leaking `inf`/`NaN`.
pub fn total_percent_change(series: &TimeSeries) -> Result<f64, IndicatorError> {
    if !series.has_values() {
        return Err(IndicatorError::NoData);
    }
    if series.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }

    let first = series
        .first()
        .and_then(|o| o.value)
        .ok_or(IndicatorError::UndefinedChange(UndefinedReason::MissingFirst))?;
    let last = series
        .last()
        .and_then(|o| o.value)
        .ok_or(IndicatorError::UndefinedChange(UndefinedReason::MissingLast))?;

    if first == 0.0 {
        return Err(IndicatorError::UndefinedChange(UndefinedReason::ZeroBase));
    }
    math::percent_change(first, last)
        .ok_or(IndicatorError::UndefinedChange(UndefinedReason::NonFinite))
}

/// Whole-period change for every symbol, in set order. Each symbol keeps its
/// own outcome so one bad series does not sink the batch.
pub fn total_percent_changes(set: &SymbolSeriesSet) -> Vec<(String, Result<f64, IndicatorError>)> {
    set.iter()
        .map(|(symbol, series)| (symbol.to_string(), total_percent_change(series)))
        .collect()
}

/// Day-over-day change: one value per timestamp after the first.
///
/// The result is one element shorter than the input and indexed by the later
/// timestamp of each pair. A pair with a missing side or a zero base yields a
/// missing observation.
pub fn daily_percent_changes(series: &TimeSeries) -> TimeSeries {
    let observations = series
        .observations()
        .windows(2)
        .map(|w| {
            let change = match (w[0].value, w[1].value) {
                (Some(prev), Some(curr)) => math::percent_change(prev, curr),
                _ => None,
            };
            Observation::new(w[1].timestamp, change)
        })
        .collect();
    TimeSeries::from_ordered(observations)
}
