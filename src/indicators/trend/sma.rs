//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::window::rolling;
use crate::indicators::IndicatorError;
use crate::models::TimeSeries;

/// Rolling mean over `window` observations. Undefined (missing) for the first
/// `window - 1` indices.
pub fn rolling_mean(series: &TimeSeries, window: usize) -> Result<TimeSeries, IndicatorError> {
    rolling(series, window, math::mean)
}

/// Fast and slow SMAs of the same series, as used by the crossover detector.
pub fn sma_pair(
    series: &TimeSeries,
    fast_window: usize,
    slow_window: usize,
) -> Result<(TimeSeries, TimeSeries), IndicatorError> {
    Ok((
        rolling_mean(series, fast_window)?,
        rolling_mean(series, slow_window)?,
    ))
}
