//! Trailing fixed-size window evaluation shared by the rolling statistics.

use crate::indicators::IndicatorError;
use crate::models::TimeSeries;

/// Evaluate `stat` over the `window` most recent values ending at each index.
///
/// Indices before `window - 1`, and windows containing a missing value, yield
/// a missing observation rather than a partial-window result.
pub fn rolling<F>(series: &TimeSeries, window: usize, stat: F) -> Result<TimeSeries, IndicatorError>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    if window == 0 {
        return Err(IndicatorError::InvalidWindow);
    }

    let values = series.values();
    let mut out = vec![None; values.len()];
    let mut buf = Vec::with_capacity(window);

    for end in (window - 1)..values.len() {
        buf.clear();
        let slice = &values[end + 1 - window..=end];
        if slice.iter().all(Option::is_some) {
            buf.extend(slice.iter().flatten());
            out[end] = stat(&buf);
        }
    }

    Ok(series.with_values(out))
}
