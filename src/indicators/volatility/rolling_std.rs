//! Rolling standard deviation

use crate::common::math;
use crate::indicators::trend::rolling_mean;
use crate::indicators::window::rolling;
use crate::indicators::IndicatorError;
use crate::models::TimeSeries;

/// Rolling sample standard deviation (N-1 denominator) over `window`
/// observations. Undefined for the first `window - 1` indices; a window of one
/// is undefined everywhere.
pub fn rolling_std(series: &TimeSeries, window: usize) -> Result<TimeSeries, IndicatorError> {
    rolling(series, window, math::sample_std_dev)
}

/// Rolling mean and rolling standard deviation over the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingStats {
    pub window: usize,
    pub mean: TimeSeries,
    pub std_dev: TimeSeries,
}

impl RollingStats {
    pub fn compute(series: &TimeSeries, window: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            window,
            mean: rolling_mean(series, window)?,
            std_dev: rolling_std(series, window)?,
        })
    }

    /// Drop the leading `window - 1` rows, where the window is not yet full.
    /// Missing values further in (a window over a missing input) are kept.
    pub fn drop_incomplete(&self) -> Self {
        let leading = self.window.saturating_sub(1);
        Self {
            window: self.window,
            mean: self.mean.skip_leading(leading),
            std_dev: self.std_dev.skip_leading(leading),
        }
    }
}
