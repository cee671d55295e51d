//! Missing-value imputation: forward fill, then backward fill.

use crate::models::{SymbolSeriesSet, TimeSeries};

/// Replace each missing value with the nearest earlier observed value, then
/// fill any leading gap from the first observed value. The index is unchanged.
/// An all-missing series comes back all missing.
pub fn fill_missing(series: &TimeSeries) -> TimeSeries {
    let mut values = series.values();
    forward_fill(&mut values);
    backward_fill(&mut values);
    series.with_values(values)
}

/// [`fill_missing`] applied to every series of the set.
pub fn clean_set(set: &SymbolSeriesSet) -> SymbolSeriesSet {
    set.map(fill_missing)
}

fn forward_fill(values: &mut [Option<f64>]) {
    let mut last = None;
    for value in values.iter_mut() {
        match value {
            Some(v) => last = Some(*v),
            None => *value = last,
        }
    }
}

fn backward_fill(values: &mut [Option<f64>]) {
    let mut next = None;
    for value in values.iter_mut().rev() {
        match value {
            Some(v) => next = Some(*v),
            None => *value = next,
        }
    }
}
