//! Unit tests for rolling standard deviation

use crate::common::{assert_close, day, series, series_opt};
use equity_pulse::indicators::volatility::{rolling_std, RollingStats};
use equity_pulse::indicators::IndicatorError;

#[test]
fn test_rolling_std_full_window() {
    let std = rolling_std(&series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 8).unwrap();
    assert_eq!(std.missing_count(), 7);
    assert_close(std.value_at(7).unwrap(), (32.0f64 / 7.0).sqrt());
}

#[test]
fn test_rolling_std_of_constant_is_zero() {
    let std = rolling_std(&series(&[3.0, 3.0, 3.0, 3.0]), 2).unwrap();
    assert_eq!(std.values(), vec![None, Some(0.0), Some(0.0), Some(0.0)]);
}

#[test]
fn test_rolling_std_window_one_is_undefined() {
    let std = rolling_std(&series(&[1.0, 2.0, 3.0]), 1).unwrap();
    assert_eq!(std.values(), vec![None, None, None]);
}

#[test]
fn test_rolling_std_rejects_zero_window() {
    assert_eq!(rolling_std(&series(&[1.0]), 0), Err(IndicatorError::InvalidWindow));
}

#[test]
fn test_rolling_stats_drop_incomplete() {
    let stats = RollingStats::compute(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
    assert_eq!(stats.mean.len(), 5);
    assert_eq!(stats.std_dev.len(), 5);

    let trimmed = stats.drop_incomplete();
    assert_eq!(trimmed.window, 3);
    assert_eq!(trimmed.mean.values(), vec![Some(2.0), Some(3.0), Some(4.0)]);
    assert_eq!(trimmed.std_dev.values(), vec![Some(1.0), Some(1.0), Some(1.0)]);
}

#[test]
fn test_drop_incomplete_keeps_interior_gaps() {
    let returns = series_opt(&[Some(1.0), Some(2.0), Some(3.0), None, Some(5.0), Some(6.0), Some(7.0)]);
    let trimmed = RollingStats::compute(&returns, 2).unwrap().drop_incomplete();

    assert_eq!(trimmed.mean.len(), 6);
    assert_eq!(trimmed.mean.timestamp_at(0), Some(day(1)));
    assert_eq!(
        trimmed.mean.values(),
        vec![Some(1.5), Some(2.5), None, None, Some(5.5), Some(6.5)]
    );
    assert_eq!(trimmed.std_dev.len(), 6);
    assert_eq!(trimmed.std_dev.value_at(2), None);
}

#[test]
fn test_drop_incomplete_window_one_keeps_everything() {
    let stats = RollingStats::compute(&series(&[1.0, 2.0]), 1).unwrap();
    assert_eq!(stats.drop_incomplete().mean.len(), 2);
}
