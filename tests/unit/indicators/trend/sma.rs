//! Unit tests for the simple moving average

use crate::common::{series, series_opt};
use equity_pulse::indicators::trend::{rolling_mean, sma_pair};
use equity_pulse::indicators::IndicatorError;

#[test]
fn test_rolling_mean_window_three() {
    let sma = rolling_mean(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
    assert_eq!(sma.values(), vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_rolling_mean_window_one_is_identity() {
    let raw = series(&[3.0, 1.0, 4.0]);
    assert_eq!(rolling_mean(&raw, 1).unwrap(), raw);
}

#[test]
fn test_rolling_mean_rejects_zero_window() {
    assert_eq!(
        rolling_mean(&series(&[1.0]), 0),
        Err(IndicatorError::InvalidWindow)
    );
}

#[test]
fn test_window_longer_than_series_is_all_missing() {
    let sma = rolling_mean(&series(&[1.0, 2.0]), 5).unwrap();
    assert_eq!(sma.values(), vec![None, None]);
}

#[test]
fn test_missing_value_poisons_its_windows() {
    let sma = rolling_mean(&series_opt(&[Some(1.0), None, Some(3.0), Some(5.0), Some(7.0)]), 2).unwrap();
    assert_eq!(sma.values(), vec![None, None, None, Some(4.0), Some(6.0)]);
}

#[test]
fn test_sma_pair_shares_index() {
    let raw = series(&[1.0, 2.0, 3.0, 4.0]);
    let (fast, slow) = sma_pair(&raw, 2, 3).unwrap();
    assert!(fast.same_index(&raw));
    assert!(slow.same_index(&raw));
    assert_eq!(fast.values(), vec![None, Some(1.5), Some(2.5), Some(3.5)]);
    assert_eq!(slow.values(), vec![None, None, Some(2.0), Some(3.0)]);
}
