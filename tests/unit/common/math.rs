//! Unit tests for slice statistics

use crate::common::assert_close;
use equity_pulse::common::math::{mean, percent_change, sample_std_dev};

#[test]
fn test_mean() {
    assert_eq!(mean(&[]), None);
    assert_close(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
}

#[test]
fn test_sample_std_dev_uses_n_minus_one() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    // population std is 2.0; sample std is sqrt(32 / 7)
    assert_close(sample_std_dev(&values).unwrap(), (32.0f64 / 7.0).sqrt());
}

#[test]
fn test_sample_std_dev_needs_two_values() {
    assert_eq!(sample_std_dev(&[]), None);
    assert_eq!(sample_std_dev(&[3.0]), None);
}

#[test]
fn test_percent_change() {
    assert_close(percent_change(100.0, 110.0).unwrap(), 10.0);
    assert_close(percent_change(110.0, 99.0).unwrap(), -10.0);
    assert_eq!(percent_change(0.0, 5.0), None);
}
