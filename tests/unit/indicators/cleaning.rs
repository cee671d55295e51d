//! Unit tests for forward/backward fill

use crate::common::{series, series_opt};
use equity_pulse::indicators::{clean_set, fill_missing};
use equity_pulse::models::SymbolSeriesSet;

#[test]
fn test_forward_fill_interior_gaps() {
    let cleaned = fill_missing(&series_opt(&[Some(1.0), None, None, Some(4.0)]));
    assert_eq!(cleaned.values(), vec![Some(1.0), Some(1.0), Some(1.0), Some(4.0)]);
}

#[test]
fn test_backward_fill_leading_gap() {
    let cleaned = fill_missing(&series_opt(&[None, None, Some(3.0), None]));
    assert_eq!(cleaned.values(), vec![Some(3.0), Some(3.0), Some(3.0), Some(3.0)]);
}

#[test]
fn test_index_is_preserved() {
    let raw = series_opt(&[None, Some(2.0), None]);
    let cleaned = fill_missing(&raw);
    assert!(cleaned.same_index(&raw));
    assert!(cleaned.is_complete());
}

#[test]
fn test_all_missing_stays_missing() {
    let cleaned = fill_missing(&series_opt(&[None, None]));
    assert_eq!(cleaned.missing_count(), 2);
    assert!(!cleaned.has_values());
}

#[test]
fn test_complete_series_unchanged() {
    let raw = series(&[5.0, 6.0, 7.0]);
    assert_eq!(fill_missing(&raw), raw);
}

#[test]
fn test_clean_set_keeps_symbols_in_order() {
    let set = SymbolSeriesSet::from_entries(vec![
        ("B", series_opt(&[None, Some(2.0)])),
        ("A", series_opt(&[Some(1.0), None])),
    ])
    .unwrap();
    let cleaned = clean_set(&set);
    assert_eq!(cleaned.symbols().collect::<Vec<_>>(), vec!["B", "A"]);
    assert_eq!(cleaned.get("B").unwrap().values(), vec![Some(2.0), Some(2.0)]);
    assert_eq!(cleaned.get("A").unwrap().values(), vec![Some(1.0), Some(1.0)]);
}
