//! Unit tests for TimeSeries and SymbolSeriesSet

use crate::common::{day, series, series_from, series_opt};
use equity_pulse::models::{Observation, SeriesError, SymbolSeriesSet, TimeSeries};

#[test]
fn test_rejects_non_increasing_timestamps() {
    let result = TimeSeries::new(vec![
        Observation::present(day(0), 1.0),
        Observation::present(day(2), 2.0),
        Observation::present(day(2), 3.0),
    ]);
    assert_eq!(result, Err(SeriesError::NonIncreasingTimestamp { index: 2 }));
}

#[test]
fn test_from_parts_length_mismatch() {
    let result = TimeSeries::from_parts(vec![day(0), day(1)], vec![Some(1.0)]);
    assert_eq!(
        result,
        Err(SeriesError::LengthMismatch {
            timestamps: 2,
            values: 1
        })
    );
}

#[test]
fn test_non_finite_values_are_missing() {
    let s = series(&[1.0, f64::NAN, f64::INFINITY, 4.0]);
    assert_eq!(s.values(), vec![Some(1.0), None, None, Some(4.0)]);
    assert_eq!(s.missing_count(), 2);
}

#[test]
fn test_value_on_and_skip_leading() {
    let s = series_opt(&[Some(1.0), None, Some(3.0)]);
    assert_eq!(s.value_on(day(2)), Some(3.0));
    assert_eq!(s.value_on(day(1)), None);
    assert_eq!(s.value_on(day(9)), None);
    assert!(s.contains_timestamp(day(1)));
    assert!(!s.contains_timestamp(day(9)));

    let trimmed = s.skip_leading(1);
    assert_eq!(trimmed.timestamps(), vec![day(1), day(2)]);
    assert_eq!(trimmed.values(), vec![None, Some(3.0)]);
    assert!(s.skip_leading(10).is_empty());
}

#[test]
fn test_serde_round_trip() {
    let original = series_opt(&[Some(1.0), None, Some(3.0)]);
    let json = serde_json::to_value(&original).unwrap();
    assert!(json.is_array());
    let restored: TimeSeries = serde_json::from_value(json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_deserialize_rejects_out_of_order_timestamps() {
    let mut json = serde_json::to_value(series(&[1.0, 2.0, 3.0])).unwrap();
    json.as_array_mut().unwrap().reverse();
    assert!(serde_json::from_value::<TimeSeries>(json).is_err());
}

#[test]
fn test_deserialize_rejects_duplicate_timestamps() {
    let mut json = serde_json::to_value(series(&[1.0, 2.0])).unwrap();
    let first = json[0].clone();
    json.as_array_mut().unwrap().push(first);
    assert!(serde_json::from_value::<TimeSeries>(json).is_err());
}

#[test]
fn test_reindex_inserts_missing() {
    let s = series_from(1, &[Some(10.0), Some(11.0)]);
    let reindexed = s.reindex(&[day(0), day(1), day(2), day(3)]).unwrap();
    assert_eq!(reindexed.values(), vec![None, Some(10.0), Some(11.0), None]);
}

#[test]
fn test_series_set_rejects_duplicates() {
    let mut set = SymbolSeriesSet::new();
    set.insert("A", series(&[1.0])).unwrap();
    assert_eq!(
        set.insert("A", series(&[2.0])),
        Err(SeriesError::DuplicateSymbol("A".to_string()))
    );
}

#[test]
fn test_intersection_index() {
    let set = SymbolSeriesSet::from_entries(vec![
        ("A", series_from(0, &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)])),
        ("B", series_from(2, &[Some(5.0), None, Some(7.0)])),
    ])
    .unwrap();
    assert_eq!(set.intersection_index(), vec![day(2), day(3)]);

    let common = set.reindexed(&set.intersection_index()).unwrap();
    assert_eq!(common.get("A").unwrap().values(), vec![Some(3.0), Some(4.0)]);
    assert_eq!(common.get("B").unwrap().values(), vec![Some(5.0), None]);
}

#[test]
fn test_intersection_of_disjoint_series_is_empty() {
    let set = SymbolSeriesSet::from_entries(vec![
        ("A", series_from(0, &[Some(1.0), Some(2.0)])),
        ("B", series_from(5, &[Some(5.0), Some(6.0)])),
    ])
    .unwrap();
    assert!(set.intersection_index().is_empty());
    assert!(SymbolSeriesSet::new().intersection_index().is_empty());
}

#[test]
fn test_aligned_uses_union_index() {
    let set = SymbolSeriesSet::from_entries(vec![
        ("A", series_from(0, &[Some(1.0), Some(2.0)])),
        ("B", series_from(1, &[Some(5.0), Some(6.0)])),
    ])
    .unwrap();
    assert!(set.common_index().is_none());

    let aligned = set.aligned().unwrap();
    assert_eq!(aligned.common_index(), Some(vec![day(0), day(1), day(2)]));
    assert_eq!(aligned.get("A").unwrap().values(), vec![Some(1.0), Some(2.0), None]);
    assert_eq!(aligned.get("B").unwrap().values(), vec![None, Some(5.0), Some(6.0)]);
    // insertion order survives
    assert_eq!(aligned.symbols().collect::<Vec<_>>(), vec!["A", "B"]);
}
