//! Unit tests for market data options and the in-memory provider

use crate::common::series;
use equity_pulse::services::{
    fetch_many, InMemoryMarketDataProvider, Lookback, MarketDataError, MarketDataProvider,
    PriceField,
};

#[test]
fn test_lookback_parsing() {
    assert_eq!("30d".parse::<Lookback>().unwrap(), Lookback::Days(30));
    assert_eq!("1wk".parse::<Lookback>().unwrap(), Lookback::Weeks(1));
    assert_eq!("6mo".parse::<Lookback>().unwrap(), Lookback::Months(6));
    assert_eq!("1Y".parse::<Lookback>().unwrap(), Lookback::Years(1));
    assert_eq!("ytd".parse::<Lookback>().unwrap(), Lookback::YearToDate);
    assert_eq!("max".parse::<Lookback>().unwrap(), Lookback::Max);
}

#[test]
fn test_lookback_rejects_garbage() {
    for input in ["", "0d", "mo", "6months", "-1d", "12"] {
        assert!(input.parse::<Lookback>().is_err(), "accepted {input:?}");
    }
}

#[test]
fn test_lookback_display_round_trips() {
    for lookback in [Lookback::Days(30), Lookback::Months(6), Lookback::YearToDate] {
        assert_eq!(lookback.to_string().parse::<Lookback>().unwrap(), lookback);
    }
}

#[test]
fn test_price_field_parsing() {
    assert_eq!("close".parse::<PriceField>().unwrap(), PriceField::Close);
    assert_eq!("Adj-Close".parse::<PriceField>().unwrap(), PriceField::AdjClose);
    assert_eq!("adj_close".parse::<PriceField>().unwrap(), PriceField::AdjClose);
    assert!("open".parse::<PriceField>().is_err());
}

#[tokio::test]
async fn test_in_memory_provider_serves_by_field() {
    let provider = InMemoryMarketDataProvider::new()
        .with_series("INFY.NS", PriceField::Close, series(&[1.0, 2.0]))
        .with_series("INFY.NS", PriceField::AdjClose, series(&[0.9, 1.8]));

    let close = provider
        .get_history("INFY.NS", Lookback::Days(30), PriceField::Close)
        .await
        .unwrap();
    assert_eq!(close.values(), vec![Some(1.0), Some(2.0)]);

    let adj = provider
        .get_history("INFY.NS", Lookback::Days(30), PriceField::AdjClose)
        .await
        .unwrap();
    assert_eq!(adj.values(), vec![Some(0.9), Some(1.8)]);

    let unknown = provider
        .get_history("TCS.NS", Lookback::Days(30), PriceField::Close)
        .await;
    assert!(matches!(unknown, Err(MarketDataError::Unavailable(s)) if s == "TCS.NS"));
}

#[tokio::test]
async fn test_fetch_many_collects_failures() {
    let provider = InMemoryMarketDataProvider::new()
        .with_series("A", PriceField::Close, series(&[1.0]))
        .with_series("C", PriceField::Close, series(&[3.0]));
    let symbols: Vec<String> = ["A", "B", "C", "A"].iter().map(|s| s.to_string()).collect();

    let outcome = fetch_many(&provider, &symbols, Lookback::Months(1), PriceField::Close).await;
    assert_eq!(outcome.series.symbols().collect::<Vec<_>>(), vec!["A", "C"]);
    assert_eq!(outcome.unavailable.len(), 1);
    assert_eq!(outcome.unavailable[0].0, "B");
}
