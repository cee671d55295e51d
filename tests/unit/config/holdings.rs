//! Unit tests for holdings configuration

use std::io::Write;

use equity_pulse::config::holdings::{parse_holdings, resolve_holdings, HoldingsFileError};
use equity_pulse::models::Holding;
use equity_pulse::portfolio::PortfolioError;
use tempfile::NamedTempFile;

#[test]
fn test_parse_holdings_table() {
    let holdings = parse_holdings(
        r#"
[holdings]
"RELIANCE.NS" = 12
"INFY.NS" = 15.5
"#,
    )
    .unwrap();
    // BTreeMap order
    assert_eq!(
        holdings,
        vec![Holding::new("INFY.NS", 15.5), Holding::new("RELIANCE.NS", 12.0)]
    );
}

#[test]
fn test_parse_holdings_rejects_bad_toml() {
    assert!(matches!(
        parse_holdings("[holdings]\nINFY = \"many\""),
        Err(HoldingsFileError::Toml(_))
    ));
    assert!(matches!(parse_holdings(""), Err(HoldingsFileError::Toml(_))));
}

#[test]
fn test_holding_from_str() {
    assert_eq!("INFY.NS=15".parse::<Holding>().unwrap(), Holding::new("INFY.NS", 15.0));
    assert_eq!(" TCS.NS = 2.5 ".parse::<Holding>().unwrap(), Holding::new("TCS.NS", 2.5));
    for bad in ["INFY.NS", "=3", "INFY.NS=lots"] {
        assert_eq!(
            bad.parse::<Holding>(),
            Err(PortfolioError::InvalidHoldingSpec(bad.to_string()))
        );
    }
}

#[test]
fn test_resolve_holdings_merges_file_and_flags() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[holdings]\n\"INFY.NS\" = 15").unwrap();

    let holdings = resolve_holdings(Some(file.path()), &[Holding::new("TCS.NS", 3.0)]).unwrap();
    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings.quantity("INFY.NS"), Some(15.0));
    assert_eq!(holdings.quantity("TCS.NS"), Some(3.0));
}

#[test]
fn test_resolve_holdings_rejects_duplicates() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[holdings]\n\"INFY.NS\" = 15").unwrap();

    let result = resolve_holdings(Some(file.path()), &[Holding::new("INFY.NS", 1.0)]);
    assert!(matches!(
        result,
        Err(HoldingsFileError::Invalid(PortfolioError::DuplicateHolding(s))) if s == "INFY.NS"
    ));
}

#[test]
fn test_resolve_holdings_without_file() {
    let holdings = resolve_holdings(None, &[]).unwrap();
    assert!(holdings.is_empty());
}
