//! Unit tests for the instrument universe

use std::io::Write;

use equity_pulse::models::Instrument;
use equity_pulse::universe::{Universe, UniverseError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

const NIFTY_SAMPLE: &str = "\
Company Name,Industry,Symbol,Series,ISIN Code
Infosys Ltd.,Information Technology,INFY,EQ,INE009A01021
Reliance Industries Ltd.,Oil Gas & Consumable Fuels,RELIANCE,EQ,INE002A01018
Bajaj Finance Ltd.,Financial Services,BAJFINANCE,EQ,INE296A01024
Tata Consultancy Services Ltd.,Information Technology,TCS,EQ,INE467B01029
HDFC Bank Ltd.,Financial Services,HDFCBANK,EQ,INE040A01034
";

fn universe_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_csv_reads_required_columns() {
    let file = universe_file(NIFTY_SAMPLE);
    let universe = Universe::from_csv(file.path()).unwrap();
    assert_eq!(universe.len(), 5);
    assert_eq!(
        universe.instruments()[0],
        Instrument::new("INFY", "Infosys Ltd.")
    );
    assert_eq!(universe.instruments()[0].ticker(".NS"), "INFY.NS");
}

#[test]
fn test_missing_column_rejected() {
    let file = universe_file("Symbol,Industry\nINFY,IT\n");
    let result = Universe::from_csv(file.path());
    assert!(matches!(result, Err(UniverseError::MissingColumn("Company Name"))));
}

#[test]
fn test_missing_file_is_csv_error() {
    let result = Universe::from_csv("/nonexistent/ind_nifty50list.csv");
    assert!(matches!(result, Err(UniverseError::Csv(_))));
}

#[test]
fn test_sample_is_distinct_subset() {
    let file = universe_file(NIFTY_SAMPLE);
    let universe = Universe::from_csv(file.path()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let sample = universe.sample(3, &mut rng).unwrap();
    assert_eq!(sample.len(), 3);
    for instrument in &sample {
        assert!(universe.instruments().contains(instrument));
    }
    let mut symbols: Vec<_> = sample.iter().map(|i| i.symbol.clone()).collect();
    symbols.sort();
    symbols.dedup();
    assert_eq!(symbols.len(), 3);
}

#[test]
fn test_seeded_sample_is_reproducible() {
    let file = universe_file(NIFTY_SAMPLE);
    let universe = Universe::from_csv(file.path()).unwrap();

    let first = universe.sample(4, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = universe.sample(4, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sample_whole_universe() {
    let universe = Universe::new(vec![Instrument::new("A", "Alpha"), Instrument::new("B", "Beta")]);
    let sample = universe.sample(2, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(sample.len(), 2);
}

#[test]
fn test_sample_too_large() {
    let universe = Universe::new(vec![Instrument::new("A", "Alpha")]);
    let result = universe.sample(2, &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        result,
        Err(UniverseError::SampleTooLarge {
            requested: 2,
            available: 1
        })
    ));
}
