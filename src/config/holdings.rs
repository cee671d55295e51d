//! Holdings file: a TOML table of symbol to quantity.
//!
//! ```toml
//! [holdings]
//! "INFY.NS" = 15
//! "RELIANCE.NS" = 12
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Holding, Holdings};
use crate::portfolio::PortfolioError;

#[derive(Debug, Error)]
pub enum HoldingsFileError {
    #[error("failed to read holdings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse holdings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] PortfolioError),
}

#[derive(Debug, Deserialize)]
struct HoldingsFile {
    holdings: BTreeMap<String, f64>,
}

pub fn parse_holdings(content: &str) -> Result<Vec<Holding>, HoldingsFileError> {
    let file: HoldingsFile = toml::from_str(content)?;
    Ok(file
        .holdings
        .into_iter()
        .map(|(symbol, quantity)| Holding::new(symbol, quantity))
        .collect())
}

pub fn load_holdings<P: AsRef<Path>>(path: P) -> Result<Vec<Holding>, HoldingsFileError> {
    parse_holdings(&std::fs::read_to_string(path)?)
}

/// File entries followed by command-line entries, validated together.
pub fn resolve_holdings(
    file: Option<&Path>,
    extra: &[Holding],
) -> Result<Holdings, HoldingsFileError> {
    let mut positions = match file {
        Some(path) => load_holdings(path)?,
        None => Vec::new(),
    };
    positions.extend(extra.iter().cloned());
    Ok(Holdings::new(positions)?)
}
