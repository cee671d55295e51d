//! Held quantities per symbol, validated before any valuation runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::portfolio::PortfolioError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
        }
    }
}

/// Parses `SYMBOL=QUANTITY`, e.g. `INFY.NS=15`.
impl FromStr for Holding {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, quantity) = s
            .split_once('=')
            .ok_or_else(|| PortfolioError::InvalidHoldingSpec(s.to_string()))?;
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PortfolioError::InvalidHoldingSpec(s.to_string()));
        }
        let quantity: f64 = quantity
            .trim()
            .parse()
            .map_err(|_| PortfolioError::InvalidHoldingSpec(s.to_string()))?;
        Ok(Holding::new(symbol, quantity))
    }
}

/// Validated `{symbol: quantity}` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Holdings {
    positions: Vec<Holding>,
}

impl Holdings {
    pub fn new(positions: Vec<Holding>) -> Result<Self, PortfolioError> {
        let mut validated: Vec<Holding> = Vec::with_capacity(positions.len());
        for holding in positions {
            if !holding.quantity.is_finite() || holding.quantity < 0.0 {
                return Err(PortfolioError::InvalidQuantity {
                    symbol: holding.symbol,
                    quantity: holding.quantity,
                });
            }
            if validated.iter().any(|h| h.symbol == holding.symbol) {
                return Err(PortfolioError::DuplicateHolding(holding.symbol));
            }
            validated.push(holding);
        }
        Ok(Self {
            positions: validated,
        })
    }

    pub fn quantity(&self, symbol: &str) -> Option<f64> {
        self.positions
            .iter()
            .find(|h| h.symbol == symbol)
            .map(|h| h.quantity)
    }

    /// Copy without the given symbols, e.g. those whose prices could not be fetched.
    pub fn without(&self, symbols: &[String]) -> Holdings {
        Holdings {
            positions: self
                .positions
                .iter()
                .filter(|h| !symbols.contains(&h.symbol))
                .cloned()
                .collect(),
        }
    }

    pub fn symbols(&self) -> Vec<String> {
        self.positions.iter().map(|h| h.symbol.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
