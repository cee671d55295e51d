//! Weighted portfolio valuation over a cleaned price set.

pub mod error;
pub mod valuation;

pub use error::PortfolioError;
pub use valuation::*;
