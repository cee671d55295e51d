//! Volatility indicators: rolling standard deviation

pub mod rolling_std;

pub use rolling_std::*;
