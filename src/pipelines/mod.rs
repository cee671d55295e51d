//! Linear fetch -> clean -> compute pipelines behind each binary.

pub mod context;
pub mod error;
pub mod gainers_losers;
pub mod portfolio;
pub mod sma_crossover;
pub mod volatility;

pub use context::PipelineContext;
pub use error::PipelineError;
