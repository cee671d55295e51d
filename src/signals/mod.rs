//! Signal generation and cross-sectional ranking.

pub mod crossover;
pub mod ranking;

pub use crossover::*;
pub use ranking::*;
