//! Value objects passed between the pipeline stages.

pub mod instrument;
pub mod portfolio;
pub mod series;
pub mod series_set;
pub mod signal;

pub use instrument::Instrument;
pub use portfolio::{Holding, Holdings};
pub use series::{Observation, SeriesError, TimeSeries};
pub use series_set::SymbolSeriesSet;
pub use signal::{Signal, SignalDirection};
