pub mod cleaning;
pub mod error;
pub mod returns;
pub mod window;

pub mod trend;
pub mod volatility;

pub use cleaning::*;
pub use error::{IndicatorError, UndefinedReason};
pub use returns::*;
