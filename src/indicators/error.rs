use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("window size must be at least 1")]
    InvalidWindow,

    #[error("need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("series has no observed values")]
    NoData,

    #[error("percent change is undefined: {0}")]
    UndefinedChange(UndefinedReason),

    #[error("series do not share the same timestamp index")]
    MisalignedSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    ZeroBase,
    MissingFirst,
    MissingLast,
    NonFinite,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UndefinedReason::ZeroBase => "first value is zero",
            UndefinedReason::MissingFirst => "first value is missing",
            UndefinedReason::MissingLast => "last value is missing",
            UndefinedReason::NonFinite => "result is not finite",
        };
        f.write_str(text)
    }
}
