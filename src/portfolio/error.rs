use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    #[error("invalid holding '{0}', expected SYMBOL=QUANTITY")]
    InvalidHoldingSpec(String),

    #[error("quantity for {symbol} must be finite and non-negative, got {quantity}")]
    InvalidQuantity { symbol: String, quantity: f64 },

    #[error("{0} is listed more than once in holdings")]
    DuplicateHolding(String),

    #[error("no holdings configured")]
    EmptyHoldings,

    #[error("no quantity configured for {0}")]
    MissingQuantity(String),

    #[error("no price series for held symbol {0}")]
    MissingPrices(String),

    #[error("price index of {0} does not match the rest of the portfolio")]
    MisalignedIndex(String),

    #[error("held symbols share no trading dates: {0}")]
    NoCommonIndex(String),

    #[error("no holding has usable price data")]
    NoUsablePositions,
}
