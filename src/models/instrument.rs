use serde::{Deserialize, Serialize};

/// One row of the reference instrument universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }

    /// Ticker as the data provider expects it, e.g. `INFY` + `.NS`.
    pub fn ticker(&self, suffix: &str) -> String {
        format!("{}{}", self.symbol, suffix)
    }
}
