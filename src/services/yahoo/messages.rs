//! Wire types for `/v8/finance/chart/{symbol}`.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::Deserialize;

use crate::models::{Observation, TimeSeries};
use crate::services::market_data::PriceField;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Exchange offset from UTC, in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
    #[serde(default)]
    pub adjclose: Vec<AdjClose>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdjClose {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

impl ChartResult {
    /// Extract one price column as a daily series.
    ///
    /// Bars are keyed by their trading date in exchange time (midnight UTC of
    /// that date), so symbols from one exchange share an index. If the
    /// provider sends two bars for the same date (the live bar), the later one
    /// wins.
    pub fn to_series(&self, field: PriceField) -> Result<TimeSeries, String> {
        let column: &[Option<f64>] = match field {
            PriceField::Close => self
                .indicators
                .quote
                .first()
                .map(|q| q.close.as_slice())
                .ok_or("response has no quote block")?,
            PriceField::AdjClose => self
                .indicators
                .adjclose
                .first()
                .map(|a| a.adjclose.as_slice())
                .ok_or("response has no adjclose block")?,
        };
        if column.len() != self.timestamp.len() {
            return Err(format!(
                "{} timestamps but {} {} values",
                self.timestamp.len(),
                column.len(),
                field
            ));
        }

        let mut observations: Vec<Observation> = Vec::with_capacity(column.len());
        for (&ts, &value) in self.timestamp.iter().zip(column) {
            let date = trading_date(ts, self.meta.gmtoffset)
                .ok_or_else(|| format!("timestamp {} out of range", ts))?;
            match observations.last_mut() {
                Some(last) if last.timestamp == date => *last = Observation::new(date, value),
                Some(last) if last.timestamp > date => {
                    return Err(format!("timestamp {} is out of order", ts));
                }
                _ => observations.push(Observation::new(date, value)),
            }
        }
        TimeSeries::new(observations).map_err(|e| e.to_string())
    }
}

fn trading_date(unix_seconds: i64, gmtoffset: i64) -> Option<DateTime<Utc>> {
    let local = DateTime::from_timestamp(unix_seconds, 0)? + Duration::seconds(gmtoffset);
    Some(local.date_naive().and_time(NaiveTime::MIN).and_utc())
}
