//! HTTP client for the Yahoo Finance chart endpoint

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::messages::{ChartResponse, ChartResult};
use crate::config;
use crate::services::market_data::{Lookback, MarketDataError};

pub struct YahooClient {
    http: Client,
    base_url: Url,
}

impl YahooClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let mut headers = HeaderMap::new();
        // The endpoint throttles clients that do not look like a browser.
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| MarketDataError::Api {
                symbol: String::new(),
                message: format!("invalid user agent: {}", e),
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Client configured from `YAHOO_BASE_URL`, `YAHOO_USER_AGENT` and
    /// `HTTP_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self, MarketDataError> {
        Self::new(
            &config::get_yahoo_base_url(),
            &config::get_user_agent(),
            config::get_http_timeout(),
        )
    }

    pub fn chart_url(&self, symbol: &str, lookback: Lookback) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.join(&format!("v8/finance/chart/{}", symbol))?;
        url.query_pairs_mut()
            .append_pair("range", &lookback.to_string())
            .append_pair("interval", "1d")
            .append_pair("includeAdjustedClose", "true")
            .append_pair("events", "div,splits");
        Ok(url)
    }

    /// Daily bars for `symbol` over `lookback`.
    pub async fn chart(&self, symbol: &str, lookback: Lookback) -> Result<ChartResult, MarketDataError> {
        let url = self.chart_url(symbol, lookback)?;
        debug!(symbol = %symbol, url = %url, "Requesting chart");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error responses still carry a chart.error payload worth surfacing.
        let parsed: Result<ChartResponse, _> = serde_json::from_str(&body);
        match parsed {
            Ok(ChartResponse { chart }) => {
                if let Some(err) = chart.error {
                    return Err(MarketDataError::Api {
                        symbol: symbol.to_string(),
                        message: format!("{}: {}", err.code, err.description),
                    });
                }
                if !status.is_success() {
                    return Err(MarketDataError::Api {
                        symbol: symbol.to_string(),
                        message: format!("HTTP {}", status),
                    });
                }
                chart
                    .result
                    .and_then(|results| results.into_iter().next())
                    .ok_or_else(|| MarketDataError::Unavailable(symbol.to_string()))
            }
            Err(_) if !status.is_success() => Err(MarketDataError::Api {
                symbol: symbol.to_string(),
                message: format!("HTTP {}", status),
            }),
            Err(e) => Err(MarketDataError::Parse {
                symbol: symbol.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
