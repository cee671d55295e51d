//! Runtime configuration: environment lookups and command-line options.

pub mod cli;
pub mod holdings;

use std::env;
use std::time::Duration;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Deployment environment, `sandbox` unless `ENVIRONMENT` says otherwise.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_yahoo_base_url() -> String {
    env::var("YAHOO_BASE_URL").unwrap_or_else(|_| DEFAULT_YAHOO_BASE_URL.to_string())
}

pub fn get_user_agent() -> String {
    env::var("YAHOO_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string())
}

pub fn get_http_timeout() -> Duration {
    let seconds = env::var("HTTP_TIMEOUT_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&s: &u64| s > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS);
    Duration::from_secs(seconds)
}
