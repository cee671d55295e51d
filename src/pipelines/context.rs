//! Pipeline context for dependency injection

use std::sync::Arc;

use crate::services::market_data::MarketDataProvider;

/// Shared collaborators handed to every pipeline run.
///
/// Only the data provider lives here; pipelines hold no other state between
/// runs.
#[derive(Clone)]
pub struct PipelineContext {
    pub data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
}

impl PipelineContext {
    pub fn new(data_provider: Arc<dyn MarketDataProvider + Send + Sync>) -> Self {
        Self { data_provider }
    }
}
