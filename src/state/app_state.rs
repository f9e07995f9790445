//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::services::AnalysisService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(analysis_service: Arc<AnalysisService>) -> Self {
        Self { analysis_service }
    }

    /// Construct the state and its services from process configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(AnalysisService::new(config)))
    }
}

impl FromRef<AppState> for Arc<AnalysisService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.analysis_service.clone()
    }
}
