use crate::models::DemoConfig;
use std::sync::Arc;
use veriscan_classifiers::{Classifier, UrlHeuristic};

/// Shared application state
///
/// Everything here is read-only once built; requests share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Demo configuration
    pub config: Arc<DemoConfig>,

    /// The text classifier, loaded once before serving
    pub classifier: Arc<dyn Classifier>,

    /// Keyword denylist matcher for URL analysis
    pub url_heuristic: Arc<UrlHeuristic>,
}

impl AppState {
    pub fn new(config: DemoConfig, classifier: Arc<dyn Classifier>) -> veriscan_core::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            classifier,
            url_heuristic: Arc::new(UrlHeuristic::new()?),
        })
    }
}
