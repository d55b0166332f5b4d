use std::sync::Arc;

use crate::config::Config;
use crate::report::review::CvReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured; the review endpoint then answers 503.
    pub reviewer: Option<Arc<dyn CvReviewer>>,
}
