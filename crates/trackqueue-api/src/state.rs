//! Application state shared across handlers.

use std::sync::Arc;

use trackqueue_engine::SubmissionQueue;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The submission queue.
    pub queue: SubmissionQueue,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig, queue: SubmissionQueue) -> Self {
        Self {
            config: Arc::new(config),
            queue,
        }
    }
}
