//! REST API for TrackQueue.
//!
//! This crate exposes the submission queue over HTTP:
//! - Public: list the queue, submit a track, read the intake switch
//! - Admin: delete, move-to-top, move-after, swap reorder, toggle intake
//! - Admin or channel owner: clear the whole queue
//!
//! Every response body carries a boolean `success`; failures add a
//! human-readable `message`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trackqueue_api::{ApiConfig, AppState, serve};
//! use trackqueue_engine::SubmissionQueue;
//! use trackqueue_persistence::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let queue = SubmissionQueue::new(Arc::new(MemoryStore::new()));
//!     let config = ApiConfig::default().with_admin_tokens(vec!["secret".into()]);
//!
//!     serve(AppState::new(config, queue)).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use auth::Caller;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use extract::ApiJson;
pub use router::{create_router, serve};
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support;
