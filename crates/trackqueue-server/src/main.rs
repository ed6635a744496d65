//! TrackQueue server binary.
//!
//! Start the server with:
//! ```bash
//! TRACKQUEUE_ADMIN_TOKENS=secret cargo run -p trackqueue-server
//! ```

mod config;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trackqueue_api::{serve, AppState};
use trackqueue_engine::SubmissionQueue;
use trackqueue_persistence::{FileStore, MemoryStore, SubmissionStore};

use crate::config::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env.local first, then .env
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = Args::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(args.log_filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store: Arc<dyn SubmissionStore> = if args.memory {
        tracing::warn!("Using in-memory store; the queue is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let dir = args.data_dir();
        let store = FileStore::open(&dir).await?;
        tracing::info!(path = %store.path().display(), "Opened queue store");
        Arc::new(store)
    };

    let config = args.api_config();
    if config.admin_tokens.is_empty() {
        tracing::warn!("No admin tokens configured; moderation endpoints will reject every request");
    }

    println!("\nTrackQueue");
    println!("   Listening: http://{}", config.bind_address());
    println!("   Press Ctrl+C to stop\n");

    serve(AppState::new(config, SubmissionQueue::new(store))).await?;
    Ok(())
}
