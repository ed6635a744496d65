//! Persistence layer for TrackQueue.
//!
//! This crate provides the document store the queue runs on: point reads,
//! full scans, field updates, deletes and all-or-nothing write batches of at
//! most [`MAX_BATCH_WRITES`] mutations.
//!
//! Two backends are provided:
//! - [`MemoryStore`]: everything in memory, for tests and throwaway queues
//! - [`FileStore`]: write-through JSON snapshot, crash-safe via temp file + rename
//!
//! # Example
//!
//! ```no_run
//! use trackqueue_persistence::{FileStore, SubmissionStore};
//! use trackqueue_models::NewSubmission;
//!
//! # async fn example() -> trackqueue_persistence::Result<()> {
//! let store = FileStore::open("/home/user/.trackqueue").await?;
//!
//! let sub = store
//!     .create(NewSubmission::new("https://soundcloud.com/artist/track"))
//!     .await?;
//!
//! let mut batch = store.batch();
//! batch.delete(sub.id.clone());
//! store.commit(batch).await?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod batch;
pub mod collection;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use batch::{BatchOp, WriteBatch, MAX_BATCH_WRITES};
pub use error::{PersistenceError, Result};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::SubmissionStore;
