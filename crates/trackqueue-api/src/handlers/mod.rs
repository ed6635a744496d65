//! API request handlers.

pub mod config;
pub mod health;
pub mod queue;
pub mod submissions;

pub use config::*;
pub use health::*;
pub use queue::*;
pub use submissions::*;
