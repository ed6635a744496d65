//! Shared fixtures for API tests.

use std::sync::Arc;

use trackqueue_engine::SubmissionQueue;
use trackqueue_models::{NewSubmission, SubmissionId, SubmissionPatch};
use trackqueue_persistence::{MemoryStore, SubmissionStore};

use crate::config::ApiConfig;
use crate::state::AppState;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const OWNER_TOKEN: &str = "owner-token";

/// Builds state over a fresh memory store with one admin and one owner token.
pub fn make_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = ApiConfig::default()
        .with_admin_tokens(vec![ADMIN_TOKEN.to_string()])
        .with_owner_tokens(vec![OWNER_TOKEN.to_string()]);
    (
        AppState::new(config, SubmissionQueue::new(store.clone())),
        store,
    )
}

/// Stores one submission per order key.
pub async fn seed_orders(store: &MemoryStore, orders: &[f64]) -> Vec<SubmissionId> {
    let mut ids = Vec::new();
    for (i, order) in orders.iter().enumerate() {
        let sub = store
            .create(NewSubmission::new(format!("https://soundcloud.com/artist/{}", i)))
            .await
            .unwrap();
        store
            .update_fields(&sub.id, SubmissionPatch::new().with_order(*order))
            .await
            .unwrap();
        ids.push(sub.id);
    }
    ids
}
