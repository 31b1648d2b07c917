//! Shared state for the dashboard API.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared context for all API routes: the immutable record store.
/// Cloning is cheap; every clone reads the same seeded data.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<RecordStore>,
}

impl ApiContext {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
