//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The session catalog is immutable and shared; each enrollment flow is an
//! independent, single-owner session object keyed by UUID; users created
//! during this process's lifetime live in a plain in-memory list. Nothing
//! is persisted — persistence is an explicit non-goal of this product.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use enrollment::catalog::sample_catalog;
use enrollment::{EnrollmentState, Session, User};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Read-only session catalog, shared by every flow.
    pub catalog: Arc<Vec<Session>>,
    /// Live enrollment flows keyed by flow id.
    pub flows: Arc<RwLock<HashMap<Uuid, EnrollmentState>>>,
    /// Users created by completed flows, direct signups, or the login stub.
    pub users: Arc<RwLock<Vec<User>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(sample_catalog()),
            flows: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
