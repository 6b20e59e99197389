//! Session catalog routes.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use enrollment::catalog::filter_sessions;
use enrollment::{AgeGroup, LearningLevel, Session};

use crate::state::AppState;

/// Optional catalog filters. Absent fields match everything.
#[derive(Debug, Default, Deserialize)]
pub struct SessionsQuery {
    pub age_group: Option<AgeGroup>,
    pub level: Option<LearningLevel>,
}

/// `GET /api/sessions` — the catalog, optionally narrowed by age group and
/// level. Strict filtering only; the full-catalog fallback is a flow-view
/// concern, not a catalog one.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionsQuery>,
) -> Json<Vec<Session>> {
    let sessions: Vec<Session> = filter_sessions(&state.catalog, query.age_group, query.level)
        .into_iter()
        .cloned()
        .collect();
    Json(sessions)
}
