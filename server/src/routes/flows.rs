//! Enrollment flow routes.
//!
//! DESIGN
//! ======
//! The wire surface mirrors the flow service: create, inspect, apply one
//! event, discard. Responses carry a `FlowView` projection rather than the
//! raw state so the client also gets the session list and submit gating the
//! current draft implies.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use enrollment::catalog::visible_sessions;
use enrollment::{
    EnrollmentDraft, EnrollmentEvent, EnrollmentState, Session, Step, User, ValidationIssue,
};

use crate::services::flow::{self, FlowError};
use crate::state::AppState;

/// One validation issue as sent to clients.
#[derive(Debug, Serialize)]
pub struct IssueDto {
    pub code: ValidationIssue,
    pub message: String,
}

impl From<ValidationIssue> for IssueDto {
    fn from(issue: ValidationIssue) -> Self {
        Self { message: issue.to_string(), code: issue }
    }
}

/// Client-facing projection of one flow.
#[derive(Debug, Serialize)]
pub struct FlowView {
    pub id: Uuid,
    pub step: Step,
    pub draft: EnrollmentDraft,
    /// Sessions the session step would show: the strict age/level filter,
    /// falling back to the full catalog when that filter matches nothing.
    /// Empty until both choices are made.
    pub visible_sessions: Vec<Session>,
    pub can_submit: bool,
    pub issues: Vec<IssueDto>,
}

impl FlowView {
    fn project(id: Uuid, flow: &EnrollmentState, catalog: &[Session]) -> Self {
        let shown = match (flow.draft.age_group, flow.draft.learning_level) {
            (Some(age), Some(level)) => {
                visible_sessions(catalog, age, level).into_iter().cloned().collect()
            }
            _ => Vec::new(),
        };
        Self {
            id,
            step: flow.step,
            draft: flow.draft.clone(),
            visible_sessions: shown,
            can_submit: flow.can_submit(),
            issues: flow.issues().into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of posting one event to a flow.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub flow: FlowView,
    /// Set when this event was a successful submit.
    pub user: Option<User>,
    /// Set when this event was a rejected submit.
    pub rejected: Vec<IssueDto>,
}

fn not_found(err: &FlowError) -> StatusCode {
    match err {
        FlowError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// `POST /api/flows` — start a fresh enrollment flow.
pub async fn create_flow(State(state): State<AppState>) -> (StatusCode, Json<FlowView>) {
    let (id, flow) = flow::create_flow(&state).await;
    let view = FlowView::project(id, &flow, &state.catalog);
    (StatusCode::CREATED, Json(view))
}

/// `GET /api/flows/{id}` — current state of one flow.
pub async fn get_flow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlowView>, StatusCode> {
    let flow = flow::get_flow(&state, id).await.map_err(|e| not_found(&e))?;
    Ok(Json(FlowView::project(id, &flow, &state.catalog)))
}

/// `POST /api/flows/{id}/events` — apply one event and return the outcome.
pub async fn apply_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(event): Json<EnrollmentEvent>,
) -> Result<Json<EventResponse>, StatusCode> {
    let outcome = flow::apply_event(&state, id, event).await.map_err(|e| not_found(&e))?;
    Ok(Json(EventResponse {
        flow: FlowView::project(id, &outcome.state, &state.catalog),
        user: outcome.user,
        rejected: outcome.rejected.into_iter().map(Into::into).collect(),
    }))
}

/// `DELETE /api/flows/{id}` — abandon a flow.
pub async fn discard_flow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    flow::discard_flow(&state, id).await.map_err(|e| not_found(&e))?;
    Ok(StatusCode::NO_CONTENT)
}
