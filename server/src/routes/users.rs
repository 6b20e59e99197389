//! User creation route: a whole enrollment draft in one request.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use enrollment::{EnrollmentDraft, User};

use super::flows::IssueDto;
use crate::services::account;
use crate::state::AppState;

/// Body of a 422 response: everything blocking the draft.
#[derive(Debug, Serialize)]
pub struct RejectedDraft {
    pub issues: Vec<IssueDto>,
}

/// `POST /api/users` — create a user from a complete draft, bypassing the
/// step-by-step flow. Incomplete drafts get a 422 with the issue list.
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<EnrollmentDraft>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<RejectedDraft>)> {
    match account::create_user(&state, &draft).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(issues) => {
            let body = RejectedDraft { issues: issues.into_iter().map(Into::into).collect() };
            Err((StatusCode::UNPROCESSABLE_ENTITY, Json(body)))
        }
    }
}
