//! Login route.
//!
//! Authentication is a stub end to end: any non-empty credentials succeed
//! and fabricate a paid account. See `enrollment::user::login_stub`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use enrollment::user::login_stub;
use enrollment::User;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — fabricate a paid user for any credentials.
/// Rejects only blank fields.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<User>, StatusCode> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let user = login_stub(&request.email, &request.password);
    info!(email = %user.email, "stub login");
    Ok(Json(user))
}
