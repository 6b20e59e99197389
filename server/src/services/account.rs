//! Account service — turn a finished draft into a stored user.
//!
//! DESIGN
//! ======
//! The flow service is the main entry point for enrollment, but the user
//! endpoint also accepts a whole draft in one request. A bare draft can be
//! missing choices the wizard would have forced, so the precheck here adds
//! the age-group and level requirements on top of the field validation.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use tracing::info;

use enrollment::draft::validate;
use enrollment::{EnrollmentDraft, User, ValidationIssue};

use crate::state::AppState;

/// Everything blocking this draft from becoming a user, in display order.
#[must_use]
pub fn draft_issues(draft: &EnrollmentDraft) -> Vec<ValidationIssue> {
    let mut issues = validate(draft);
    if draft.age_group.is_none() {
        issues.push(ValidationIssue::AgeGroupRequired);
    }
    if draft.learning_level.is_none() {
        issues.push(ValidationIssue::LevelRequired);
    }
    issues
}

/// Create and store a user from a complete draft.
pub async fn create_user(
    state: &AppState,
    draft: &EnrollmentDraft,
) -> Result<User, Vec<ValidationIssue>> {
    let issues = draft_issues(draft);
    if !issues.is_empty() {
        return Err(issues);
    }
    // The precheck covers every reason `from_draft` can decline.
    let user = User::from_draft(draft).ok_or(issues)?;
    state.users.write().await.push(user.clone());
    info!(email = %user.email, "user created from draft");
    Ok(user)
}
