//! Enrollment draft: the in-progress, not-yet-submitted signup data.
//!
//! DESIGN
//! ======
//! The draft is owned exclusively by one flow instance and lives only while
//! the learner is on the signup path. Validation is a pure issue list —
//! missing fields keep the submit control disabled, they never raise.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, LearningLevel, SessionId};

/// Free-text account details collected in the final wizard step.
///
/// Only `name`, `email`, and `password` gate submission; the remaining
/// fields are collected but not validated beyond presence on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub country: String,
    pub country_code: String,
    pub phone_number: String,
}

/// Names an editable account field for the `EditAccount` flow event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    Name,
    Email,
    Password,
    DateOfBirth,
    Country,
    CountryCode,
    PhoneNumber,
}

/// The in-progress enrollment data, built up step by step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentDraft {
    /// Chosen age group; unset until step one completes.
    pub age_group: Option<AgeGroup>,
    /// Chosen learning level; only set once `age_group` is set.
    pub learning_level: Option<LearningLevel>,
    /// Selected session ids; only populated once both choices are made.
    pub selected_session_ids: BTreeSet<SessionId>,
    /// Account details from the final step.
    pub account: AccountFields,
}

impl EnrollmentDraft {
    /// Write one account field.
    pub fn set_account_field(&mut self, field: AccountField, value: String) {
        let slot = match field {
            AccountField::Name => &mut self.account.name,
            AccountField::Email => &mut self.account.email,
            AccountField::Password => &mut self.account.password,
            AccountField::DateOfBirth => &mut self.account.date_of_birth,
            AccountField::Country => &mut self.account.country,
            AccountField::CountryCode => &mut self.account.country_code,
            AccountField::PhoneNumber => &mut self.account.phone_number,
        };
        *slot = value;
    }

    /// Toggle a session id in or out of the selection. Self-inverse.
    pub fn toggle_session(&mut self, id: &str) {
        if !self.selected_session_ids.remove(id) {
            self.selected_session_ids.insert(id.to_owned());
        }
    }
}

/// A reason the draft cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    NoSessionSelected,
    NameRequired,
    EmailRequired,
    PasswordRequired,
    /// Only produced by direct draft submission (the account API); the
    /// wizard cannot reach the session step without an age group.
    AgeGroupRequired,
    /// Only produced by direct draft submission (the account API).
    LevelRequired,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoSessionSelected => "Select at least one session.",
            Self::NameRequired => "Full name is required.",
            Self::EmailRequired => "Email is required.",
            Self::PasswordRequired => "Password is required.",
            Self::AgeGroupRequired => "Choose an age group.",
            Self::LevelRequired => "Choose a learning level.",
        };
        f.write_str(message)
    }
}

/// Everything blocking submission, in display order.
#[must_use]
pub fn validate(draft: &EnrollmentDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if draft.selected_session_ids.is_empty() {
        issues.push(ValidationIssue::NoSessionSelected);
    }
    if draft.account.name.trim().is_empty() {
        issues.push(ValidationIssue::NameRequired);
    }
    if draft.account.email.trim().is_empty() {
        issues.push(ValidationIssue::EmailRequired);
    }
    if draft.account.password.trim().is_empty() {
        issues.push(ValidationIssue::PasswordRequired);
    }
    issues
}

/// The submit control is enabled iff nothing blocks submission.
#[must_use]
pub fn can_submit(draft: &EnrollmentDraft) -> bool {
    validate(draft).is_empty()
}
