//! User records synthesized by the signup flow and the login shortcut.
//!
//! The login path is a stub: any credentials succeed and fabricate a paid
//! user. That matches the original product demo exactly and is kept — and
//! named — as a stub. Nothing here is real authentication.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, LearningLevel, Session, SessionId};
use crate::draft::{EnrollmentDraft, can_submit};

/// Session granted to every stub-login user.
pub const DEFAULT_SESSION_ID: &str = "1";

/// Whether the account has an active subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// An account for the lifetime of the browsing session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub user_type: AgeGroup,
    pub learning_level: LearningLevel,
    pub selected_session_ids: BTreeSet<SessionId>,
    pub payment_status: PaymentStatus,
}

impl User {
    /// Build a user from a completed draft. Returns `None` while the draft
    /// is missing selections or required account fields.
    #[must_use]
    pub fn from_draft(draft: &EnrollmentDraft) -> Option<Self> {
        if !can_submit(draft) {
            return None;
        }
        let (age_group, learning_level) = (draft.age_group?, draft.learning_level?);
        Some(Self {
            name: draft.account.name.trim().to_owned(),
            email: draft.account.email.trim().to_owned(),
            user_type: age_group,
            learning_level,
            selected_session_ids: draft.selected_session_ids.clone(),
            payment_status: PaymentStatus::Unpaid,
        })
    }

    /// The sessions this user enrolled in, resolved against the catalog in
    /// catalog order.
    #[must_use]
    pub fn sessions<'a>(&self, catalog: &'a [Session]) -> Vec<&'a Session> {
        catalog.iter().filter(|s| self.selected_session_ids.contains(&s.id)).collect()
    }
}

/// Login shortcut: unconditionally synthesizes a paid beginner account.
///
/// The password is accepted but never inspected. The display name is the
/// local part of the email address.
#[must_use]
pub fn login_stub(email: &str, _password: &str) -> User {
    let email = email.trim();
    let name = email.split('@').next().unwrap_or(email).to_owned();
    User {
        name,
        email: email.to_owned(),
        user_type: AgeGroup::Adult,
        learning_level: LearningLevel::Beginner,
        selected_session_ids: BTreeSet::from([DEFAULT_SESSION_ID.to_owned()]),
        payment_status: PaymentStatus::Paid,
    }
}
