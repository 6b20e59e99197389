//! The signup flow state machine.
//!
//! DESIGN
//! ======
//! One value, one reducer. Every mutation of the enrollment draft goes
//! through [`EnrollmentState::apply`], which enforces step preconditions
//! and the downstream-clearing rule on back navigation. Hosts (the Leptos
//! client, the HTTP flow service) receive a [`FlowAction`] telling them
//! what, if anything, happened — mirroring how the rest of the stack turns
//! input events into host-processed actions.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, LearningLevel, SessionId};
use crate::draft::{AccountField, EnrollmentDraft, ValidationIssue, can_submit, validate};
use crate::user::User;

/// Where the learner is in the wizard. Linear; no cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Choosing child vs adult.
    #[default]
    AgeGroup,
    /// Choosing beginner / advanced / hifz.
    Level,
    /// Picking sessions and filling in account details.
    SessionAndAccount,
    /// Flow finished; the draft has become a `User`.
    Submitted,
}

/// A discrete user input to the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnrollmentEvent {
    SelectAgeGroup { age_group: AgeGroup },
    SelectLevel { level: LearningLevel },
    ToggleSession { id: SessionId },
    EditAccount { field: AccountField, value: String },
    BackToAgeGroup,
    BackToLevel,
    Submit,
}

/// What an applied event did, for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// Event was not applicable in the current step; state unchanged.
    None,
    /// State changed; re-render.
    Updated,
    /// Submit succeeded; the flow is over and this user exists now.
    Submitted(User),
    /// Submit was blocked; state unchanged.
    Rejected(Vec<ValidationIssue>),
}

/// The whole signup flow: current step plus the draft built so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentState {
    pub step: Step,
    pub draft: EnrollmentDraft,
}

impl EnrollmentState {
    /// A fresh flow at the age-group step with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything currently blocking submission.
    #[must_use]
    pub fn issues(&self) -> Vec<ValidationIssue> {
        validate(&self.draft)
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        can_submit(&self.draft)
    }

    /// Apply one event. Events that don't satisfy their step precondition
    /// are ignored and return [`FlowAction::None`].
    pub fn apply(&mut self, event: EnrollmentEvent) -> FlowAction {
        if self.step == Step::Submitted {
            return FlowAction::None;
        }
        match event {
            EnrollmentEvent::SelectAgeGroup { age_group } => {
                if self.step != Step::AgeGroup {
                    return FlowAction::None;
                }
                self.draft.age_group = Some(age_group);
                self.step = Step::Level;
                FlowAction::Updated
            }
            EnrollmentEvent::SelectLevel { level } => {
                if self.step != Step::Level || self.draft.age_group.is_none() {
                    return FlowAction::None;
                }
                self.draft.learning_level = Some(level);
                self.step = Step::SessionAndAccount;
                FlowAction::Updated
            }
            EnrollmentEvent::ToggleSession { id } => {
                if self.step != Step::SessionAndAccount {
                    return FlowAction::None;
                }
                self.draft.toggle_session(&id);
                FlowAction::Updated
            }
            EnrollmentEvent::EditAccount { field, value } => {
                if self.step != Step::SessionAndAccount {
                    return FlowAction::None;
                }
                self.draft.set_account_field(field, value);
                FlowAction::Updated
            }
            EnrollmentEvent::BackToAgeGroup => {
                if self.step == Step::AgeGroup {
                    return FlowAction::None;
                }
                // Returning to a step clears everything collected at or
                // after it.
                self.draft.age_group = None;
                self.draft.learning_level = None;
                self.draft.selected_session_ids.clear();
                self.step = Step::AgeGroup;
                FlowAction::Updated
            }
            EnrollmentEvent::BackToLevel => {
                if self.step != Step::SessionAndAccount {
                    return FlowAction::None;
                }
                self.draft.learning_level = None;
                self.draft.selected_session_ids.clear();
                self.step = Step::Level;
                FlowAction::Updated
            }
            EnrollmentEvent::Submit => {
                if self.step != Step::SessionAndAccount {
                    return FlowAction::None;
                }
                match User::from_draft(&self.draft) {
                    Some(user) => {
                        self.step = Step::Submitted;
                        FlowAction::Submitted(user)
                    }
                    None => FlowAction::Rejected(self.issues()),
                }
            }
        }
    }
}
