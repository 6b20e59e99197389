//! Flow service — lifecycle of server-side enrollment flow instances.
//!
//! DESIGN
//! ======
//! Each flow is an independent, single-owner session object: created
//! empty, mutated only through `apply_event`, and removed the moment it
//! either submits successfully (the draft has become a user) or is
//! explicitly discarded. Flows never touch each other and never touch the
//! catalog.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use tracing::info;
use uuid::Uuid;

use enrollment::{EnrollmentEvent, EnrollmentState, FlowAction, User, ValidationIssue};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("flow not found: {0}")]
    NotFound(Uuid),
}

/// Result of applying one event to a flow.
#[derive(Debug, Clone)]
pub struct EventOutcome {
    /// Flow state after the event.
    pub state: EnrollmentState,
    /// The user created by a successful submit, if any.
    pub user: Option<User>,
    /// Issues from a rejected submit, if any.
    pub rejected: Vec<ValidationIssue>,
}

/// Create a fresh flow and return its id and initial state.
pub async fn create_flow(state: &AppState) -> (Uuid, EnrollmentState) {
    let id = Uuid::new_v4();
    let flow = EnrollmentState::new();
    state.flows.write().await.insert(id, flow.clone());
    info!(%id, "enrollment flow created");
    (id, flow)
}

/// Look up a flow's current state.
pub async fn get_flow(state: &AppState, id: Uuid) -> Result<EnrollmentState, FlowError> {
    state.flows.read().await.get(&id).cloned().ok_or(FlowError::NotFound(id))
}

/// Apply one event to a flow. A successful submit stores the new user and
/// removes the flow — the draft's lifetime ends at completion.
pub async fn apply_event(
    state: &AppState,
    id: Uuid,
    event: EnrollmentEvent,
) -> Result<EventOutcome, FlowError> {
    let mut flows = state.flows.write().await;
    let flow = flows.get_mut(&id).ok_or(FlowError::NotFound(id))?;

    let action = flow.apply(event);
    let outcome = match action {
        FlowAction::Submitted(user) => {
            let snapshot = flow.clone();
            flows.remove(&id);
            drop(flows);
            state.users.write().await.push(user.clone());
            info!(%id, email = %user.email, "enrollment flow submitted");
            EventOutcome { state: snapshot, user: Some(user), rejected: Vec::new() }
        }
        FlowAction::Rejected(issues) => {
            EventOutcome { state: flow.clone(), user: None, rejected: issues }
        }
        FlowAction::Updated | FlowAction::None => {
            EventOutcome { state: flow.clone(), user: None, rejected: Vec::new() }
        }
    };
    Ok(outcome)
}

/// Discard a flow (the client navigated away from the signup path).
pub async fn discard_flow(state: &AppState, id: Uuid) -> Result<(), FlowError> {
    if state.flows.write().await.remove(&id).is_none() {
        return Err(FlowError::NotFound(id));
    }
    info!(%id, "enrollment flow discarded");
    Ok(())
}
