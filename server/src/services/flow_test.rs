use super::*;
use enrollment::{AccountField, AgeGroup, LearningLevel, Step};

async fn drive_to_session_step(state: &AppState, id: Uuid) {
    apply_event(state, id, EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Child })
        .await
        .unwrap();
    apply_event(state, id, EnrollmentEvent::SelectLevel { level: LearningLevel::Beginner })
        .await
        .unwrap();
}

async fn fill_account(state: &AppState, id: Uuid) {
    for (field, value) in [
        (AccountField::Name, "Amina"),
        (AccountField::Email, "amina@example.com"),
        (AccountField::Password, "hunter2"),
    ] {
        apply_event(
            state,
            id,
            EnrollmentEvent::EditAccount { field, value: value.to_owned() },
        )
        .await
        .unwrap();
    }
}

// =============================================================
// create / get / discard
// =============================================================

#[tokio::test]
async fn create_flow_starts_at_age_group() {
    let state = AppState::new();
    let (id, flow) = create_flow(&state).await;
    assert_eq!(flow.step, Step::AgeGroup);
    assert_eq!(get_flow(&state, id).await.unwrap(), flow);
}

#[tokio::test]
async fn flows_are_independent() {
    let state = AppState::new();
    let (a, _) = create_flow(&state).await;
    let (b, _) = create_flow(&state).await;
    drive_to_session_step(&state, a).await;
    let flow_b = get_flow(&state, b).await.unwrap();
    assert_eq!(flow_b.step, Step::AgeGroup);
}

#[tokio::test]
async fn get_unknown_flow_is_not_found() {
    let state = AppState::new();
    let err = get_flow(&state, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, FlowError::NotFound(_)));
}

#[tokio::test]
async fn discard_removes_the_flow() {
    let state = AppState::new();
    let (id, _) = create_flow(&state).await;
    discard_flow(&state, id).await.unwrap();
    assert!(get_flow(&state, id).await.is_err());
}

#[tokio::test]
async fn discard_unknown_flow_is_not_found() {
    let state = AppState::new();
    let err = discard_flow(&state, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, FlowError::NotFound(_)));
}

// =============================================================
// apply_event
// =============================================================

#[tokio::test]
async fn apply_event_advances_the_flow() {
    let state = AppState::new();
    let (id, _) = create_flow(&state).await;
    let outcome = apply_event(
        &state,
        id,
        EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Adult },
    )
    .await
    .unwrap();
    assert_eq!(outcome.state.step, Step::Level);
    assert!(outcome.user.is_none());
    assert!(outcome.rejected.is_empty());
}

#[tokio::test]
async fn rejected_submit_keeps_the_flow_alive() {
    let state = AppState::new();
    let (id, _) = create_flow(&state).await;
    drive_to_session_step(&state, id).await;
    let outcome = apply_event(&state, id, EnrollmentEvent::Submit).await.unwrap();
    assert!(outcome.user.is_none());
    assert!(!outcome.rejected.is_empty());
    assert!(get_flow(&state, id).await.is_ok());
}

#[tokio::test]
async fn successful_submit_stores_user_and_removes_flow() {
    let state = AppState::new();
    let (id, _) = create_flow(&state).await;
    drive_to_session_step(&state, id).await;
    apply_event(&state, id, EnrollmentEvent::ToggleSession { id: "1".to_owned() })
        .await
        .unwrap();
    fill_account(&state, id).await;

    let outcome = apply_event(&state, id, EnrollmentEvent::Submit).await.unwrap();
    let user = outcome.user.expect("submitted user");
    assert_eq!(user.email, "amina@example.com");
    assert_eq!(outcome.state.step, Step::Submitted);

    assert!(get_flow(&state, id).await.is_err());
    let users = state.users.read().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Amina");
}
