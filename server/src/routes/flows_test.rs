use super::*;
use enrollment::{AccountField, AgeGroup, LearningLevel};

async fn post_event(state: &AppState, id: Uuid, event: EnrollmentEvent) -> EventResponse {
    apply_event(State(state.clone()), Path(id), Json(event)).await.unwrap().0
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let state = AppState::new();
    let (status, Json(view)) = create_flow(State(state.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view.step, Step::AgeGroup);
    assert!(view.visible_sessions.is_empty());
    assert!(!view.can_submit);

    let Json(fetched) = get_flow(State(state), Path(view.id)).await.unwrap();
    assert_eq!(fetched.step, Step::AgeGroup);
}

#[tokio::test]
async fn unknown_flow_is_404() {
    let state = AppState::new();
    let err = get_flow(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn view_lists_sessions_once_both_choices_are_made() {
    let state = AppState::new();
    let (_, Json(view)) = create_flow(State(state.clone())).await;
    let id = view.id;

    let response =
        post_event(&state, id, EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Child })
            .await;
    assert!(response.flow.visible_sessions.is_empty());

    let response =
        post_event(&state, id, EnrollmentEvent::SelectLevel { level: LearningLevel::Beginner })
            .await;
    assert_eq!(response.flow.step, Step::SessionAndAccount);
    let ids: Vec<&str> =
        response.flow.visible_sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1"]);
}

#[tokio::test]
async fn view_falls_back_to_full_catalog_when_filter_is_empty() {
    let state = AppState::new();
    let (_, Json(view)) = create_flow(State(state.clone())).await;
    let id = view.id;

    post_event(&state, id, EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Adult }).await;
    let response =
        post_event(&state, id, EnrollmentEvent::SelectLevel { level: LearningLevel::Hifz }).await;
    assert_eq!(response.flow.visible_sessions.len(), 4);
}

#[tokio::test]
async fn rejected_submit_reports_issue_messages() {
    let state = AppState::new();
    let (_, Json(view)) = create_flow(State(state.clone())).await;
    let id = view.id;

    post_event(&state, id, EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Child }).await;
    post_event(&state, id, EnrollmentEvent::SelectLevel { level: LearningLevel::Beginner }).await;
    let response = post_event(&state, id, EnrollmentEvent::Submit).await;

    assert!(response.user.is_none());
    let messages: Vec<&str> = response.rejected.iter().map(|i| i.message.as_str()).collect();
    assert!(messages.contains(&"Select at least one session."));
}

#[tokio::test]
async fn successful_submit_returns_user_and_drops_flow() {
    let state = AppState::new();
    let (_, Json(view)) = create_flow(State(state.clone())).await;
    let id = view.id;

    post_event(&state, id, EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Child }).await;
    post_event(&state, id, EnrollmentEvent::SelectLevel { level: LearningLevel::Beginner }).await;
    post_event(&state, id, EnrollmentEvent::ToggleSession { id: "1".to_owned() }).await;
    for (field, value) in [
        (AccountField::Name, "Amina"),
        (AccountField::Email, "amina@example.com"),
        (AccountField::Password, "hunter2"),
    ] {
        post_event(
            &state,
            id,
            EnrollmentEvent::EditAccount { field, value: value.to_owned() },
        )
        .await;
    }

    let response = post_event(&state, id, EnrollmentEvent::Submit).await;
    assert_eq!(response.flow.step, Step::Submitted);
    assert_eq!(response.user.unwrap().email, "amina@example.com");

    let err = get_flow(State(state), Path(id)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn discard_then_get_is_404() {
    let state = AppState::new();
    let (_, Json(view)) = create_flow(State(state.clone())).await;

    let status = discard_flow(State(state.clone()), Path(view.id)).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(get_flow(State(state), Path(view.id)).await.is_err());
}
