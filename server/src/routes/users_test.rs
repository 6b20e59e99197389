use super::*;
use enrollment::{AccountField, AgeGroup, LearningLevel, PaymentStatus, ValidationIssue};

fn complete_draft() -> EnrollmentDraft {
    let mut draft = EnrollmentDraft::default();
    draft.age_group = Some(AgeGroup::Adult);
    draft.learning_level = Some(LearningLevel::Advanced);
    draft.toggle_session("2");
    draft.set_account_field(AccountField::Name, "Khalid".to_owned());
    draft.set_account_field(AccountField::Email, "khalid@example.com".to_owned());
    draft.set_account_field(AccountField::Password, "hunter2".to_owned());
    draft
}

#[tokio::test]
async fn complete_draft_creates_unpaid_user() {
    let state = AppState::new();
    let (status, Json(user)) =
        create_user(State(state.clone()), Json(complete_draft())).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user.payment_status, PaymentStatus::Unpaid);
    assert_eq!(state.users.read().await.len(), 1);
}

#[tokio::test]
async fn incomplete_draft_is_unprocessable() {
    let state = AppState::new();
    let (status, Json(body)) =
        create_user(State(state), Json(EnrollmentDraft::default())).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.issues.iter().any(|i| i.code == ValidationIssue::AgeGroupRequired));
    assert!(body.issues.iter().any(|i| i.message == "Select at least one session."));
}
