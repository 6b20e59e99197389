use super::*;
use crate::catalog::sample_catalog;
use crate::draft::AccountField;

fn complete_draft() -> EnrollmentDraft {
    let mut draft = EnrollmentDraft {
        age_group: Some(AgeGroup::Child),
        learning_level: Some(LearningLevel::Hifz),
        ..EnrollmentDraft::default()
    };
    draft.toggle_session("3");
    draft.set_account_field(AccountField::Name, "  Yusuf  ".to_owned());
    draft.set_account_field(AccountField::Email, "yusuf@example.com".to_owned());
    draft.set_account_field(AccountField::Password, "secret".to_owned());
    draft
}

// =============================================================
// User::from_draft
// =============================================================

#[test]
fn from_draft_builds_unpaid_user() {
    let user = User::from_draft(&complete_draft()).unwrap();
    assert_eq!(user.name, "Yusuf");
    assert_eq!(user.email, "yusuf@example.com");
    assert_eq!(user.user_type, AgeGroup::Child);
    assert_eq!(user.learning_level, LearningLevel::Hifz);
    assert!(user.selected_session_ids.contains("3"));
    assert_eq!(user.payment_status, PaymentStatus::Unpaid);
}

#[test]
fn from_draft_rejects_incomplete_draft() {
    let mut draft = complete_draft();
    draft.set_account_field(AccountField::Email, String::new());
    assert!(User::from_draft(&draft).is_none());
}

#[test]
fn from_draft_rejects_empty_selection() {
    let mut draft = complete_draft();
    draft.toggle_session("3");
    assert!(User::from_draft(&draft).is_none());
}

// =============================================================
// User::sessions
// =============================================================

#[test]
fn sessions_resolve_in_catalog_order() {
    let catalog = sample_catalog();
    let mut draft = complete_draft();
    draft.toggle_session("1"); // now {"1", "3"}
    let user = User::from_draft(&draft).unwrap();
    let sessions = user.sessions(&catalog);
    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn sessions_ignore_ids_missing_from_catalog() {
    let catalog = sample_catalog();
    let mut draft = complete_draft();
    draft.toggle_session("999");
    let user = User::from_draft(&draft).unwrap();
    assert_eq!(user.sessions(&catalog).len(), 1);
}

// =============================================================
// login_stub
// =============================================================

#[test]
fn login_stub_fabricates_paid_beginner() {
    let user = login_stub("a@b.com", "anything");
    assert_eq!(user.name, "a");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.payment_status, PaymentStatus::Paid);
    assert_eq!(user.learning_level, LearningLevel::Beginner);
    assert_eq!(
        user.selected_session_ids,
        std::collections::BTreeSet::from([DEFAULT_SESSION_ID.to_owned()])
    );
}

#[test]
fn login_stub_ignores_password_entirely() {
    let a = login_stub("a@b.com", "x");
    let b = login_stub("a@b.com", "completely-different");
    assert_eq!(a, b);
}

#[test]
fn login_stub_trims_email() {
    let user = login_stub("  sara@example.com ", "pw");
    assert_eq!(user.email, "sara@example.com");
    assert_eq!(user.name, "sara");
}

#[test]
fn login_stub_default_session_exists_in_catalog() {
    let catalog = sample_catalog();
    assert!(catalog.iter().any(|s| s.id == DEFAULT_SESSION_ID));
}
