use super::*;

#[tokio::test]
async fn new_state_has_catalog_and_no_flows() {
    let state = AppState::new();
    assert_eq!(state.catalog.len(), 4);
    assert!(state.flows.read().await.is_empty());
    assert!(state.users.read().await.is_empty());
}

#[test]
fn default_equals_new_for_catalog() {
    let a = AppState::new();
    let b = AppState::default();
    assert_eq!(a.catalog.as_ref(), b.catalog.as_ref());
}

#[tokio::test]
async fn state_clone_shares_flow_map() {
    let state = AppState::new();
    let clone = state.clone();
    let id = Uuid::new_v4();
    state.flows.write().await.insert(id, EnrollmentState::new());
    assert!(clone.flows.read().await.contains_key(&id));
}
