use super::*;

#[test]
fn new_session_is_anonymous() {
    let session = Session::new();
    assert!(!session.is_authenticated());
    assert_eq!(session.identity(), None);
    assert_eq!(session, Session::Anonymous);
}

#[test]
fn authenticate_sets_flag_and_identity() {
    let mut session = Session::new();
    session.authenticate(Identity::Id(42));
    assert!(session.is_authenticated());
    assert_eq!(session.identity(), Some(&Identity::Id(42)));
}

#[test]
fn authenticate_twice_keeps_latest_identity() {
    let mut session = Session::new();
    session.authenticate(Identity::Id(1));
    session.authenticate(Identity::Username("ada".into()));
    assert_eq!(session.identity(), Some(&Identity::Username("ada".into())));
}

#[test]
fn reset_returns_to_initial_state_for_any_identity() {
    for identity in [Identity::Id(7), Identity::Id(-1), Identity::Username(String::new())] {
        let mut session = Session::new();
        session.authenticate(identity);
        session.reset();
        assert_eq!(session, Session::new());
    }
}

#[test]
fn reset_on_anonymous_is_noop() {
    let mut session = Session::new();
    session.reset();
    assert_eq!(session, Session::Anonymous);
}

#[test]
fn identity_serializes_as_bare_scalar() {
    assert_eq!(serde_json::to_value(Identity::Id(5)).unwrap(), serde_json::json!(5));
    assert_eq!(
        serde_json::to_value(Identity::Username("bob".into())).unwrap(),
        serde_json::json!("bob")
    );
}

#[test]
fn identity_display() {
    assert_eq!(Identity::Id(12).to_string(), "12");
    assert_eq!(Identity::Username("eve".into()).to_string(), "eve");
}
