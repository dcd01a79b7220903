use super::*;
use crate::api::Endpoint;
use crate::notice::NoticeLevel;
use crate::test_helpers::MockBackend;
use serde_json::json;

fn form(username: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm { username: username.into(), email: email.into(), password: password.into() }
}

#[tokio::test]
async fn empty_email_is_rejected_without_request() {
    let backend = MockBackend::replying(200, r#"{"message":"ok"}"#);
    let notice = submit(&backend, &form("ada", "", "pw")).await;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("email"));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn whitespace_only_fields_are_blank() {
    let backend = MockBackend::replying(200, "{}");
    let notice = submit(&backend, &form("  ", "a@b.c", "pw")).await;
    assert!(notice.text.contains("username"));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn success_shows_server_message_verbatim() {
    let backend = MockBackend::replying(200, r#"{"message":"User registered successfully"}"#);
    let notice = submit(&backend, &form("ada", "ada@example.com", "pw")).await;
    assert_eq!(notice, Notice::success("User registered successfully"));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Endpoint::Register);
    assert_eq!(calls[0].1, json!({ "username": "ada", "email": "ada@example.com", "password": "pw" }));
}

#[tokio::test]
async fn success_without_message_uses_fallback() {
    let backend = MockBackend::replying(200, "");
    let notice = submit(&backend, &form("ada", "a@b.c", "pw")).await;
    assert_eq!(notice, Notice::success(REGISTERED_FALLBACK));
}

#[tokio::test]
async fn rejection_shows_detail() {
    let backend = MockBackend::replying(400, r#"{"detail":"Username already exists"}"#);
    let notice = submit(&backend, &form("ada", "a@b.c", "pw")).await;
    assert_eq!(notice, Notice::error("Username already exists"));
}

#[tokio::test]
async fn unparseable_rejection_shows_raw_text() {
    let backend = MockBackend::replying(502, "Bad Gateway");
    let notice = submit(&backend, &form("ada", "a@b.c", "pw")).await;
    assert_eq!(notice, Notice::error("Bad Gateway"));
}

#[tokio::test]
async fn empty_rejection_body_names_status() {
    let backend = MockBackend::replying(500, "");
    let notice = submit(&backend, &form("ada", "a@b.c", "pw")).await;
    assert_eq!(notice.text, "Registration failed (HTTP 500).");
}

#[tokio::test]
async fn transport_failure_is_distinct_from_rejection() {
    let backend = MockBackend::unreachable();
    let notice = submit(&backend, &form("ada", "a@b.c", "pw")).await;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Could not connect to the server"));
    assert_eq!(backend.call_count(), 1);
}
