use super::*;
use crate::clinical::ChestPainType;
use crate::test_helpers::sample_parameters as params;
use serde_json::json;

// ===== requests =====

#[test]
fn prediction_request_uses_backend_field_names() {
    let identity = Identity::Id(1);
    let body = serde_json::to_value(PredictionRequest::new(&identity, &params())).unwrap();
    assert_eq!(
        body,
        json!({
            "user_id": 1,
            "age": 54,
            "sex": 1,
            "cp": 0,
            "trestbps": 130,
            "chol": 246,
            "fbs": 0,
            "restecg": 1,
            "thalach": 150,
            "exang": 0,
            "oldpeak": 1.0,
            "slope": 2
        })
    );
}

#[test]
fn prediction_request_sends_codes_not_labels() {
    let identity = Identity::Username("ada".into());
    let mut p = params();
    p.chest_pain_type = ChestPainType::Asymptomatic;
    let body = serde_json::to_value(PredictionRequest::new(&identity, &p)).unwrap();
    assert_eq!(body["cp"], json!(3));
    assert_eq!(body["user_id"], json!("ada"));
}

#[test]
fn registration_request_shape() {
    let body = serde_json::to_value(RegistrationRequest { username: "a", email: "a@b.c", password: "pw" }).unwrap();
    assert_eq!(body, json!({ "username": "a", "email": "a@b.c", "password": "pw" }));
}

// ===== prediction label =====

#[test]
fn label_one_means_no_risk() {
    assert_eq!(parse_prediction(&json!({ "prediction": 1 })), Some(PredictionLabel::NoRisk));
}

#[test]
fn label_zero_means_high_risk() {
    assert_eq!(parse_prediction(&json!({ "prediction": 0 })), Some(PredictionLabel::HighRisk));
}

#[test]
fn unexpected_label_is_high_risk() {
    assert_eq!(parse_prediction(&json!({ "prediction": 2 })), Some(PredictionLabel::HighRisk));
}

#[test]
fn float_and_singleton_array_labels() {
    assert_eq!(parse_prediction(&json!({ "prediction": 1.0 })), Some(PredictionLabel::NoRisk));
    assert_eq!(parse_prediction(&json!({ "prediction": [0] })), Some(PredictionLabel::HighRisk));
}

#[test]
fn missing_or_non_numeric_label_is_none() {
    assert_eq!(parse_prediction(&json!({})), None);
    assert_eq!(parse_prediction(&json!({ "prediction": "1" })), None);
    assert_eq!(parse_prediction(&json!({ "prediction": 0.5 })), None);
}

// ===== login identity =====

#[test]
fn login_identity_numeric_user_id() {
    assert_eq!(parse_login_identity(&json!({ "user_id": 42 })), Some(Identity::Id(42)));
}

#[test]
fn login_identity_integral_float_user_id() {
    assert_eq!(parse_login_identity(&json!({ "user_id": 42.0 })), Some(Identity::Id(42)));
}

#[test]
fn login_identity_keeps_numbers_outside_i64() {
    assert_eq!(
        parse_login_identity(&json!({ "user_id": u64::MAX })),
        Some(Identity::Username(u64::MAX.to_string()))
    );
    assert_eq!(
        parse_login_identity(&json!({ "user_id": 4.5 })),
        Some(Identity::Username("4.5".into()))
    );
}

#[test]
fn login_identity_string_user_id() {
    assert_eq!(parse_login_identity(&json!({ "user_id": "17" })), Some(Identity::Id(17)));
    assert_eq!(
        parse_login_identity(&json!({ "user_id": "u-17" })),
        Some(Identity::Username("u-17".into()))
    );
}

#[test]
fn login_identity_falls_back_to_username_field() {
    assert_eq!(
        parse_login_identity(&json!({ "username": "bob" })),
        Some(Identity::Username("bob".into()))
    );
}

#[test]
fn login_identity_absent() {
    assert_eq!(parse_login_identity(&json!({ "message": "ok" })), None);
    assert_eq!(parse_login_identity(&json!({ "user_id": null })), None);
}

// ===== registration / rejection text =====

#[test]
fn registration_message_present_and_absent() {
    assert_eq!(
        registration_message(Some(&json!({ "message": "User created" }))),
        Some("User created".into())
    );
    assert_eq!(registration_message(Some(&json!({}))), None);
    assert_eq!(registration_message(None), None);
}

#[test]
fn rejection_detail_prefers_detail_string() {
    assert_eq!(rejection_detail(r#"{"detail":"Username already exists"}"#), "Username already exists");
}

#[test]
fn rejection_detail_renders_structured_detail() {
    let raw = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
    let detail = rejection_detail(raw);
    assert!(detail.contains("field required"));
}

#[test]
fn rejection_detail_falls_back_to_raw_text() {
    assert_eq!(rejection_detail("Internal Server Error\n"), "Internal Server Error");
    assert_eq!(rejection_detail(r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
}
