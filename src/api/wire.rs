//! Wire types for the prediction service and the adapters that read its replies.

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

use serde::Serialize;
use serde_json::Value;

use crate::clinical::{ClinicalCode, ClinicalParameters};
use crate::session::Identity;

#[derive(Debug, Serialize)]
pub struct RegistrationRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Prediction payload in the backend's field naming.
#[derive(Debug, Serialize, PartialEq)]
pub struct PredictionRequest<'a> {
    pub user_id: &'a Identity,
    pub age: u16,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: u16,
    pub chol: u16,
    pub fbs: u8,
    pub restecg: u8,
    pub thalach: u16,
    pub exang: u8,
    pub oldpeak: f64,
    pub slope: u8,
}

impl<'a> PredictionRequest<'a> {
    #[must_use]
    pub fn new(identity: &'a Identity, p: &ClinicalParameters) -> Self {
        Self {
            user_id: identity,
            age: p.age,
            sex: p.sex.code(),
            cp: p.chest_pain_type.code(),
            trestbps: p.resting_bp,
            chol: p.cholesterol,
            fbs: p.fasting_blood_sugar.code(),
            restecg: p.resting_ecg.code(),
            thalach: p.max_heart_rate,
            exang: p.exercise_angina.code(),
            oldpeak: p.st_depression,
            slope: p.st_slope.code(),
        }
    }
}

/// Backend prediction label. `1` means no risk was detected; every other
/// label is reported as high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    NoRisk,
    HighRisk,
}

impl PredictionLabel {
    #[must_use]
    pub fn from_label(label: i64) -> Self {
        if label == 1 { Self::NoRisk } else { Self::HighRisk }
    }
}

/// Read the `prediction` field of a successful predict reply.
#[must_use]
pub fn parse_prediction(body: &Value) -> Option<PredictionLabel> {
    let raw = body.get("prediction")?;
    let label = match raw {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| i64::from(f == 1.0)))?,
        Value::Array(items) if items.len() == 1 => items[0].as_i64()?,
        _ => return None,
    };
    Some(PredictionLabel::from_label(label))
}

/// Identity returned by a successful login, if the server sent one.
///
/// Accepts `user_id` as a number (integral or not) or string, then `username`.
#[must_use]
pub fn parse_login_identity(body: &Value) -> Option<Identity> {
    match body.get("user_id") {
        Some(Value::Number(n)) => return Some(numeric_identity(n)),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            return Some(match s.trim().parse::<i64>() {
                Ok(id) => Identity::Id(id),
                Err(_) => Identity::Username(s.clone()),
            });
        }
        _ => {}
    }
    body.get("username")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(|s| Identity::Username(s.to_owned()))
}

/// Largest magnitude at which every integral `f64` is exact.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// A numeric `user_id` is always an identity: integral values become
/// [`Identity::Id`], anything else keeps its JSON text.
#[allow(clippy::cast_possible_truncation)]
fn numeric_identity(n: &serde_json::Number) -> Identity {
    if let Some(id) = n.as_i64() {
        return Identity::Id(id);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64_INT => Identity::Id(f as i64),
        _ => Identity::Username(n.to_string()),
    }
}

/// Text of a successful registration reply.
#[must_use]
pub fn registration_message(body: Option<&Value>) -> Option<String> {
    body?
        .get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Text to show for a rejected request: the `detail` field when the body is
/// JSON carrying one, otherwise the raw body.
#[must_use]
pub fn rejection_detail(raw: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return raw.trim().to_owned();
    };
    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => raw.trim().to_owned(),
    }
}
