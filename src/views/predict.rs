//! Predict view: send clinical parameters for a risk prediction.

#[cfg(test)]
#[path = "predict_test.rs"]
mod tests;

use crate::api::wire::{PredictionLabel, PredictionRequest, parse_prediction};
use crate::api::{Backend, Endpoint};
use crate::clinical::ClinicalDraft;
use crate::notice::Notice;
use crate::session::Session;

pub const LOGIN_REQUIRED: &str = "Please login to access prediction.";
pub const NO_RISK: &str = "Prediction: No Risk of Heart Disease Detected";
pub const HIGH_RISK: &str = "Prediction: High Risk of Heart Disease Detected";
pub const PREDICTION_FAILED: &str = "Prediction failed. Make sure you are logged in and all fields are filled.";

/// Notice for an anonymous session, `None` when prediction is allowed.
#[must_use]
pub fn gate(session: &Session) -> Option<Notice> {
    if session.is_authenticated() { None } else { Some(Notice::warning(LOGIN_REQUIRED)) }
}

#[must_use]
pub fn outcome(label: PredictionLabel) -> Notice {
    match label {
        PredictionLabel::NoRisk => Notice::success(NO_RISK),
        PredictionLabel::HighRisk => Notice::warning(HIGH_RISK),
    }
}

/// Submit a prediction. No request is built unless the session is
/// authenticated and every field is present.
pub async fn submit(session: &Session, backend: &dyn Backend, draft: &ClinicalDraft) -> Notice {
    let Some(identity) = session.identity() else {
        return Notice::warning(LOGIN_REQUIRED);
    };
    let Some(params) = draft.complete() else {
        tracing::debug!("prediction form incomplete");
        return Notice::error(PREDICTION_FAILED);
    };

    let body = match serde_json::to_value(PredictionRequest::new(identity, &params)) {
        Ok(body) => body,
        Err(e) => return Notice::error(format!("Could not encode prediction: {e}")),
    };

    let reply = match backend.post(Endpoint::Predict, body).await {
        Ok(reply) => reply,
        Err(error) => return super::connection_error(&error),
    };
    if !reply.is_ok() {
        tracing::debug!(status = reply.status, "prediction rejected");
        return Notice::error(PREDICTION_FAILED);
    }

    match reply.json().as_ref().and_then(parse_prediction) {
        Some(label) => {
            tracing::info!(?label, "prediction received");
            outcome(label)
        }
        None => Notice::error(PREDICTION_FAILED),
    }
}
