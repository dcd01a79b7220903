//! Register view: create an account on the backend.

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;

use crate::api::wire::{RegistrationRequest, registration_message, rejection_detail};
use crate::api::{Backend, Endpoint};
use crate::forms::RegisterForm;
use crate::notice::Notice;

pub const REGISTERED_FALLBACK: &str = "Registration successful.";

/// Submit a registration. Blank fields are rejected before any request.
pub async fn submit(backend: &dyn Backend, form: &RegisterForm) -> Notice {
    if let Err(error) = form.validate() {
        return Notice::error(error.to_string());
    }

    let request = RegistrationRequest { username: &form.username, email: &form.email, password: &form.password };
    let body = match serde_json::to_value(&request) {
        Ok(body) => body,
        Err(e) => return Notice::error(format!("Could not encode registration: {e}")),
    };

    let reply = match backend.post(Endpoint::Register, body).await {
        Ok(reply) => reply,
        Err(error) => return super::connection_error(&error),
    };

    if reply.is_ok() {
        let message = registration_message(reply.json().as_ref()).unwrap_or_else(|| REGISTERED_FALLBACK.to_owned());
        tracing::info!(username = %form.username, "registration accepted");
        return Notice::success(message);
    }

    tracing::debug!(status = reply.status, "registration rejected");
    let detail = rejection_detail(&reply.body);
    if detail.is_empty() {
        Notice::error(format!("Registration failed (HTTP {}).", reply.status))
    } else {
        Notice::error(detail)
    }
}
