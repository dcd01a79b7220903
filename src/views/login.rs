//! Login view: authenticate and record the identity the server hands back.

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use crate::api::wire::{LoginRequest, parse_login_identity};
use crate::api::{Backend, Endpoint};
use crate::forms::LoginForm;
use crate::notice::Notice;
use crate::session::{Identity, Session};

pub const LOGIN_OK: &str = "Login successful";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Submit a login. On HTTP 200 the session becomes authenticated with the
/// server's identity, or the submitted username when the server sends none.
/// Every other outcome leaves the session as it was.
pub async fn submit(session: &mut Session, backend: &dyn Backend, form: &LoginForm) -> Notice {
    if let Err(error) = form.validate() {
        return Notice::error(error.to_string());
    }

    let request = LoginRequest { username: &form.username, password: &form.password };
    let body = match serde_json::to_value(&request) {
        Ok(body) => body,
        Err(e) => return Notice::error(format!("Could not encode login: {e}")),
    };

    let reply = match backend.post(Endpoint::Login, body).await {
        Ok(reply) => reply,
        Err(error) => return super::connection_error(&error),
    };

    if !reply.is_ok() {
        tracing::debug!(status = reply.status, "login rejected");
        return Notice::error(INVALID_CREDENTIALS);
    }

    let identity = reply
        .json()
        .as_ref()
        .and_then(parse_login_identity)
        .unwrap_or_else(|| Identity::Username(form.username.clone()));
    session.authenticate(identity);
    Notice::success(LOGIN_OK)
}
