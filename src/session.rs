//! Session — process-local authentication state for one interactive run.
//!
//! DESIGN
//! ======
//! The session is owned by the navigator and handed to views by `&mut`.
//! Only a successful login and a logout mutate it; every other path
//! (validation errors, rejections, transport failures) leaves it untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::fmt;

use serde::Serialize;

/// The value that ties a prediction request to a registered user.
///
/// The backend returns a numeric id; older deployments only know the
/// username. Both serialize as a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Identity {
    Id(i64),
    Username(String),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Authentication state. An authenticated session always carries an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        identity: Identity,
    },
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity } => Some(identity),
        }
    }

    /// Record a successful login, replacing any previous identity.
    pub fn authenticate(&mut self, identity: Identity) {
        tracing::info!(%identity, "session authenticated");
        *self = Self::Authenticated { identity };
    }

    /// Return to the initial state regardless of the current one.
    pub fn reset(&mut self) {
        if self.is_authenticated() {
            tracing::info!("session reset");
        }
        *self = Self::Anonymous;
    }
}
