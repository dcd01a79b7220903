//! Views — one per menu entry.
//!
//! Each view takes already-collected input, issues at most one backend
//! call, and reports the outcome as a [`Notice`]. Only login and logout
//! touch the session.

pub mod login;
pub mod logout;
pub mod predict;
pub mod register;

use crate::api::TransportError;
use crate::notice::Notice;

/// Transport failures are reported apart from server rejections.
pub(crate) fn connection_error(error: &TransportError) -> Notice {
    Notice::error(format!("Could not connect to the server: {error}"))
}
