#[cfg(test)]
#[path = "logout_test.rs"]
mod tests;

use crate::notice::Notice;
use crate::session::Session;

pub const LOGGED_OUT: &str = "Logged out successfully.";

/// Reset the session. No network call.
pub fn run(session: &mut Session) -> Notice {
    session.reset();
    Notice::success(LOGGED_OUT)
}
