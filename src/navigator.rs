//! Navigator — menu routing over the session state machine.
//!
//! STATE MACHINE
//! =============
//! `Anonymous --login ok--> Authenticated --logout--> Anonymous`. The menu
//! only offers Predict once authenticated, and the predict view checks
//! again before any request is built. Registration never transitions.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::api::Backend;
use crate::forms::{self, FormError, Prompt};
use crate::notice::Notice;
use crate::session::Session;
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    Register,
    Predict,
    Logout,
}

impl MenuChoice {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Predict => "Predict",
            Self::Logout => "Logout",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown menu entry: {0}")]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "predict" => Ok(Self::Predict),
            "logout" => Ok(Self::Logout),
            _ => Err(UnknownChoice(s.trim().to_owned())),
        }
    }
}

const ANONYMOUS_MENU: &[MenuChoice] = &[MenuChoice::Login, MenuChoice::Register];
const AUTHENTICATED_MENU: &[MenuChoice] = &[MenuChoice::Predict, MenuChoice::Logout];

/// Entries offered for the current session.
#[must_use]
pub fn current_menu(session: &Session) -> &'static [MenuChoice] {
    if session.is_authenticated() { AUTHENTICATED_MENU } else { ANONYMOUS_MENU }
}

/// Resolve a typed selection against the current menu, by name or 1-based position.
///
/// # Errors
///
/// Returns [`UnknownChoice`] if nothing in the current menu matches.
pub fn select(session: &Session, raw: &str) -> Result<MenuChoice, UnknownChoice> {
    let menu = current_menu(session);
    let trimmed = raw.trim();
    let choice = match trimmed.parse::<usize>() {
        Ok(position) => position.checked_sub(1).and_then(|index| menu.get(index)).copied(),
        Err(_) => trimmed.parse::<MenuChoice>().ok().filter(|choice| menu.contains(choice)),
    };
    choice.ok_or_else(|| UnknownChoice(trimmed.to_owned()))
}

/// Owns the session and routes menu choices to views.
pub struct Navigator<B> {
    session: Session,
    backend: B,
}

impl<B: Backend> Navigator<B> {
    pub fn new(backend: B) -> Self {
        Self { session: Session::new(), backend }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn menu(&self) -> &'static [MenuChoice] {
        current_menu(&self.session)
    }

    /// Run the view for `choice`, collecting its input from `prompt`.
    ///
    /// # Errors
    ///
    /// Only prompt failures (closed or cancelled input, terminal errors)
    /// are returned; every outcome of the view itself is a [`Notice`].
    pub async fn dispatch(&mut self, choice: MenuChoice, prompt: &mut dyn Prompt) -> Result<Notice, FormError> {
        tracing::debug!(%choice, authenticated = self.session.is_authenticated(), "dispatch");
        match choice {
            MenuChoice::Login => {
                if self.session.is_authenticated() {
                    return Ok(Notice::info("Already logged in."));
                }
                let form = forms::collect_login(prompt)?;
                Ok(views::login::submit(&mut self.session, &self.backend, &form).await)
            }
            MenuChoice::Register => {
                let form = forms::collect_register(prompt)?;
                Ok(views::register::submit(&self.backend, &form).await)
            }
            MenuChoice::Predict => {
                if let Some(warning) = views::predict::gate(&self.session) {
                    return Ok(warning);
                }
                prompt.say("Heart Disease Prediction");
                prompt.say("Enter your details below to predict the risk of heart disease.");
                let draft = forms::collect_clinical(prompt)?;
                Ok(views::predict::submit(&self.session, &self.backend, &draft).await)
            }
            MenuChoice::Logout => Ok(views::logout::run(&mut self.session)),
        }
    }
}
