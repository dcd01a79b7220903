//! The interactive menu loop.

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use crate::api::Backend;
use crate::forms::{FormError, Prompt};
use crate::navigator::{MenuChoice, Navigator, select};

fn menu_line(menu: &[MenuChoice]) -> String {
    let entries: Vec<String> = menu.iter().enumerate().map(|(i, choice)| format!("{}) {choice}", i + 1)).collect();
    format!("Menu: {}  (q to quit)", entries.join("  "))
}

fn is_quit(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Show the menu, dispatch the selection, print the outcome; repeat until
/// the user quits or input closes.
///
/// # Errors
///
/// Returns [`FormError::Io`] if the terminal fails.
pub async fn run<B: Backend>(navigator: &mut Navigator<B>, prompt: &mut dyn Prompt) -> Result<(), FormError> {
    loop {
        prompt.say("");
        prompt.say(&menu_line(navigator.menu()));

        let raw = match prompt.ask("Select") {
            Ok(raw) => raw,
            Err(FormError::Cancelled) => continue,
            Err(FormError::Closed) => return Ok(()),
            Err(e) => return Err(e),
        };
        if is_quit(&raw) {
            return Ok(());
        }
        if raw.trim().is_empty() {
            continue;
        }

        let choice = match select(navigator.session(), &raw) {
            Ok(choice) => choice,
            Err(e) => {
                prompt.say(&e.to_string());
                continue;
            }
        };

        match navigator.dispatch(choice, prompt).await {
            Ok(notice) => prompt.say(&notice.to_string()),
            Err(FormError::Cancelled) => prompt.say("Cancelled."),
            Err(FormError::Closed) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
