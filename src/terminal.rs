//! rustyline-backed [`Prompt`] for interactive use.
//!
//! Secrets go through a second editor whose highlighter paints every
//! character as `*` and which never records history.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;

use std::borrow::Cow;

use rustyline::config::{ColorMode, Configurer};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, DefaultEditor, Editor, Helper, Hinter, Validator};

use crate::forms::{FormError, Prompt};

#[derive(Completer, Helper, Hinter, Validator)]
pub struct MaskingHighlighter;

impl Highlighter for MaskingHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(mask(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn mask(line: &str) -> String {
    "*".repeat(line.chars().count())
}

type SecretEditor = Editor<MaskingHighlighter, DefaultHistory>;

fn secret_editor() -> Result<SecretEditor, ReadlineError> {
    let mut editor = SecretEditor::new()?;
    editor.set_helper(Some(MaskingHighlighter));
    editor.set_color_mode(ColorMode::Forced);
    editor.set_auto_add_history(false);
    Ok(editor)
}

fn map_readline(error: ReadlineError) -> FormError {
    match error {
        ReadlineError::Interrupted => FormError::Cancelled,
        ReadlineError::Eof => FormError::Closed,
        other => FormError::Io(other.to_string()),
    }
}

pub struct Terminal {
    editor: DefaultEditor,
    secret: SecretEditor,
}

impl Terminal {
    /// # Errors
    ///
    /// Returns [`FormError::Io`] if a line editor cannot attach to the terminal.
    pub fn new() -> Result<Self, FormError> {
        let editor = DefaultEditor::new().map_err(|e| FormError::Io(e.to_string()))?;
        let secret = secret_editor().map_err(|e| FormError::Io(e.to_string()))?;
        Ok(Self { editor, secret })
    }
}

impl Prompt for Terminal {
    fn ask(&mut self, label: &str) -> Result<String, FormError> {
        let line = self.editor.readline(&format!("{label}: ")).map_err(map_readline)?;
        if !line.trim().is_empty() {
            if let Err(e) = self.editor.add_history_entry(line.trim()) {
                tracing::debug!(error = %e, "history entry not recorded");
            }
        }
        Ok(line)
    }

    fn ask_secret(&mut self, label: &str) -> Result<String, FormError> {
        self.secret.readline(&format!("{label}: ")).map_err(map_readline)
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}
