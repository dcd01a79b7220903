//! Forms — collecting typed view input from a line prompt.
//!
//! DESIGN
//! ======
//! [`Prompt`] abstracts the terminal so collection can be driven by a
//! script in tests. Numeric and enumerated fields re-ask on invalid input
//! and accept a blank answer as "not provided"; the predict view decides
//! what a missing field means.

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;

use crate::clinical::{
    AGE, CHOLESTEROL, ChestPainType, ClinicalCode, ClinicalDraft, ExerciseAngina, FastingBloodSugar, MAX_HEART_RATE,
    NumericField, RESTING_BP, RestingEcg, ST_DEPRESSION, Sex, StSlope,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields: {0} is blank.")]
    Blank(&'static str),
    #[error("input closed")]
    Closed,
    #[error("input cancelled")]
    Cancelled,
    #[error("terminal error: {0}")]
    Io(String),
}

/// Line-oriented input source.
pub trait Prompt {
    /// Read one answer for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Closed`] at end of input, [`FormError::Cancelled`]
    /// on interrupt, [`FormError::Io`] on terminal failure.
    fn ask(&mut self, label: &str) -> Result<String, FormError>;

    /// Like [`Prompt::ask`] for values that must not be echoed or remembered.
    ///
    /// # Errors
    ///
    /// Same as [`Prompt::ask`].
    fn ask_secret(&mut self, label: &str) -> Result<String, FormError> {
        self.ask(label)
    }

    /// Show a line of guidance (option lists, validation hints).
    fn say(&mut self, text: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns [`FormError::Blank`] naming the first blank field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("username", &self.username)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`FormError::Blank`] naming the first blank field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("username", &self.username)?;
        require("password", &self.password)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() { Err(FormError::Blank(field)) } else { Ok(()) }
}

/// # Errors
///
/// Propagates prompt failures.
pub fn collect_register(prompt: &mut dyn Prompt) -> Result<RegisterForm, FormError> {
    Ok(RegisterForm {
        username: prompt.ask("Username")?.trim().to_owned(),
        email: prompt.ask("Email")?.trim().to_owned(),
        password: prompt.ask_secret("Password")?,
    })
}

/// # Errors
///
/// Propagates prompt failures.
pub fn collect_login(prompt: &mut dyn Prompt) -> Result<LoginForm, FormError> {
    Ok(LoginForm { username: prompt.ask("Username")?.trim().to_owned(), password: prompt.ask_secret("Password")? })
}

/// Ask for every clinical field in display order.
///
/// # Errors
///
/// Propagates prompt failures.
pub fn collect_clinical(prompt: &mut dyn Prompt) -> Result<ClinicalDraft, FormError> {
    Ok(ClinicalDraft {
        age: ask_integer(prompt, &AGE)?,
        sex: ask_code::<Sex>(prompt)?,
        chest_pain_type: ask_code::<ChestPainType>(prompt)?,
        resting_bp: ask_integer(prompt, &RESTING_BP)?,
        cholesterol: ask_integer(prompt, &CHOLESTEROL)?,
        fasting_blood_sugar: ask_code::<FastingBloodSugar>(prompt)?,
        resting_ecg: ask_code::<RestingEcg>(prompt)?,
        max_heart_rate: ask_integer(prompt, &MAX_HEART_RATE)?,
        exercise_angina: ask_code::<ExerciseAngina>(prompt)?,
        st_depression: ask_decimal(prompt, &ST_DEPRESSION)?,
        st_slope: ask_code::<StSlope>(prompt)?,
    })
}

fn ask_integer(prompt: &mut dyn Prompt, field: &NumericField) -> Result<Option<u16>, FormError> {
    let hint = format!("{} must be a whole number between {} and {}.", field.prompt, field.min, field.max);
    ask_until(prompt, &range_label(field), &hint, |answer| {
        answer.parse::<u16>().ok().filter(|value| field.contains(f64::from(*value)))
    })
}

fn ask_decimal(prompt: &mut dyn Prompt, field: &NumericField) -> Result<Option<f64>, FormError> {
    let hint = format!("{} must be a number between {} and {}.", field.prompt, field.min, field.max);
    ask_until(prompt, &range_label(field), &hint, |answer| {
        answer.parse::<f64>().ok().filter(|value| field.contains(*value))
    })
}

fn range_label(field: &NumericField) -> String {
    format!("{} ({}-{})", field.prompt, field.min, field.max)
}

/// Ask until `parse` accepts the answer or the answer is blank.
fn ask_until<T>(
    prompt: &mut dyn Prompt,
    label: &str,
    hint: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, FormError> {
    loop {
        let answer = prompt.ask(label)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        if let Some(value) = parse(answer) {
            return Ok(Some(value));
        }
        prompt.say(hint);
    }
}

fn ask_code<T: ClinicalCode>(prompt: &mut dyn Prompt) -> Result<Option<T>, FormError> {
    for variant in T::ALL {
        prompt.say(&format!("  {}) {}", variant.code(), variant.label()));
    }
    let last = T::ALL.last().map_or(0, |v| v.code());
    let label = format!("{} [0-{last}]", T::PROMPT);
    let hint = format!("Choose a code between 0 and {last}, or type the option name.");
    ask_until(prompt, &label, &hint, parse_choice::<T>)
}

fn parse_choice<T: ClinicalCode>(answer: &str) -> Option<T> {
    if let Ok(code) = answer.parse::<u8>() {
        return T::from_code(code);
    }
    T::ALL.iter().copied().find(|variant| variant.label().eq_ignore_ascii_case(answer))
}
