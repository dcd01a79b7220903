//! heartcheck — terminal client for a heart-disease risk prediction service.
//!
//! ARCHITECTURE
//! ============
//! [`navigator::Navigator`] owns the [`session::Session`] and routes menu
//! choices to [`views`]. Views issue at most one call through the
//! [`api::Backend`] seam and report a [`notice::Notice`]. [`app::run`]
//! drives the loop over a [`forms::Prompt`].

pub mod api;
pub mod app;
pub mod clinical;
pub mod config;
pub mod forms;
pub mod navigator;
pub mod notice;
pub mod session;
pub mod terminal;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;
