//! Reusable UI components.
//!
//! Components are presentational; pages own request state and pass data and
//! callbacks down.

pub mod back_button;
pub mod choice_modal;
pub mod delete_dialog;
pub mod form_field;
pub mod navbar;
pub mod notice;
pub mod requirements_panel;
