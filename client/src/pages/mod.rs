//! Route-level screens.
//!
//! Each page owns its form and request state and delegates rendering of
//! shared widgets to `components`.

pub mod faq;
pub mod home;
pub mod loan_application;
pub mod loan_evaluation;
pub mod loan_status;
pub mod registration;
pub mod simulation;
