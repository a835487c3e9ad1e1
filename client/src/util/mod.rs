//! Utility helpers shared across pages.

pub mod files;
pub mod forms;
