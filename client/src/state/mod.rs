//! Screen-local reactive state.

pub mod request;
