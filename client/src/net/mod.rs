//! Networking modules.
//!
//! `api` wraps every backend REST call; request shapes and endpoint paths live
//! in the shared `loans` crate.

pub mod api;
