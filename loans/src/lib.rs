//! Shared loan-origination model for the PrestaBanco clients.
//!
//! This crate owns everything the web front-end (`client`) and the command
//! line client (`prestabanco`) agree on: the wire records exchanged with the
//! backend, the REST endpoint catalogue, client-side form validation and the
//! static loan-type hint table. It performs no I/O; each client brings its own
//! HTTP transport.

pub mod api;
pub mod confirm;
pub mod errors;
pub mod requirements;
pub mod staff;
pub mod status;
pub mod types;
pub mod validation;

pub use api::Endpoint;
pub use errors::RequestError;
pub use types::{CreditHistory, LoanApplication, LoanType, SavingsCapacity, SimulationRequest, SimulationResult, User};
pub use validation::{Field, FieldErrors};
