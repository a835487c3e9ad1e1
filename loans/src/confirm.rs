//! Owner re-entry check before deleting an application.
//!
//! The applicant retypes their full name and identification number; both must
//! match the record fetched from the backend before the delete request is
//! issued. This guards against misclicks only. The backend decides whether a
//! delete is allowed.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::types::LoanApplication;

/// Why a delete confirmation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationError {
    #[error("Ingrese su nombre completo y número de identificación")]
    Incomplete,
    #[error("Los datos ingresados no coinciden con la solicitud")]
    Mismatch,
    #[error("La solicitud no tiene datos del titular para confirmar")]
    OwnerUnknown,
}

/// Values typed into the delete confirmation dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub full_name: String,
    pub id_number: String,
}

impl DeleteConfirmation {
    #[must_use]
    pub fn new(full_name: impl Into<String>, id_number: impl Into<String>) -> Self {
        Self { full_name: full_name.into(), id_number: id_number.into() }
    }

    /// Compare the typed values with the fetched record.
    ///
    /// Surrounding whitespace is ignored; the comparison is otherwise exact
    /// and case-sensitive, like the backend's owner lookup.
    ///
    /// # Errors
    ///
    /// [`ConfirmationError::Incomplete`] when either value is blank,
    /// [`ConfirmationError::OwnerUnknown`] when the record carries no owner
    /// name or ID number, [`ConfirmationError::Mismatch`] otherwise.
    pub fn verify(&self, application: &LoanApplication) -> Result<(), ConfirmationError> {
        let full_name = self.full_name.trim();
        let id_number = self.id_number.trim();
        if full_name.is_empty() || id_number.is_empty() {
            return Err(ConfirmationError::Incomplete);
        }
        let (Some(owner_name), Some(owner_id)) = (application.owner_full_name(), application.owner_id_number()) else {
            return Err(ConfirmationError::OwnerUnknown);
        };
        if owner_name.trim() == full_name && owner_id.trim() == id_number {
            Ok(())
        } else {
            Err(ConfirmationError::Mismatch)
        }
    }
}
