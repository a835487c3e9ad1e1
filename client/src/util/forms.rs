//! Small helpers shared by the form pages.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use loans::types::LoanType;
use loans::validation::{Field, FieldErrors};

/// Current UTC date, used for the minimum-age check.
pub fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}

/// Loan type from a `<select>` value; the empty placeholder maps to `None`.
pub fn loan_type_from_select(value: &str) -> Option<LoanType> {
    value.parse().ok()
}

/// `<select>` value for an optional loan type.
pub fn loan_type_to_select(loan_type: Option<LoanType>) -> &'static str {
    loan_type.map_or("", LoanType::as_wire)
}

/// Message for one field, empty when the field passed.
pub fn field_error(errors: &FieldErrors, field: Field) -> &'static str {
    errors.get(field).unwrap_or_default()
}
