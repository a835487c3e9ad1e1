//! Client-side form validation.
//!
//! DESIGN
//! ======
//! Forms hold raw text exactly as typed. `validate` either produces the typed
//! payload the backend expects or a field-scoped [`FieldErrors`] map; any
//! error blocks submission before a request is built. None of these checks are
//! authoritative, the backend re-validates everything.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::fmt;

use time::Date;
use time::macros::format_description;

use crate::types::{CreditHistory, DEFAULT_USER_TYPE, LoanType, SavingsCapacity, SimulationRequest, User};

// =============================================================================
// MESSAGES
// =============================================================================

pub const FULL_NAME_REQUIRED: &str = "El nombre completo es requerido";
pub const LOAN_TYPE_REQUIRED: &str = "El tipo de préstamo es requerido";
pub const AMOUNT_REQUIRED: &str = "El monto es requerido";
pub const DESIRED_AMOUNT_REQUIRED: &str = "El monto deseado es requerido";
pub const NOT_POSITIVE: &str = "Debe ser un número positivo";
pub const TERM_REQUIRED: &str = "El plazo es requerido";
pub const TERM_OUT_OF_RANGE: &str = "Debe ser un número entre 1 y 30";
pub const RATE_REQUIRED: &str = "La tasa de interés es requerida";
pub const NEGATIVE_NUMBER: &str = "Debe ser un número mayor o igual a 0";
pub const NOT_WHOLE_NUMBER: &str = "Debe ser un número entero mayor o igual a 0";
pub const INCOME_REQUIRED: &str = "Los ingresos mensuales son requeridos";
pub const EMAIL_REQUIRED: &str = "El correo electrónico es requerido";
pub const EMAIL_INVALID: &str = "El correo electrónico no es válido";
pub const PHONE_INVALID: &str = "El número de teléfono no es válido";
pub const BIRTH_DATE_INVALID: &str = "La fecha de nacimiento no es válida";
pub const UNDERAGE: &str = "Debe ser mayor de 18 años";
pub const INCOME_PROOF_REQUIRED: &str = "El comprobante de ingresos es requerido";
pub const APPRAISAL_PROOF_REQUIRED: &str = "El comprobante de avalúo es requerido";
pub const FILE_TYPE_INVALID: &str = "Formato de archivo inválido";
pub const FILE_TOO_LARGE: &str = "El archivo es muy grande";

// =============================================================================
// LIMITS
// =============================================================================

pub const MIN_TERM_YEARS: u32 = 1;
pub const MAX_TERM_YEARS: u32 = 30;
pub const ADULT_AGE: i32 = 18;
/// 5 MB.
pub const MAX_DOCUMENT_BYTES: u64 = 5_242_880;
pub const ALLOWED_DOCUMENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];
/// Value for the `accept` attribute of document inputs.
pub const DOCUMENT_ACCEPT: &str = ".jpg,.jpeg,.png,.pdf";

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Form fields that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    BirthDate,
    Email,
    Phone,
    MonthlyIncome,
    CurrentDebts,
    YearsEmployed,
    SavingsBalance,
    Dependents,
    LoanType,
    Amount,
    Term,
    Rate,
    PropertyValue,
    Insurance,
    Commissions,
    IncomeProof,
    AppraisalProof,
}

impl Field {
    /// Form key used by the backend contract.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Self::FullName => "nombreCompleto",
            Self::BirthDate => "fechaNacimiento",
            Self::Email => "correoElectronico",
            Self::Phone => "numeroTelefono",
            Self::MonthlyIncome => "ingresosMensuales",
            Self::CurrentDebts => "deudasActuales",
            Self::YearsEmployed => "antiguedadLaboral",
            Self::SavingsBalance => "saldoCuentaAhorros",
            Self::Dependents => "numeroDependientes",
            Self::LoanType => "tipoPrestamo",
            Self::Amount => "monto",
            Self::Term => "plazo",
            Self::Rate => "tasaInteres",
            Self::PropertyValue => "valorPropiedad",
            Self::Insurance => "seguros",
            Self::Commissions => "comisiones",
            Self::IncomeProof => "comprobanteIngresos",
            Self::AppraisalProof => "comprobanteAvaluo",
        }
    }
}

/// Field-scoped validation messages; empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; a later message for the same field replaces it.
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Collect the outcome of one field check, keeping the value on success.
    fn check<T>(&mut self, field: Field, outcome: Result<T, &'static str>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.form_name())?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// =============================================================================
// PRIMITIVE PARSERS
// =============================================================================

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Required strictly-positive number (amounts, rates).
///
/// # Errors
///
/// `required` when blank, [`NOT_POSITIVE`] when not a number or not above zero.
pub fn parse_positive(raw: &str, required: &'static str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(required);
    }
    parse_finite(raw).filter(|value| *value > 0.0).ok_or(NOT_POSITIVE)
}

/// Required whole number of years within 1..=30.
///
/// # Errors
///
/// [`TERM_REQUIRED`] when blank, [`TERM_OUT_OF_RANGE`] otherwise.
pub fn parse_term(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TERM_REQUIRED);
    }
    raw.parse::<u32>()
        .ok()
        .filter(|years| (MIN_TERM_YEARS..=MAX_TERM_YEARS).contains(years))
        .ok_or(TERM_OUT_OF_RANGE)
}

/// Optional non-negative number; blank yields `None`.
///
/// # Errors
///
/// [`NEGATIVE_NUMBER`] when present but not a number `>= 0`.
pub fn parse_optional_non_negative(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_finite(raw).filter(|value| *value >= 0.0).map(Some).ok_or(NEGATIVE_NUMBER)
}

/// Optional strictly-positive number; blank yields `None`.
///
/// # Errors
///
/// [`NOT_POSITIVE`] when present but not above zero.
pub fn parse_optional_positive(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_finite(raw).filter(|value| *value > 0.0).map(Some).ok_or(NOT_POSITIVE)
}

/// Optional simulation cost; blank is sent as zero.
///
/// # Errors
///
/// [`NEGATIVE_NUMBER`] when present but not a number `>= 0`.
pub fn parse_optional_cost(raw: &str) -> Result<f64, &'static str> {
    parse_optional_non_negative(raw).map(|value| value.unwrap_or(0.0))
}

/// Optional non-negative whole number; blank yields `None`.
///
/// # Errors
///
/// [`NOT_WHOLE_NUMBER`] when present but not a whole number `>= 0`.
pub fn parse_optional_count(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>().map(Some).map_err(|_| NOT_WHOLE_NUMBER)
}

/// Loose `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Optional leading `+` and 8..=15 digits; spaces and dashes are ignored.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|ch| *ch != ' ' && *ch != '-').collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (8..=15).contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// [`BIRTH_DATE_INVALID`] when the text is not a calendar date.
pub fn parse_iso_date(raw: &str) -> Result<Date, &'static str> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| BIRTH_DATE_INVALID)
}

/// Completed years between `birth` and `today`. Negative for future dates.
#[must_use]
pub fn age_on(birth: Date, today: Date) -> i32 {
    let mut years = today.year() - birth.year();
    let before_birthday = (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day());
    if before_birthday {
        years -= 1;
    }
    years
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// What the client knows about a picked file before uploading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// MIME type reported by the browser or derived from the extension.
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    /// Build metadata, deriving the MIME type from the extension when the
    /// reported one is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = mime_for_name(&name).unwrap_or_default().to_owned();
        }
        Self { name, mime, size }
    }
}

/// MIME type for an accepted document extension.
#[must_use]
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Check a required upload against the type and size limits.
///
/// # Errors
///
/// `required` when no file was picked, [`FILE_TOO_LARGE`] when over 5 MB,
/// [`FILE_TYPE_INVALID`] for any other type. Size wins when both fail.
pub fn validate_document(file: Option<&FileMeta>, required: &'static str) -> Result<(), &'static str> {
    let Some(file) = file else {
        return Err(required);
    };
    if file.size > MAX_DOCUMENT_BYTES {
        return Err(FILE_TOO_LARGE);
    }
    if !ALLOWED_DOCUMENT_TYPES.contains(&file.mime.as_str()) {
        return Err(FILE_TYPE_INVALID);
    }
    Ok(())
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub birth_date: String,
    pub id_type: String,
    pub id_number: String,
    pub marital_status: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub monthly_income: String,
    pub current_debts: String,
    pub credit_history: CreditHistory,
    pub employment_type: String,
    pub years_employed: String,
    pub savings_balance: String,
    pub savings_history: String,
    pub dependents: String,
    pub user_type: String,
    pub savings_capacity: SavingsCapacity,
}

impl RegistrationForm {
    /// Validate and build the registration payload.
    ///
    /// `today` anchors the adult-age check.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self, today: Date) -> Result<User, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = optional_text(&self.full_name);
        if full_name.is_none() {
            errors.insert(Field::FullName, FULL_NAME_REQUIRED);
        }

        let email = optional_text(&self.email);
        match email.as_deref() {
            None => errors.insert(Field::Email, EMAIL_REQUIRED),
            Some(value) if !is_valid_email(value) => errors.insert(Field::Email, EMAIL_INVALID),
            Some(_) => {}
        }

        let birth_date = optional_text(&self.birth_date);
        if let Some(raw) = birth_date.as_deref() {
            match parse_iso_date(raw) {
                Ok(birth) if age_on(birth, today) < ADULT_AGE => errors.insert(Field::BirthDate, UNDERAGE),
                Ok(_) => {}
                Err(message) => errors.insert(Field::BirthDate, message),
            }
        }

        let phone = optional_text(&self.phone);
        if phone.as_deref().is_some_and(|value| !is_valid_phone(value)) {
            errors.insert(Field::Phone, PHONE_INVALID);
        }

        let monthly_income = errors.check(Field::MonthlyIncome, parse_positive(&self.monthly_income, INCOME_REQUIRED));
        let current_debts = errors.check(Field::CurrentDebts, parse_optional_non_negative(&self.current_debts));
        let years_employed = errors.check(Field::YearsEmployed, parse_optional_count(&self.years_employed));
        let savings_balance = errors.check(Field::SavingsBalance, parse_optional_non_negative(&self.savings_balance));
        let dependents = errors.check(Field::Dependents, parse_optional_count(&self.dependents));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(User {
            id: None,
            full_name: full_name.unwrap_or_default(),
            birth_date,
            id_type: optional_text(&self.id_type),
            id_number: optional_text(&self.id_number),
            marital_status: optional_text(&self.marital_status),
            address: optional_text(&self.address),
            phone,
            email,
            monthly_income,
            current_debts: current_debts.flatten(),
            credit_history: Some(self.credit_history),
            employment_type: optional_text(&self.employment_type),
            years_employed: years_employed.flatten(),
            savings_balance: savings_balance.flatten(),
            savings_history: optional_text(&self.savings_history),
            dependents: dependents.flatten(),
            user_type: Some(optional_text(&self.user_type).unwrap_or_else(|| DEFAULT_USER_TYPE.to_owned())),
            savings_capacity: Some(self.savings_capacity),
        })
    }
}

// =============================================================================
// LOAN APPLICATION
// =============================================================================

/// Raw loan application form input, including picked document metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanApplicationForm {
    pub full_name: String,
    pub loan_type: Option<LoanType>,
    pub amount: String,
    pub term: String,
    pub rate: String,
    pub property_value: String,
    pub income_proof: Option<FileMeta>,
    pub appraisal_proof: Option<FileMeta>,
}

/// Validated text parts of a loan application; the documents travel alongside.
#[derive(Clone, Debug, PartialEq)]
pub struct LoanApplicationDraft {
    pub full_name: String,
    pub loan_type: LoanType,
    pub amount: f64,
    pub term_years: u32,
    pub interest_rate: f64,
    pub property_value: Option<f64>,
}

impl LoanApplicationDraft {
    /// Multipart text parts in submission order.
    #[must_use]
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = vec![
            ("nombreCompleto", self.full_name.clone()),
            ("tipoPrestamo", self.loan_type.as_wire().to_owned()),
            ("montoSolicitado", self.amount.to_string()),
            ("plazoSolicitado", self.term_years.to_string()),
            ("tasaInteres", self.interest_rate.to_string()),
        ];
        if let Some(value) = self.property_value {
            parts.push(("valorPropiedad", value.to_string()));
        }
        parts
    }
}

impl LoanApplicationForm {
    /// Validate the text fields and both documents.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<LoanApplicationDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = optional_text(&self.full_name);
        if full_name.is_none() {
            errors.insert(Field::FullName, FULL_NAME_REQUIRED);
        }
        let loan_type = errors.check(Field::LoanType, self.loan_type.ok_or(LOAN_TYPE_REQUIRED));
        let amount = errors.check(Field::Amount, parse_positive(&self.amount, AMOUNT_REQUIRED));
        let term_years = errors.check(Field::Term, parse_term(&self.term));
        let interest_rate = errors.check(Field::Rate, parse_positive(&self.rate, RATE_REQUIRED));
        let property_value = errors.check(Field::PropertyValue, parse_optional_positive(&self.property_value));
        errors.check(
            Field::IncomeProof,
            validate_document(self.income_proof.as_ref(), INCOME_PROOF_REQUIRED),
        );
        errors.check(
            Field::AppraisalProof,
            validate_document(self.appraisal_proof.as_ref(), APPRAISAL_PROOF_REQUIRED),
        );

        match (full_name, loan_type, amount, term_years, interest_rate, property_value) {
            (Some(full_name), Some(loan_type), Some(amount), Some(term_years), Some(interest_rate), Some(property_value))
                if errors.is_empty() =>
            {
                Ok(LoanApplicationDraft { full_name, loan_type, amount, term_years, interest_rate, property_value })
            }
            _ => Err(errors),
        }
    }
}

// =============================================================================
// SIMULATION
// =============================================================================

/// Raw simulation form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationForm {
    pub amount: String,
    pub term: String,
    pub rate: String,
    pub loan_type: Option<LoanType>,
    pub insurance: String,
    pub commissions: String,
}

impl SimulationForm {
    /// Validate and build the simulation request; blank costs become zero.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<SimulationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = errors.check(Field::Amount, parse_positive(&self.amount, DESIRED_AMOUNT_REQUIRED));
        let term_years = errors.check(Field::Term, parse_term(&self.term));
        let interest_rate = errors.check(Field::Rate, parse_positive(&self.rate, RATE_REQUIRED));
        let loan_type = errors.check(Field::LoanType, self.loan_type.ok_or(LOAN_TYPE_REQUIRED));
        let insurance = errors.check(Field::Insurance, parse_optional_cost(&self.insurance));
        let commissions = errors.check(Field::Commissions, parse_optional_cost(&self.commissions));

        match (amount, term_years, interest_rate, loan_type, insurance, commissions) {
            (Some(amount), Some(term_years), Some(interest_rate), Some(loan_type), Some(insurance), Some(commissions)) => {
                Ok(SimulationRequest { amount, term_years, interest_rate, loan_type, insurance, commissions })
            }
            _ => Err(errors),
        }
    }
}
