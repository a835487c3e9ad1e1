//! Wire records exchanged with the PrestaBanco backend.
//!
//! DESIGN
//! ======
//! Field names on the wire follow the backend's Spanish camelCase contract;
//! Rust names are English and mapped with `#[serde(rename)]`. Every record is
//! decoded with struct-level defaults so older and newer backend revisions,
//! which add or drop columns freely, still parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use time::macros::format_description;

/// Error returned when a loan type or category string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================================
// ENUMS
// =============================================================================

/// Loan category. Drives the requirement hints only; the backend decides
/// everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "PRIMERA_VIVIENDA", alias = "PRIMERA VIVIENDA")]
    FirstHome,
    #[serde(rename = "SEGUNDA_VIVIENDA", alias = "SEGUNDA VIVIENDA")]
    SecondHome,
    #[serde(rename = "PROPIEDADES_COMERCIALES", alias = "PROPIEDADES COMERCIALES")]
    CommercialProperty,
    #[serde(rename = "REMODELACION", alias = "REMODELACIÓN")]
    Remodeling,
}

impl LoanType {
    pub const ALL: [Self; 4] = [Self::FirstHome, Self::SecondHome, Self::CommercialProperty, Self::Remodeling];

    /// Backend enum name, as sent in form fields and JSON bodies.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::FirstHome => "PRIMERA_VIVIENDA",
            Self::SecondHome => "SEGUNDA_VIVIENDA",
            Self::CommercialProperty => "PROPIEDADES_COMERCIALES",
            Self::Remodeling => "REMODELACION",
        }
    }

    /// Human label shown in selects and tables.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FirstHome => "Primera Vivienda",
            Self::SecondHome => "Segunda Vivienda",
            Self::CommercialProperty => "Propiedades Comerciales",
            Self::Remodeling => "Remodelación",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LoanType {
    type Err = UnknownVariant;

    /// Accepts the wire name, the legacy spaced spelling, or a kebab-case
    /// English name (`first-home`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_uppercase().replace(['-', ' '], "_").replace('Ó', "O");
        match normalized.as_str() {
            "PRIMERA_VIVIENDA" | "FIRST_HOME" => Ok(Self::FirstHome),
            "SEGUNDA_VIVIENDA" | "SECOND_HOME" => Ok(Self::SecondHome),
            "PROPIEDADES_COMERCIALES" | "COMMERCIAL_PROPERTY" | "COMMERCIAL" => Ok(Self::CommercialProperty),
            "REMODELACION" | "REMODELING" => Ok(Self::Remodeling),
            _ => Err(UnknownVariant { kind: "loan type", value: raw.to_owned() }),
        }
    }
}

/// Credit-history category captured at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditHistory {
    #[default]
    #[serde(rename = "BUENO", alias = "bueno")]
    Good,
    #[serde(rename = "REGULAR", alias = "regular")]
    Regular,
    #[serde(rename = "MALO", alias = "malo")]
    Bad,
}

impl CreditHistory {
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Good => "BUENO",
            Self::Regular => "REGULAR",
            Self::Bad => "MALO",
        }
    }
}

impl FromStr for CreditHistory {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_uppercase().as_str() {
            "BUENO" | "GOOD" => Ok(Self::Good),
            "REGULAR" => Ok(Self::Regular),
            "MALO" | "BAD" => Ok(Self::Bad),
            _ => Err(UnknownVariant { kind: "credit history", value: raw.to_owned() }),
        }
    }
}

/// Self-declared savings capacity captured at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsCapacity {
    #[default]
    #[serde(rename = "ADECUADA", alias = "adecuada")]
    Adequate,
    #[serde(rename = "INSUFICIENTE", alias = "insuficiente")]
    Insufficient,
}

impl SavingsCapacity {
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Adequate => "ADECUADA",
            Self::Insufficient => "INSUFICIENTE",
        }
    }
}

impl FromStr for SavingsCapacity {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_uppercase().as_str() {
            "ADECUADA" | "ADEQUATE" => Ok(Self::Adequate),
            "INSUFICIENTE" | "INSUFFICIENT" => Ok(Self::Insufficient),
            _ => Err(UnknownVariant { kind: "savings capacity", value: raw.to_owned() }),
        }
    }
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

/// `null` decodes as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Category strings go through `FromStr`; unrecognised ones decode as `None`
/// instead of failing the whole record.
fn lenient_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.parse().ok()))
}

// =============================================================================
// RECORDS
// =============================================================================

/// Default `tipoUsuario` for self-registered applicants.
pub const DEFAULT_USER_TYPE: &str = "CLIENTE";

/// A registered applicant (`Usuario`).
///
/// Serialized with every key present (absent values become `null`) so a
/// registration always posts the same field set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Server-assigned identifier; omitted when registering.
    #[serde(rename = "idUsuario", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombreCompleto", deserialize_with = "null_as_default")]
    pub full_name: String,
    /// ISO `YYYY-MM-DD`.
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<String>,
    #[serde(rename = "tipoIdentificacion")]
    pub id_type: Option<String>,
    #[serde(rename = "numeroIdentificacion")]
    pub id_number: Option<String>,
    #[serde(rename = "estadoCivil")]
    pub marital_status: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "numeroTelefono")]
    pub phone: Option<String>,
    #[serde(rename = "correoElectronico")]
    pub email: Option<String>,
    #[serde(rename = "ingresosMensuales")]
    pub monthly_income: Option<f64>,
    #[serde(rename = "deudasActuales")]
    pub current_debts: Option<f64>,
    #[serde(rename = "historialCrediticio", deserialize_with = "lenient_variant")]
    pub credit_history: Option<CreditHistory>,
    #[serde(rename = "tipoEmpleo")]
    pub employment_type: Option<String>,
    /// Whole years in the current job.
    #[serde(rename = "antiguedadLaboral")]
    pub years_employed: Option<u32>,
    #[serde(rename = "saldoCuentaAhorros")]
    pub savings_balance: Option<f64>,
    #[serde(rename = "historialAhorro")]
    pub savings_history: Option<String>,
    #[serde(rename = "numeroDependientes")]
    pub dependents: Option<u32>,
    #[serde(rename = "tipoUsuario")]
    pub user_type: Option<String>,
    #[serde(rename = "capacidadAhorro", deserialize_with = "lenient_variant")]
    pub savings_capacity: Option<SavingsCapacity>,
}

/// A loan application (`Solicitud`) as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplication {
    #[serde(rename = "idSolicitud")]
    pub id: Option<i64>,
    /// Owning user, when the backend embeds it.
    #[serde(rename = "usuario")]
    pub owner: Option<User>,
    /// Transient owner name some backend revisions echo instead of `usuario`.
    #[serde(rename = "nombreCompleto")]
    pub owner_name: Option<String>,
    /// Loan type exactly as the backend stored it; see `loan_type_label`.
    #[serde(rename = "tipoPrestamo")]
    pub loan_type: Option<String>,
    #[serde(rename = "fechaSolicitud")]
    pub submitted_at: Option<String>,
    #[serde(rename = "montoSolicitado")]
    pub requested_amount: Option<f64>,
    #[serde(rename = "plazoSolicitado")]
    pub term_years: Option<u32>,
    #[serde(rename = "tasaInteres")]
    pub interest_rate: Option<f64>,
    #[serde(rename = "valorPropiedad")]
    pub property_value: Option<f64>,
    /// Opaque backend status code (`E1`..`E9`, `APROBADA`, ...).
    #[serde(rename = "estadoSolicitud")]
    pub status: Option<String>,
    /// Comma-separated stored paths of the uploaded documents.
    #[serde(rename = "documentosAdjuntos")]
    pub attached_documents: Option<String>,
    #[serde(rename = "fechaAprobacionRechazo")]
    pub decided_at: Option<String>,
    #[serde(rename = "comentariosSeguimiento")]
    pub comments: Option<String>,
    #[serde(rename = "cuotaMensual")]
    pub monthly_payment: Option<f64>,
    #[serde(rename = "totalPagado")]
    pub total_paid: Option<f64>,
    #[serde(rename = "totalIntereses")]
    pub total_interest: Option<f64>,
}

impl LoanApplication {
    /// Owner name from the embedded user, falling back to the transient field.
    #[must_use]
    pub fn owner_full_name(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .map(|user| user.full_name.as_str())
            .filter(|name| !name.is_empty())
            .or(self.owner_name.as_deref())
    }

    /// Owner identification number, if the backend embedded the user.
    #[must_use]
    pub fn owner_id_number(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|user| user.id_number.as_deref())
    }

    /// Display name of the loan type. Spellings `LoanType` does not know are
    /// shown as stored.
    #[must_use]
    pub fn loan_type_label(&self) -> Option<String> {
        let raw = self.loan_type.as_deref().map(str::trim).filter(|raw| !raw.is_empty())?;
        Some(match raw.parse::<LoanType>() {
            Ok(loan_type) => loan_type.display_name().to_owned(),
            Err(_) => raw.to_owned(),
        })
    }

    /// Stored document references, in backend order.
    #[must_use]
    pub fn documents(&self) -> Vec<&str> {
        self.attached_documents
            .as_deref()
            .map(|raw| raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /solicitudes/simular`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(rename = "montoDeseado")]
    pub amount: f64,
    #[serde(rename = "plazo")]
    pub term_years: u32,
    #[serde(rename = "tasaInteres")]
    pub interest_rate: f64,
    #[serde(rename = "tipoPrestamo")]
    pub loan_type: LoanType,
    /// Insurance costs; zero when the user left the field blank.
    #[serde(rename = "seguros")]
    pub insurance: f64,
    /// Commission costs; zero when the user left the field blank.
    #[serde(rename = "comisiones")]
    pub commissions: f64,
}

/// Figures computed by the backend for a simulation. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationResult {
    #[serde(rename = "cuotaMensual")]
    pub monthly_payment: Option<f64>,
    #[serde(rename = "totalPagado")]
    pub total_paid: Option<f64>,
    #[serde(rename = "totalIntereses")]
    pub total_interest: Option<f64>,
    #[serde(rename = "costosAdicionales")]
    pub additional_costs: Option<f64>,
    #[serde(rename = "totalFinal")]
    pub final_total: Option<f64>,
}

// =============================================================================
// DISPLAY HELPERS
// =============================================================================

/// Render a backend timestamp (`2024-10-05T12:30:00`) or date as `DD/MM/YYYY`.
///
/// Returns `None` when the leading `YYYY-MM-DD` part does not parse.
#[must_use]
pub fn format_day(raw: &str) -> Option<String> {
    let day = Date::parse(raw.get(..10)?, format_description!("[year]-[month]-[day]")).ok()?;
    day.format(format_description!("[day]/[month]/[year]")).ok()
}

/// Render an amount with thousands separators and two decimals (`$1,234.50`).
#[must_use]
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{cents}")
}
