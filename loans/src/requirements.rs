//! Static loan-type requirement table.
//!
//! These figures are hints rendered next to the application and simulation
//! forms. They are never enforced; the backend applies its own policy.

#[cfg(test)]
#[path = "requirements_test.rs"]
mod requirements_test;

use crate::types::LoanType;

/// Inclusive numeric range used for hints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Requirement metadata for one loan type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanRequirements {
    pub loan_type: LoanType,
    /// Term in years.
    pub term_years: Range<u32>,
    /// Annual interest rate, percent.
    pub rate_percent: Range<f64>,
    /// Maximum share of the property value that can be financed, percent.
    pub max_financing_percent: u8,
    /// Documents the applicant is expected to bring.
    pub documents: &'static [&'static str],
}

const FIRST_HOME: LoanRequirements = LoanRequirements {
    loan_type: LoanType::FirstHome,
    term_years: Range { min: 30, max: 30 },
    rate_percent: Range { min: 3.5, max: 5.0 },
    max_financing_percent: 80,
    documents: &["Comprobante de ingresos", "Certificado de avalúo", "Historial crediticio"],
};

const SECOND_HOME: LoanRequirements = LoanRequirements {
    loan_type: LoanType::SecondHome,
    term_years: Range { min: 20, max: 20 },
    rate_percent: Range { min: 4.0, max: 6.0 },
    max_financing_percent: 70,
    documents: &[
        "Comprobante de ingresos",
        "Certificado de avalúo",
        "Escritura de la primera vivienda",
        "Historial crediticio",
    ],
};

const COMMERCIAL_PROPERTY: LoanRequirements = LoanRequirements {
    loan_type: LoanType::CommercialProperty,
    term_years: Range { min: 25, max: 25 },
    rate_percent: Range { min: 5.0, max: 7.0 },
    max_financing_percent: 60,
    documents: &[
        "Estado financiero del negocio",
        "Comprobante de ingresos",
        "Certificado de avalúo",
        "Plan de negocios",
    ],
};

const REMODELING: LoanRequirements = LoanRequirements {
    loan_type: LoanType::Remodeling,
    term_years: Range { min: 15, max: 15 },
    rate_percent: Range { min: 4.5, max: 6.0 },
    max_financing_percent: 50,
    documents: &[
        "Comprobante de ingresos",
        "Presupuesto de la remodelación",
        "Certificado de avalúo actualizado",
    ],
};

/// Look up the hint metadata for a loan type.
#[must_use]
pub fn requirements_for(loan_type: LoanType) -> &'static LoanRequirements {
    match loan_type {
        LoanType::FirstHome => &FIRST_HOME,
        LoanType::SecondHome => &SECOND_HOME,
        LoanType::CommercialProperty => &COMMERCIAL_PROPERTY,
        LoanType::Remodeling => &REMODELING,
    }
}

impl LoanRequirements {
    /// Term hint, e.g. `"30 años"` or `"15 - 20 años"`.
    #[must_use]
    pub fn term_hint(&self) -> String {
        if self.term_years.min == self.term_years.max {
            format!("{} años", self.term_years.max)
        } else {
            format!("{} - {} años", self.term_years.min, self.term_years.max)
        }
    }

    /// Rate hint, e.g. `"3.5% - 5%"`.
    #[must_use]
    pub fn rate_hint(&self) -> String {
        format!("{}% - {}%", self.rate_percent.min, self.rate_percent.max)
    }

    /// Financing hint, e.g. `"80% del valor de la propiedad"`.
    #[must_use]
    pub fn financing_hint(&self) -> String {
        format!("{}% del valor de la propiedad", self.max_financing_percent)
    }

    /// Non-blocking notes for values outside this loan type's usual ranges.
    #[must_use]
    pub fn advisories(&self, term_years: Option<u32>, rate_percent: Option<f64>) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(term) = term_years.filter(|t| !self.term_years.contains(*t)) {
            notes.push(format!(
                "El plazo de {term} años difiere del habitual para {} ({})",
                self.loan_type.display_name(),
                self.term_hint()
            ));
        }
        if let Some(rate) = rate_percent.filter(|r| !self.rate_percent.contains(*r)) {
            notes.push(format!(
                "La tasa de {rate}% está fuera del rango para {} ({})",
                self.loan_type.display_name(),
                self.rate_hint()
            ));
        }
        notes
    }
}
