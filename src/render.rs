//! Plain-text tables and JSON output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use loans::requirements::LoanRequirements;
use loans::status;
use loans::types::{LoanApplication, SimulationResult, User, format_day, format_money};
use serde::Serialize;

use crate::error::CliError;

const NOT_AVAILABLE: &str = "N/A";

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Left-aligned columns separated by two spaces.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = pad_row(headers.iter().copied(), &widths);
    for row in rows {
        out.push('\n');
        out.push_str(&pad_row(row.iter().map(String::as_str), &widths));
    }
    out
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell}{}", " ".repeat(width.saturating_sub(cell.chars().count()))))
        .collect();
    padded.join("  ").trim_end().to_owned()
}

/// `label: value` lines, labels padded to the same width.
pub fn details(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label}:{} {value}", " ".repeat(width - label.chars().count())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_na(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), format_money)
}

fn day(value: Option<&str>) -> String {
    or_na(value.and_then(format_day))
}

// =============================================================================
// USERS
// =============================================================================

pub fn user_table(users: &[User]) -> String {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|user| {
            vec![
                or_na(user.id.map(|id| id.to_string())),
                user.full_name.clone(),
                or_na(user.id_number.clone()),
                or_na(user.email.clone()),
                money(user.monthly_income),
            ]
        })
        .collect();
    table(&["ID", "Nombre Completo", "Identificación", "Correo", "Ingresos Mensuales"], &rows)
}

pub fn user_details(user: &User) -> String {
    details(&[
        ("ID", or_na(user.id.map(|id| id.to_string()))),
        ("Nombre Completo", user.full_name.clone()),
        ("Fecha de Nacimiento", day(user.birth_date.as_deref())),
        ("Identificación", or_na(join_id(user))),
        ("Estado Civil", or_na(user.marital_status.clone())),
        ("Dirección", or_na(user.address.clone())),
        ("Teléfono", or_na(user.phone.clone())),
        ("Correo Electrónico", or_na(user.email.clone())),
        ("Ingresos Mensuales", money(user.monthly_income)),
        ("Deudas Actuales", money(user.current_debts)),
        ("Historial Crediticio", or_na(user.credit_history.map(|h| h.as_wire().to_owned()))),
        ("Tipo de Empleo", or_na(user.employment_type.clone())),
        ("Antigüedad Laboral", or_na(user.years_employed.map(|y| format!("{y} años")))),
        ("Saldo Cuenta de Ahorros", money(user.savings_balance)),
        ("Número de Dependientes", or_na(user.dependents.map(|d| d.to_string()))),
        ("Capacidad de Ahorro", or_na(user.savings_capacity.map(|c| c.as_wire().to_owned()))),
        ("Tipo de Usuario", or_na(user.user_type.clone())),
    ])
}

fn join_id(user: &User) -> Option<String> {
    match (user.id_type.as_deref(), user.id_number.as_deref()) {
        (Some(kind), Some(number)) => Some(format!("{kind} {number}")),
        (None, Some(number)) => Some(number.to_owned()),
        _ => None,
    }
}

// =============================================================================
// LOAN APPLICATIONS
// =============================================================================

pub fn loan_table(loans: &[LoanApplication]) -> String {
    let rows: Vec<Vec<String>> = loans
        .iter()
        .map(|loan| {
            vec![
                or_na(loan.id.map(|id| id.to_string())),
                or_na(loan.owner_full_name().map(str::to_owned)),
                or_na(loan.loan_type_label()),
                day(loan.submitted_at.as_deref()),
                money(loan.requested_amount),
                or_na(loan.term_years.map(|years| format!("{years} años"))),
                or_na(loan.status.as_deref().map(status::label)),
                or_na(loan.comments.clone()),
                day(loan.decided_at.as_deref()),
            ]
        })
        .collect();
    table(
        &["ID", "Solicitante", "Tipo", "Fecha", "Monto", "Plazo", "Estado", "Comentarios", "Fecha de Aprobación/Rechazo"],
        &rows,
    )
}

pub fn loan_details(loan: &LoanApplication) -> String {
    let mut rows = vec![
        ("ID Solicitud", or_na(loan.id.map(|id| id.to_string()))),
        ("Solicitante", or_na(loan.owner_full_name().map(str::to_owned))),
        ("Tipo de Préstamo", or_na(loan.loan_type_label())),
        ("Fecha", day(loan.submitted_at.as_deref())),
        ("Monto Solicitado", money(loan.requested_amount)),
        ("Plazo", or_na(loan.term_years.map(|years| format!("{years} años")))),
        ("Tasa de Interés", or_na(loan.interest_rate.map(|rate| format!("{rate}%")))),
        ("Valor de la Propiedad", money(loan.property_value)),
        ("Estado", or_na(loan.status.as_deref().map(status::label))),
        ("Comentarios", or_na(loan.comments.clone())),
        ("Fecha de Aprobación/Rechazo", day(loan.decided_at.as_deref())),
    ];
    if loan.monthly_payment.is_some() {
        rows.push(("Cuota Mensual", money(loan.monthly_payment)));
        rows.push(("Total Pagado", money(loan.total_paid)));
        rows.push(("Total Intereses", money(loan.total_interest)));
    }
    let documents = loan.documents();
    if !documents.is_empty() {
        rows.push(("Documentos", documents.join(", ")));
    }
    details(&rows)
}

// =============================================================================
// SIMULATION & REQUIREMENTS
// =============================================================================

pub fn simulation(result: &SimulationResult) -> String {
    let mut rows = vec![
        ("Cuota Mensual", money(result.monthly_payment)),
        ("Total Pagado", money(result.total_paid)),
        ("Total Intereses", money(result.total_interest)),
    ];
    if let Some(costs) = result.additional_costs {
        rows.push(("Costos Adicionales", format_money(costs)));
    }
    if let Some(total) = result.final_total {
        rows.push(("Total Final", format_money(total)));
    }
    details(&rows)
}

pub fn requirements(requirements: &LoanRequirements) -> String {
    let mut out = format!("{}\n", requirements.loan_type.display_name());
    out.push_str(&details(&[
        ("Plazo", requirements.term_hint()),
        ("Tasa de interés", requirements.rate_hint()),
        ("Financiamiento máximo", requirements.financing_hint()),
    ]));
    out.push_str("\nDocumentos requeridos:");
    for document in requirements.documents {
        out.push_str("\n  - ");
        out.push_str(document);
    }
    out
}
