//! Display helpers for backend-owned application status codes.
//!
//! Status strings are opaque: the backend defines the E1..E9 progression and
//! enforces every transition. The client only labels the codes it knows and
//! echoes the rest.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

const LABELS: &[(&str, &str)] = &[
    ("E1", "Revisión inicial"),
    ("E2", "Pendiente de documentación"),
    ("E3", "En evaluación"),
    ("E4", "Pre-aprobada"),
    ("E5", "En aprobación final"),
    ("E6", "Aprobada"),
    ("E7", "Rechazada"),
    ("E8", "Cancelada"),
    ("E9", "En desembolso"),
    ("EN_REVISION_INICIAL", "Revisión inicial"),
    ("APROBADA", "Aprobada"),
    ("RECHAZADA", "Rechazada"),
];

/// Leading code of a status string: `"E6_APROBADA"` -> `"E6"`.
fn code_prefix(status: &str) -> &str {
    let status = status.trim();
    match status.split_once('_') {
        Some((head, _)) if head.len() == 2 && head.starts_with('E') => head,
        _ => status,
    }
}

/// Human label for a status code, or the raw code when unknown.
#[must_use]
pub fn label(status: &str) -> String {
    let trimmed = status.trim();
    let prefix = code_prefix(trimmed);
    LABELS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(trimmed) || code.eq_ignore_ascii_case(prefix))
        .map_or_else(|| trimmed.to_owned(), |(_, text)| (*text).to_owned())
}

/// Whether the backend has already reached a decision for this status.
///
/// Used to disable the evaluate action; not a transition rule.
#[must_use]
pub fn is_final(status: &str) -> bool {
    let trimmed = status.trim();
    let prefix = code_prefix(trimmed);
    ["E6", "E7", "APROBADA", "RECHAZADA"]
        .iter()
        .any(|code| code.eq_ignore_ascii_case(trimmed) || code.eq_ignore_ascii_case(prefix))
}

/// Confirmation line after a forced status change.
///
/// The backend answers either with plain text, which is shown as is, or with
/// the updated record or nothing, in which case a summary is built.
#[must_use]
pub fn change_summary(id: i64, new_status: &str, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("Solicitud #{id} actualizada a {}.", label(new_status))
    } else {
        body.to_owned()
    }
}
