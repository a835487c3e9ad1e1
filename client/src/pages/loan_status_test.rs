use super::*;

fn sample() -> LoanApplication {
    LoanApplication {
        id: Some(12),
        loan_type: Some("PRIMERA_VIVIENDA".to_owned()),
        submitted_at: Some("2024-10-05T14:30:00".to_owned()),
        requested_amount: Some(3_000_000.0),
        term_years: Some(20),
        status: Some("E3_EN_EVALUACION".to_owned()),
        ..LoanApplication::default()
    }
}

#[test]
fn search_scope_trims_and_treats_blank_as_all() {
    assert_eq!(search_scope("  Ana Pérez "), Some("Ana Pérez".to_owned()));
    assert_eq!(search_scope("   "), None);
}

#[test]
fn row_cells_follow_column_order() {
    let cells = row_cells(&sample());
    assert_eq!(cells[0], "12");
    assert_eq!(cells[1], "05/10/2024");
    assert_eq!(cells[2], "$3,000,000.00");
    assert_eq!(cells[3], "20 años");
    assert_eq!(cells[4], status::label("E3_EN_EVALUACION"));
    assert_eq!(cells.len(), COLUMNS.len());
}

#[test]
fn missing_comments_and_decision_date_show_na() {
    let cells = row_cells(&sample());
    assert_eq!(cells[5], "N/A");
    assert_eq!(cells[6], "N/A");
}

#[test]
fn blank_comments_show_na_and_decision_date_is_formatted() {
    let loan = LoanApplication {
        comments: Some("  ".to_owned()),
        decided_at: Some("2024-11-01".to_owned()),
        ..sample()
    };
    let cells = row_cells(&loan);
    assert_eq!(cells[5], "N/A");
    assert_eq!(cells[6], "01/11/2024");
}

#[test]
fn missing_amount_shows_na() {
    let cells = row_cells(&LoanApplication { requested_amount: None, ..sample() });
    assert_eq!(cells[2], "N/A");
}
