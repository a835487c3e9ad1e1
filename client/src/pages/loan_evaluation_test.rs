use super::*;

fn loan(status: &str) -> LoanApplication {
    LoanApplication { id: Some(7), status: Some(status.to_owned()), ..LoanApplication::default() }
}

#[test]
fn decided_applications_cannot_be_evaluated() {
    assert!(!can_evaluate(&loan("E6_APROBADA")));
    assert!(!can_evaluate(&loan("E7_RECHAZADA")));
    assert!(can_evaluate(&loan("E3_EN_EVALUACION")));
}

#[test]
fn applications_without_id_cannot_be_evaluated() {
    let loan = LoanApplication { id: None, ..loan("E1_EN_REVISION_INICIAL") };
    assert!(!can_evaluate(&loan));
}

#[test]
fn new_status_requires_non_blank_input() {
    assert_eq!(new_status_input("  E5_EN_APROBACION_FINAL "), Some("E5_EN_APROBACION_FINAL".to_owned()));
    assert_eq!(new_status_input("   "), None);
}
