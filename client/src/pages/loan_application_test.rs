use super::*;

#[test]
fn form_starts_on_first_home() {
    assert_eq!(initial_form().loan_type, Some(LoanType::FirstHome));
    assert!(initial_form().amount.is_empty());
}

#[test]
fn created_message_mentions_id_when_known() {
    assert!(created_message(Some(17)).contains("#17"));
    assert!(!created_message(None).contains('#'));
}

#[test]
fn term_hint_follows_loan_type() {
    assert_eq!(term_hint(Some(LoanType::Remodeling)), "15 años");
    assert_eq!(term_hint(None), "años");
}
