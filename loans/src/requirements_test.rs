use super::*;

#[test]
fn every_loan_type_has_an_entry_keyed_by_itself() {
    for loan_type in LoanType::ALL {
        assert_eq!(requirements_for(loan_type).loan_type, loan_type);
        assert!(!requirements_for(loan_type).documents.is_empty());
    }
}

#[test]
fn first_home_matches_published_terms() {
    let req = requirements_for(LoanType::FirstHome);
    assert_eq!(req.term_years, Range { min: 30, max: 30 });
    assert_eq!(req.max_financing_percent, 80);
    assert_eq!(req.term_hint(), "30 años");
    assert_eq!(req.rate_hint(), "3.5% - 5%");
    assert_eq!(req.financing_hint(), "80% del valor de la propiedad");
}

#[test]
fn second_home_requires_first_home_deed() {
    let req = requirements_for(LoanType::SecondHome);
    assert!(req.documents.contains(&"Escritura de la primera vivienda"));
    assert_eq!(req.documents.len(), 4);
}

#[test]
fn term_hint_renders_span_when_bounds_differ() {
    let req = LoanRequirements { term_years: Range { min: 15, max: 20 }, ..*requirements_for(LoanType::Remodeling) };
    assert_eq!(req.term_hint(), "15 - 20 años");
}

#[test]
fn advisories_empty_when_values_within_range() {
    let req = requirements_for(LoanType::CommercialProperty);
    assert!(req.advisories(Some(25), Some(6.0)).is_empty());
    assert!(req.advisories(None, None).is_empty());
}

#[test]
fn advisories_flag_out_of_range_term_and_rate() {
    let req = requirements_for(LoanType::Remodeling);
    let notes = req.advisories(Some(30), Some(9.5));
    assert_eq!(notes.len(), 2);
    assert!(notes[0].contains("30 años"));
    assert!(notes[0].contains("Remodelación"));
    assert!(notes[1].contains("9.5%"));
}
