use super::*;

#[test]
fn in_range_values_have_no_advisories() {
    assert!(advisory_lines(LoanType::FirstHome, "30", "4.5").is_empty());
}

#[test]
fn out_of_range_values_produce_advisories() {
    let notes = advisory_lines(LoanType::Remodeling, "25", "9");
    assert_eq!(notes.len(), 2);
    assert!(notes[0].contains("25 años"));
    assert!(notes[1].contains("9%"));
}

#[test]
fn unparsable_input_is_ignored() {
    assert!(advisory_lines(LoanType::SecondHome, "veinte", "").is_empty());
}
