use super::*;

#[test]
fn every_text_field_reads_back_what_it_writes() {
    for (label, _, _, read, write) in TEXT_FIELDS {
        let mut form = RegistrationForm::default();
        write(&mut form, format!("valor de {label}"));
        assert_eq!(read(&form), format!("valor de {label}"), "{label}");
    }
}

#[test]
fn required_fields_are_marked() {
    let required: Vec<_> = TEXT_FIELDS.iter().filter(|row| row.0.ends_with('*')).filter_map(|row| row.2).collect();
    assert_eq!(required, vec![Field::FullName, Field::Email, Field::MonthlyIncome]);
}

#[test]
fn welcome_message_names_the_applicant() {
    assert!(welcome_message("Ana Pérez").starts_with("Ana Pérez ya puede"));
}
