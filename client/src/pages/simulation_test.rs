use super::*;

#[test]
fn result_rows_format_money() {
    let result = SimulationResult {
        monthly_payment: Some(18_979.79),
        total_paid: Some(4_555_149.6),
        total_interest: Some(1_555_149.6),
        additional_costs: None,
        final_total: None,
    };
    let rows = result_rows(&result);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], ("Cuota Mensual", "$18,979.79".to_owned()));
    assert_eq!(rows[1], ("Total Pagado", "$4,555,149.60".to_owned()));
}

#[test]
fn optional_figures_are_listed_when_present() {
    let result = SimulationResult { additional_costs: Some(1500.0), final_total: Some(4_556_649.6), ..SimulationResult::default() };
    let labels: Vec<_> = result_rows(&result).into_iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["Cuota Mensual", "Total Pagado", "Total Intereses", "Costos Adicionales", "Total Final"]);
}

#[test]
fn blank_costs_in_the_initial_form_simulate_as_zero() {
    let form = SimulationForm {
        amount: "3000000".to_owned(),
        term: "20".to_owned(),
        rate: "4.5".to_owned(),
        ..initial_form()
    };
    let body = form.validate().ok();
    assert_eq!(body.as_ref().map(|b| (b.insurance, b.commissions)), Some((0.0, 0.0)));
    assert_eq!(body.map(|b| b.loan_type), Some(LoanType::FirstHome));
}

#[test]
fn missing_figures_show_na() {
    let result = SimulationResult { total_paid: Some(1000.0), ..SimulationResult::default() };
    let rows = result_rows(&result);
    assert_eq!(rows[0], ("Cuota Mensual", "N/A".to_owned()));
    assert_eq!(rows[1], ("Total Pagado", "$1,000.00".to_owned()));
}
