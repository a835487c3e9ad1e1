use super::*;

#[test]
fn user_endpoints() {
    assert_eq!(Endpoint::RegisterUser.describe(), "POST /usuarios/registrar");
    assert_eq!(Endpoint::Users.describe(), "GET /usuarios");
    assert_eq!(Endpoint::User(3).describe(), "GET /usuarios/3");
    assert_eq!(Endpoint::UserByName("Ana Pérez").segments(), vec!["usuarios", "nombre", "Ana Pérez"]);
}

#[test]
fn loan_endpoints() {
    assert_eq!(Endpoint::CreateLoan.describe(), "POST /solicitudes/crear-con-usuario");
    assert_eq!(Endpoint::Loans.describe(), "GET /solicitudes");
    assert_eq!(Endpoint::Loan(12).describe(), "GET /solicitudes/12");
    assert_eq!(Endpoint::LoansByOwner("Ana").describe(), "GET /solicitudes/usuario/nombre/Ana");
    assert_eq!(Endpoint::Evaluate(12).describe(), "PUT /solicitudes/12/evaluar");
    assert_eq!(Endpoint::DeleteLoan(12).describe(), "DELETE /solicitudes/12");
    assert_eq!(Endpoint::Simulate.describe(), "POST /solicitudes/simular");
}

#[test]
fn status_change_carries_query() {
    let endpoint = Endpoint::ChangeStatus(5, "E4_PRE_APROBADA");
    assert_eq!(endpoint.method(), Method::Put);
    assert_eq!(endpoint.segments(), vec!["solicitudes", "5", "cambiar-estado"]);
    assert_eq!(endpoint.query(), vec![("nuevoEstado", "E4_PRE_APROBADA".to_owned())]);
}

#[test]
fn only_status_change_has_query() {
    assert!(Endpoint::Loans.query().is_empty());
    assert!(Endpoint::Evaluate(1).query().is_empty());
}

#[test]
fn names_are_left_unencoded() {
    let segments = Endpoint::LoansByOwner("José Núñez/Hijo").segments();
    assert_eq!(segments.last().map(String::as_str), Some("José Núñez/Hijo"));
}

#[test]
fn parse_list_reads_blank_and_null_as_empty() {
    assert!(parse_list::<i64>("").unwrap().is_empty());
    assert!(parse_list::<i64>(" null ").unwrap().is_empty());
    assert_eq!(parse_list::<i64>("[1,2]").unwrap(), vec![1, 2]);
    assert!(parse_list::<i64>("{}").is_err());
}

#[test]
fn parse_optional_reads_blank_and_null_as_missing() {
    assert_eq!(parse_optional::<i64>("").unwrap(), None);
    assert_eq!(parse_optional::<i64>("null").unwrap(), None);
    assert_eq!(parse_optional::<i64>("7").unwrap(), Some(7));
}
