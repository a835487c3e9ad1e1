use std::io::Write as _;

use clap::Parser;
use loans::confirm::ConfirmationError;
use loans::errors::{REGISTER_FAILED, SIMULATE_FAILED};
use loans::validation::{FILE_TOO_LARGE, FILE_TYPE_INVALID};

use super::*;
use crate::cli::Cli;
use crate::mock_backend::MockBackend;

const LOAN_7: &str = r#"{
    "idSolicitud": 7,
    "usuario": {"idUsuario": 2, "nombreCompleto": "Ana Pérez", "numeroIdentificacion": "12345678"},
    "tipoPrestamo": "PRIMERA_VIVIENDA",
    "montoSolicitado": 3000000,
    "plazoSolicitado": 20,
    "estadoSolicitud": "E3_EN_EVALUACION"
}"#;

fn command(args: &[&str]) -> Command {
    let mut argv = vec!["prestabanco"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv).command
}

async fn run_args(mock: &MockBackend, args: &[&str]) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = run(&mock.config(), command(args), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

fn document(dir: &tempfile::TempDir, name: &str, size: usize) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![b'x'; size]).unwrap();
    path.to_string_lossy().into_owned()
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[tokio::test]
async fn register_posts_once_with_full_field_set() {
    let mock = MockBackend::start(&[(
        "POST /api/usuarios/registrar",
        201,
        r#"{"idUsuario": 11, "nombreCompleto": "Ana Pérez"}"#,
    )])
    .await;
    let (result, out) = run_args(
        &mock,
        &[
            "user", "register", "--full-name", " Ana Pérez ", "--email", "ana@banco.cl", "--monthly-income", "1500000",
            "--phone", "+56 9 1234 5678", "--birth-date", "1990-04-12",
        ],
    )
    .await;
    result.unwrap();
    assert!(out.starts_with("Usuario registrado con éxito."));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/usuarios/registrar");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));

    let body = requests[0].json();
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "antiguedadLaboral",
            "capacidadAhorro",
            "correoElectronico",
            "deudasActuales",
            "direccion",
            "estadoCivil",
            "fechaNacimiento",
            "historialAhorro",
            "historialCrediticio",
            "ingresosMensuales",
            "nombreCompleto",
            "numeroDependientes",
            "numeroIdentificacion",
            "numeroTelefono",
            "saldoCuentaAhorros",
            "tipoEmpleo",
            "tipoIdentificacion",
            "tipoUsuario",
        ]
    );
    assert_eq!(body["nombreCompleto"], "Ana Pérez");
    assert_eq!(body["ingresosMensuales"], 1_500_000.0);
    assert_eq!(body["tipoUsuario"], "CLIENTE");
    assert_eq!(body["historialCrediticio"], "BUENO");
}

#[tokio::test]
async fn invalid_registration_sends_nothing() {
    let mock = MockBackend::start(&[]).await;
    let (result, _) = run_args(&mock, &["user", "register", "--full-name", "Ana", "--email", "ana@"]).await;
    let Err(CliError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.get(Field::Email).is_some());
    assert!(errors.get(Field::MonthlyIncome).is_some());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn register_failure_without_message_uses_fallback() {
    let mock = MockBackend::start(&[("POST /api/usuarios/registrar", 500, "")]).await;
    let (result, _) =
        run_args(&mock, &["user", "register", "--full-name", "Ana", "--email", "ana@banco.cl", "--monthly-income", "1"])
            .await;
    let err = result.unwrap_err();
    assert!(matches!(&err, CliError::Server { message, .. } if message == REGISTER_FAILED));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn find_user_encodes_name() {
    let mock = MockBackend::start(&[(
        "GET /api/usuarios/nombre/Ana%20P%C3%A9rez",
        200,
        r#"{"idUsuario": 2, "nombreCompleto": "Ana Pérez"}"#,
    )])
    .await;
    let (result, out) = run_args(&mock, &["user", "find", "Ana Pérez"]).await;
    result.unwrap();
    assert!(out.contains("Ana Pérez"));
}

// =============================================================================
// DELETION
// =============================================================================

#[tokio::test]
async fn delete_with_mismatched_owner_never_deletes() {
    let mock =
        MockBackend::start(&[("GET /api/solicitudes/7", 200, LOAN_7), ("DELETE /api/solicitudes/7", 204, "")]).await;
    let (result, _) =
        run_args(&mock, &["loan", "delete", "7", "--full-name", "ana pérez", "--id-number", "12345678"]).await;
    assert!(matches!(result, Err(CliError::ConfirmationMismatch(ConfirmationError::Mismatch))));

    let methods: Vec<String> = mock.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, ["GET"]);
}

#[tokio::test]
async fn delete_with_matching_owner_deletes() {
    let mock =
        MockBackend::start(&[("GET /api/solicitudes/7", 200, LOAN_7), ("DELETE /api/solicitudes/7", 204, "")]).await;
    let (result, out) =
        run_args(&mock, &["loan", "delete", "7", "--full-name", " Ana Pérez", "--id-number", "12345678 "]).await;
    result.unwrap();
    assert_eq!(out.trim(), "Solicitud #7 eliminada.");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!((requests[1].method.as_str(), requests[1].path.as_str()), ("DELETE", "/api/solicitudes/7"));
}

#[tokio::test]
async fn delete_of_missing_application_is_not_found() {
    let mock = MockBackend::start(&[("GET /api/solicitudes/8", 200, "null")]).await;
    let (result, _) = run_args(&mock, &["loan", "delete", "8", "--full-name", "Ana", "--id-number", "1"]).await;
    assert!(matches!(result, Err(CliError::LoanNotFound(8))));
}

// =============================================================================
// SIMULATION
// =============================================================================

#[tokio::test]
async fn simulation_zero_fills_blank_costs() {
    let mock = MockBackend::start(&[(
        "POST /api/solicitudes/simular",
        200,
        r#"{"cuotaMensual": 18979.58, "totalPagado": 4555099.2, "totalIntereses": 1555099.2}"#,
    )])
    .await;
    let (result, out) = run_args(
        &mock,
        &["simulate", "--amount", "3000000", "--term", "20", "--rate", "4.5", "--loan-type", "PRIMERA_VIVIENDA"],
    )
    .await;
    result.unwrap();
    assert!(out.contains("$18,979.58"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "montoDeseado": 3_000_000.0,
            "plazo": 20,
            "tasaInteres": 4.5,
            "tipoPrestamo": "PRIMERA_VIVIENDA",
            "seguros": 0.0,
            "comisiones": 0.0,
        })
    );
}

#[tokio::test]
async fn simulation_validation_map_is_listed() {
    let mock = MockBackend::start(&[(
        "POST /api/solicitudes/simular",
        400,
        r#"{"montoDeseado": "debe ser mayor a 0", "plazo": "fuera de rango"}"#,
    )])
    .await;
    let (result, _) = run_args(
        &mock,
        &["simulate", "--amount", "10", "--term", "20", "--rate", "4.5", "--loan-type", "remodeling"],
    )
    .await;
    let Err(CliError::Server { message, status }) = result else {
        panic!("expected server error");
    };
    assert_eq!(status, 400);
    assert_eq!(message, format!("{SIMULATE_FAILED}:\ndebe ser mayor a 0\nfuera de rango"));
}

#[tokio::test]
async fn simulation_rejects_zero_amount_locally() {
    let mock = MockBackend::start(&[]).await;
    let (result, _) =
        run_args(&mock, &["simulate", "--amount", "0", "--term", "20", "--rate", "4.5", "--loan-type", "commercial"])
            .await;
    assert!(matches!(result, Err(CliError::Validation(ref e)) if e.get(Field::Amount).is_some()));
    assert!(mock.requests().is_empty());
}

// =============================================================================
// APPLICATION
// =============================================================================

#[tokio::test]
async fn apply_sends_multipart_with_both_documents() {
    let dir = tempfile::tempdir().unwrap();
    let income = document(&dir, "ingresos.pdf", 1024);
    let appraisal = document(&dir, "avaluo.png", 2048);
    let mock = MockBackend::start(&[(
        "POST /api/solicitudes/crear-con-usuario",
        201,
        r#"{"idSolicitud": 21, "estadoSolicitud": "E1_EN_REVISION_INICIAL", "montoSolicitado": 3000000}"#,
    )])
    .await;
    let (result, out) = run_args(
        &mock,
        &[
            "loan", "apply", "--full-name", "Ana Pérez", "--loan-type", "first-home", "--amount", "3000000", "--term",
            "20", "--rate", "4.5", "--income-proof", &income, "--appraisal-proof", &appraisal,
        ],
    )
    .await;
    result.unwrap();
    assert!(out.starts_with("Su solicitud #21 fue registrada"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].content_type.as_deref().is_some_and(|ct| ct.starts_with("multipart/form-data; boundary=")));
    let body = requests[0].text();
    for (name, value) in [
        ("nombreCompleto", "Ana Pérez"),
        ("tipoPrestamo", "PRIMERA_VIVIENDA"),
        ("montoSolicitado", "3000000"),
        ("plazoSolicitado", "20"),
        ("tasaInteres", "4.5"),
    ] {
        assert!(body.contains(&format!("name=\"{name}\"\r\n\r\n{value}\r\n")), "missing part {name}");
    }
    assert!(!body.contains("name=\"valorPropiedad\""));
    assert!(body.contains("name=\"comprobanteIngresos\"; filename=\"ingresos.pdf\"\r\nContent-Type: application/pdf"));
    assert!(body.contains("name=\"comprobanteAvaluo\"; filename=\"avaluo.png\"\r\nContent-Type: image/png"));
}

#[tokio::test]
async fn apply_rejects_oversized_and_wrong_type_documents() {
    let dir = tempfile::tempdir().unwrap();
    let too_big = document(&dir, "ingresos.pdf", 6 * 1024 * 1024);
    let text = document(&dir, "avaluo.txt", 10);
    let mock = MockBackend::start(&[]).await;
    let (result, _) = run_args(
        &mock,
        &[
            "loan", "apply", "--full-name", "Ana", "--loan-type", "REMODELACION", "--amount", "100", "--term", "15",
            "--rate", "5", "--income-proof", &too_big, "--appraisal-proof", &text,
        ],
    )
    .await;
    let Err(CliError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert_eq!(errors.get(Field::IncomeProof), Some(FILE_TOO_LARGE));
    assert_eq!(errors.get(Field::AppraisalProof), Some(FILE_TYPE_INVALID));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn apply_reports_unreadable_document() {
    let mock = MockBackend::start(&[]).await;
    let (result, _) = run_args(&mock, &["loan", "apply", "--income-proof", "/nonexistent/ingresos.pdf"]).await;
    assert!(matches!(result, Err(CliError::Read { .. })));
}

// =============================================================================
// STATUS & EVALUATION
// =============================================================================

#[tokio::test]
async fn list_by_owner_uses_encoded_name() {
    let mock = MockBackend::start(&[(
        "GET /api/solicitudes/usuario/nombre/Ana%20P%C3%A9rez",
        200,
        &format!("[{LOAN_7}]"),
    )])
    .await;
    let (result, out) = run_args(&mock, &["loan", "list", "--owner", " Ana Pérez "]).await;
    result.unwrap();
    assert!(out.contains("En evaluación"));
}

#[tokio::test]
async fn blank_owner_lists_everything() {
    let mock = MockBackend::start(&[("GET /api/solicitudes", 200, "[]")]).await;
    let (result, out) = run_args(&mock, &["loan", "list", "--owner", "  "]).await;
    result.unwrap();
    assert_eq!(out.trim(), "No se encontraron solicitudes.");
}

#[tokio::test]
async fn evaluation_requires_staff_login() {
    let mock = MockBackend::start(&[]).await;
    let (result, _) = run_args(&mock, &["loan", "evaluate", "7", "--login", "admin", "--password", "nope"]).await;
    assert!(matches!(result, Err(CliError::StaffDenied(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn evaluation_prints_outcome_then_record() {
    let mock = MockBackend::start(&[
        ("PUT /api/solicitudes/7/evaluar", 200, "Solicitud pre-aprobada"),
        ("GET /api/solicitudes/7", 200, LOAN_7),
    ])
    .await;
    let (result, out) = run_args(&mock, &["loan", "evaluate", "7", "--login", "admin", "--password", "admin"]).await;
    result.unwrap();
    assert!(out.starts_with("Solicitud pre-aprobada\n"));
    assert!(out.contains("ID Solicitud"));
}

#[tokio::test]
async fn set_status_sends_query_parameter() {
    let mock = MockBackend::start(&[("PUT /api/solicitudes/7/cambiar-estado", 200, "")]).await;
    let (result, out) = run_args(
        &mock,
        &["loan", "set-status", "7", " E8_CANCELADA ", "--login", "admin", "--password", "admin"],
    )
    .await;
    result.unwrap();
    assert_eq!(out.trim(), "Solicitud #7 actualizada a Cancelada.");
    assert_eq!(mock.requests()[0].query.as_deref(), Some("nuevoEstado=E8_CANCELADA"));
}

#[tokio::test]
async fn blank_status_is_refused() {
    let mock = MockBackend::start(&[]).await;
    let (result, _) = run_args(&mock, &["loan", "set-status", "7", "  ", "--login", "admin", "--password", "admin"]).await;
    assert!(matches!(result, Err(CliError::StatusRequired)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn requirements_need_no_backend() {
    let mock = MockBackend::start(&[]).await;
    let (result, out) = run_args(&mock, &["requirements", "second-home"]).await;
    result.unwrap();
    assert!(out.starts_with("Segunda Vivienda"));
    assert!(out.contains("Escritura de la primera vivienda"));
    assert!(mock.requests().is_empty());
}
