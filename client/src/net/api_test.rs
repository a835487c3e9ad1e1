use super::*;

fn spaces_encoded(raw: &str) -> String {
    raw.replace(' ', "%20")
}

#[test]
fn endpoint_url_joins_base_and_segments() {
    assert_eq!(endpoint_url("/api", &Endpoint::Loans, spaces_encoded), "/api/solicitudes");
    assert_eq!(endpoint_url("/api/", &Endpoint::Evaluate(9), spaces_encoded), "/api/solicitudes/9/evaluar");
}

#[test]
fn endpoint_url_encodes_owner_name_as_one_segment() {
    let url = endpoint_url("http://localhost:8080/api", &Endpoint::LoansByOwner("Ana María Soto"), spaces_encoded);
    assert_eq!(url, "http://localhost:8080/api/solicitudes/usuario/nombre/Ana%20María%20Soto");
}

#[test]
fn endpoint_url_appends_status_query() {
    let url = endpoint_url("/api", &Endpoint::ChangeStatus(3, "E5 EN APROBACION"), spaces_encoded);
    assert_eq!(url, "/api/solicitudes/3/cambiar-estado?nuevoEstado=E5%20EN%20APROBACION");
}

#[test]
fn decode_reports_malformed_bodies() {
    let err = decode::<Vec<LoanApplication>>("{not json").err();
    assert!(matches!(err, Some(RequestError::Decode(_))));
}

#[test]
fn decode_optional_treats_empty_and_null_as_missing() {
    assert_eq!(decode_optional::<LoanApplication>("").ok(), Some(None));
    assert_eq!(decode_optional::<LoanApplication>("null").ok(), Some(None));
    let found = decode_optional::<LoanApplication>(r#"{"idSolicitud":4,"montoSolicitado":1000.0}"#).ok().flatten();
    assert_eq!(found.and_then(|loan| loan.id), Some(4));
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_fail_outside_the_browser() {
    let err = block_on(list_loans());
    assert!(matches!(err, Err(RequestError::Transport(_))));
}

#[cfg(not(feature = "csr"))]
/// Minimal executor: the native `send` never awaits anything.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

#[test]
fn decode_list_treats_empty_and_null_as_no_rows() {
    assert_eq!(decode_list::<LoanApplication>("").ok(), Some(Vec::new()));
    assert_eq!(decode_list::<LoanApplication>("null").ok(), Some(Vec::new()));
    let rows = decode_list::<LoanApplication>(r#"[{"idSolicitud":1},{"idSolicitud":2,"tipoPrestamo":"OTRO"}]"#).ok();
    assert_eq!(rows.map(|rows| rows.len()), Some(2));
    assert!(matches!(decode_list::<LoanApplication>("{}"), Err(RequestError::Decode(_))));
}
