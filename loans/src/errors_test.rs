use super::*;

#[test]
fn server_message_wins_over_fallback() {
    let err = RequestError::from_response(400, r#"{"message":"El usuario no existe"}"#);
    assert_eq!(err.user_message(CREATE_LOAN_FAILED), "El usuario no existe");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn empty_message_uses_fallback() {
    let err = RequestError::from_response(500, r#"{"timestamp":"2024-10-01","status":500,"error":"Internal Server Error","message":""}"#);
    assert_eq!(err.user_message(REGISTER_FAILED), "Error al registrar usuario.");
    assert_eq!(err.detailed_message(REGISTER_FAILED), "Error al registrar usuario.");
}

#[test]
fn non_json_body_uses_fallback() {
    let err = RequestError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err.user_message(LIST_LOANS_FAILED), "Error al obtener las solicitudes");
}

#[test]
fn transport_and_decode_use_fallback() {
    assert_eq!(RequestError::Transport("refused".into()).user_message(DELETE_LOAN_FAILED), DELETE_LOAN_FAILED);
    assert_eq!(RequestError::Decode("eof".into()).user_message(EVALUATE_FAILED), EVALUATE_FAILED);
    assert_eq!(RequestError::Transport("refused".into()).status(), None);
}

#[test]
fn validation_map_is_listed_under_fallback() {
    let err = RequestError::from_response(400, r#"{"montoDeseado":"Debe ser positivo","plazo":"Máximo 30 años"}"#);
    assert_eq!(err.detailed_message(SIMULATE_FAILED), "Error al simular el crédito:\nDebe ser positivo\nMáximo 30 años");
    assert_eq!(err.user_message(SIMULATE_FAILED), SIMULATE_FAILED);
}

#[test]
fn message_suppresses_details() {
    let err = RequestError::from_response(400, r#"{"message":"Datos inválidos","plazo":"Máximo 30 años"}"#);
    assert_eq!(err.detailed_message(SIMULATE_FAILED), "Datos inválidos");
}

#[test]
fn mixed_object_is_not_a_validation_map() {
    assert!(field_messages(&serde_json::json!({"status": 400, "error": "Bad Request"})).is_empty());
    assert!(field_messages(&serde_json::json!(["a", "b"])).is_empty());
}

#[test]
fn display_includes_status_and_message() {
    let err = RequestError::from_response(404, r#"{"message":"No encontrada"}"#);
    assert_eq!(err.to_string(), "backend returned 404: No encontrada");
    assert_eq!(RequestError::from_response(404, "").to_string(), "backend returned 404");
}
