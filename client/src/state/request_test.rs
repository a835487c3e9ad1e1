use super::*;

#[test]
fn begin_clears_previous_outcome() {
    let mut state = RequestState::default();
    state.fail("Error al obtener las solicitudes");
    assert!(state.begin("Buscando..."));
    assert_eq!(state, RequestState { busy: Some("Buscando..."), message: None, error: None });
}

#[test]
fn second_begin_is_refused_while_busy() {
    let mut state = RequestState::default();
    assert!(state.begin("Enviando..."));
    assert!(!state.begin("Enviando..."));
    assert!(state.is_busy());
}

#[test]
fn succeed_and_fail_return_to_idle() {
    let mut state = RequestState::default();
    state.begin("Enviando...");
    state.succeed("Usuario registrado con éxito.");
    assert!(!state.is_busy());
    assert_eq!(state.message.as_deref(), Some("Usuario registrado con éxito."));

    state.begin("Enviando...");
    state.fail("Error al registrar usuario.");
    assert!(!state.is_busy());
    assert_eq!(state.message, None);
    assert_eq!(state.error.as_deref(), Some("Error al registrar usuario."));
}

#[test]
fn settle_keeps_outcome() {
    let mut state = RequestState::default();
    state.begin("Cargando...");
    state.settle();
    assert_eq!(state, RequestState::default());
    state.succeed("ok");
    state.settle();
    assert_eq!(state.message.as_deref(), Some("ok"));
    state.clear();
    assert_eq!(state, RequestState::default());
}
