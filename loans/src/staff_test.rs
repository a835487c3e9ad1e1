use super::*;

#[test]
fn default_gate_accepts_default_credentials() {
    assert_eq!(StaffGate::default().check("admin", "admin"), Ok(()));
}

#[test]
fn wrong_password_is_denied() {
    assert_eq!(StaffGate::default().check("admin", "Admin"), Err(StaffDenied));
    assert_eq!(StaffGate::default().check("admin", " admin"), Err(StaffDenied));
}

#[test]
fn user_name_is_trimmed() {
    assert_eq!(StaffGate::default().check(" admin ", "admin"), Ok(()));
}

#[test]
fn overrides_replace_defaults() {
    let gate = StaffGate::with_overrides(Some("ejecutivo"), Some("s3cret"));
    assert_eq!(gate.check("ejecutivo", "s3cret"), Ok(()));
    assert_eq!(gate.check("admin", "admin"), Err(StaffDenied));
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let gate = StaffGate::with_overrides(Some("  "), None);
    assert_eq!(gate, StaffGate::default());
}

#[test]
fn denied_message_is_user_facing() {
    assert_eq!(StaffDenied.to_string(), "Usuario o contraseña incorrectos");
}
