//! Staff gate in front of the evaluation screen.
//!
//! This is a UI placeholder, not authentication: the credentials ship with the
//! client and the backend accepts evaluation calls from anyone. Swap it for a
//! real login once the backend offers one.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

pub const DEFAULT_STAFF_USER: &str = "admin";
pub const DEFAULT_STAFF_PASSWORD: &str = "admin";

/// Returned when the typed credentials do not match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Usuario o contraseña incorrectos")]
pub struct StaffDenied;

/// Expected staff credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffGate {
    user: String,
    password: String,
}

impl Default for StaffGate {
    fn default() -> Self {
        Self::new(DEFAULT_STAFF_USER, DEFAULT_STAFF_PASSWORD)
    }
}

impl StaffGate {
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self { user: user.into(), password: password.into() }
    }

    /// Build a gate from optional overrides, falling back to the defaults
    /// for whichever value is missing or blank.
    #[must_use]
    pub fn with_overrides(user: Option<&str>, password: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default).to_owned()
        };
        Self { user: pick(user, DEFAULT_STAFF_USER), password: pick(password, DEFAULT_STAFF_PASSWORD) }
    }

    /// Check typed credentials. The user name is trimmed, the password is not.
    ///
    /// # Errors
    ///
    /// [`StaffDenied`] when either value differs.
    pub fn check(&self, user: &str, password: &str) -> Result<(), StaffDenied> {
        if user.trim() == self.user && password == self.password {
            Ok(())
        } else {
            Err(StaffDenied)
        }
    }
}
