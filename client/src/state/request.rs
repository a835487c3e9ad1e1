//! Per-screen request lifecycle: idle, busy, then a success or error line.
//!
//! Each page owns one `RwSignal<RequestState>`. The busy flag disables the
//! triggering control so at most one request per screen is in flight.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    /// Progress label while a request is in flight.
    pub busy: Option<&'static str>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RequestState {
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    /// Enter the busy state, clearing any earlier outcome.
    ///
    /// Returns `false` when a request is already running.
    pub fn begin(&mut self, label: &'static str) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self { busy: Some(label), message: None, error: None };
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = Self { busy: None, message: Some(message.into()), error: None };
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        *self = Self { busy: None, message: None, error: Some(error.into()) };
    }

    /// Back to idle without touching the last outcome.
    pub fn settle(&mut self) {
        self.busy = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
