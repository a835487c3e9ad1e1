//! Build-time configuration for the browser bundle.
//!
//! Values come from the environment of the `trunk build` invocation; the
//! bundle cannot read process environment at run time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use loans::api::DEFAULT_WEB_BASE;
use loans::staff::StaffGate;

/// Backend root, without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("PRESTABANCO_API_BASE"))
}

/// Staff gate for the evaluation screen.
pub fn staff_gate() -> StaffGate {
    StaffGate::with_overrides(option_env!("PRESTABANCO_STAFF_USER"), option_env!("PRESTABANCO_STAFF_PASSWORD"))
}

fn normalize_base(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).filter(|value| !value.is_empty()).unwrap_or(DEFAULT_WEB_BASE);
    base.trim_end_matches('/').to_owned()
}
