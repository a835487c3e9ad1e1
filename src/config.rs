//! Resolved runtime configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use loans::staff::StaffGate;
use reqwest::Url;

use crate::cli::Cli;
use crate::error::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
    pub staff: StaffGate,
    pub output: OutputFormat,
}

impl Config {
    /// # Errors
    ///
    /// [`CliError::InvalidBaseUrl`] when the base URL is not an absolute
    /// http(s) URL.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            base_url: parse_base_url(&cli.base_url)?,
            timeout: Duration::from_secs(cli.timeout_secs),
            staff: StaffGate::with_overrides(cli.staff_user.as_deref(), cli.staff_password.as_deref()),
            output: if cli.json { OutputFormat::Json } else { OutputFormat::Table },
        })
    }
}

/// Parse the backend root, dropping trailing slashes.
pub fn parse_base_url(raw: &str) -> Result<Url, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = || CliError::InvalidBaseUrl(raw.to_owned());
    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    Ok(url)
}
