use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["prestabanco"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn base_url_trailing_slash_is_dropped() {
    let url = parse_base_url("http://localhost:8080/api/ ").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api");
}

#[test]
fn base_url_requires_http_scheme() {
    assert!(matches!(parse_base_url("ftp://example.com/api"), Err(CliError::InvalidBaseUrl(_))));
    assert!(matches!(parse_base_url("localhost:8080"), Err(CliError::InvalidBaseUrl(_))));
    assert!(matches!(parse_base_url("not a url"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn base_url_rejects_query() {
    assert!(parse_base_url("https://bank.example/api?x=1").is_err());
}

#[test]
fn from_cli_applies_flags() {
    let cli = parse(&["--base-url", "https://bank.example/api/", "--timeout-secs", "5", "--json", "user", "list"]);
    let config = Config::from_cli(&cli).unwrap();
    assert_eq!(config.base_url.as_str(), "https://bank.example/api");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn staff_overrides_replace_default_credentials() {
    let cli = parse(&["--staff-user", "ejecutivo", "--staff-password", "s3creto", "user", "list"]);
    let config = Config::from_cli(&cli).unwrap();
    assert!(config.staff.check("ejecutivo", "s3creto").is_ok());
    assert!(config.staff.check("admin", "admin").is_err());
}

#[test]
fn zero_timeout_is_rejected_by_parser() {
    let argv = ["prestabanco", "--timeout-secs", "0", "user", "list"];
    assert!(Cli::try_parse_from(argv).is_err());
}
