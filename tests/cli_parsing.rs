//! Tests for CLI option parsing.

use clap::Parser;
use ip_status::{Config, LogFormat};

#[test]
fn test_cli_defaults() {
    let args = ["ip_status"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse with no options");

    assert_eq!(config.endpoint, "https://api.ipify.org?format=json");
    assert_eq!(config.timeout_seconds, 10);
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Info
    );
    match config.log_format {
        LogFormat::Plain => {}
        _ => panic!("Default log format should be Plain"),
    }
}

#[test]
fn test_cli_with_options() {
    let args = [
        "ip_status",
        "--endpoint",
        "http://127.0.0.1:9/ip",
        "--timeout-seconds",
        "3",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args.iter()).expect("Should parse with options");

    assert_eq!(config.endpoint, "http://127.0.0.1:9/ip");
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    match config.log_format {
        LogFormat::Json => {}
        _ => panic!("Should parse json log format"),
    }
}

#[test]
fn test_cli_custom_user_agent() {
    let args = ["ip_status", "--user-agent", "probe/1.0"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse user agent");
    assert_eq!(config.user_agent, "probe/1.0");
}

#[test]
fn test_cli_rejects_invalid_log_level() {
    let args = ["ip_status", "--log-level", "verbose"];
    assert!(Config::try_parse_from(args.iter()).is_err());
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let args = ["ip_status", "--timeout-seconds", "soon"];
    assert!(Config::try_parse_from(args.iter()).is_err());
}
