//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for a public-IP lookup.
///
/// Every failure class the lookup can observe gets its own variant so the log
/// line says what actually went wrong. At the rendering boundary all variants
/// collapse into the single fallback branch.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be sent or the response body could not be read
    /// (DNS failure, connection refused, timeout, etc.).
    #[error("HTTP request error: {0}")]
    Request(#[from] ReqwestError),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON of the expected shape.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The response parsed but the address field was empty or blank.
    #[error("Response contained an empty IP address field")]
    EmptyAddress,
}
