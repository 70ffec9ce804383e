//! Public-IP lookup against a JSON IP-lookup service.
//!
//! Issues a single HTTP GET to the configured endpoint (by default
//! `api.ipify.org`) and extracts the `ip` field from the JSON body.

use serde::Deserialize;

use crate::error_handling::LookupError;

/// JSON body returned by the IP-lookup service.
///
/// Ephemeral; it lives only long enough to pull the address out of one
/// response.
#[derive(Debug, Clone, Deserialize)]
pub struct IpResponse {
    /// The caller's public IP address.
    pub ip: String,
}

/// Fetches the public IP address from the lookup endpoint.
///
/// Performs exactly one GET request. Any failure along the way (transport
/// error, non-2xx status, malformed JSON, empty address field) maps to a
/// distinct [`LookupError`] variant.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `endpoint` - Lookup endpoint URL returning `{"ip": "<addr>"}`
///
/// # Errors
///
/// Returns a [`LookupError`] describing the first step that failed.
pub async fn fetch_public_ip(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<String, LookupError> {
    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    let body = response.text().await?;
    let parsed: IpResponse = serde_json::from_str(&body)?;

    let addr = parsed.ip.trim();
    if addr.is_empty() {
        return Err(LookupError::EmptyAddress);
    }

    log::debug!("Lookup endpoint returned address: {}", addr);
    Ok(addr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_body() {
        let body = r#"{"ip":"203.0.113.7"}"#;
        let parsed: IpResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.ip, "203.0.113.7");
    }

    #[test]
    fn test_parse_ipv6_body() {
        let body = r#"{"ip":"2001:db8::1"}"#;
        let parsed: IpResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.ip, "2001:db8::1");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        // Some lookup services include extra metadata; only the ip field matters
        let body = r#"{"ip":"203.0.113.7","country":"NL"}"#;
        let parsed: IpResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.ip, "203.0.113.7");
    }

    #[test]
    fn test_parse_missing_ip_field_fails() {
        let body = r#"{"address":"203.0.113.7"}"#;
        let result = serde_json::from_str::<IpResponse>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let result = serde_json::from_str::<IpResponse>("<html>not json</html>");
        assert!(result.is_err());
    }
}
