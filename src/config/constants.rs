//! Configuration constants.

/// Default IP-lookup endpoint. Returns a JSON body of the form `{"ip": "<addr>"}`.
pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Prefix of the rendered status line.
pub const STATUS_PREFIX: &str = "Server IP: ";

/// Status line written when the lookup fails for any reason.
pub const FALLBACK_TEXT: &str = "Server IP: Unable to fetch IP";

/// Default HTTP User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_status/", env!("CARGO_PKG_VERSION"));
