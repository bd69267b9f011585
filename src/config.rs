//! Build- and run-time configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at run time, so the API
//! base URL is baked in at compile time from `API_BASE_URL`. The SSR binary
//! reads its bind address from the Leptos metadata with a `PORT` override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default remote API location used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const API_BASE_URL_RAW: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// The configured API base URL with any trailing slash removed.
pub fn api_base_url() -> &'static str {
    normalize_base_url(API_BASE_URL_RAW)
}

/// Trim surrounding whitespace and trailing slashes; fall back to the default
/// when nothing is left.
pub fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}

/// Parse a `PORT` override, ignoring empty or malformed values.
pub fn parse_port(raw: Option<&str>) -> Option<u16> {
    raw.map(str::trim).filter(|v| !v.is_empty()).and_then(|v| v.parse::<u16>().ok())
}
