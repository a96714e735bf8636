//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the API base
//! URL is captured from `BRIEF_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `BRIEF_API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the research-brief backend.
pub fn api_base_url() -> &'static str {
    resolve_api_base_url(option_env!("BRIEF_API_URL"))
}

fn resolve_api_base_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}
