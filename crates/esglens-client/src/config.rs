//! Base-URL resolution.
//!
//! The backend address comes from the environment, defaulting to the
//! local development server when unset or blank.

pub const API_BASE_ENV: &str = "ESGLENS_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Resolve the backend base URL from `ESGLENS_API_BASE`, trimming any
/// trailing slash so path joining stays uniform.
pub fn api_base() -> String {
    let raw = std::env::var(API_BASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&raw)
}

pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
