//! API base URL resolution
//!
//! A build can pin the backend with `GESTION_API_BASE=https://api.example.com`;
//! otherwise the backend is expected on port 3000 of the host serving the app.

/// Compile-time override for the backend origin
const API_BASE_OVERRIDE: Option<&str> = option_env!("GESTION_API_BASE");

/// Port the backend listens on when no override is given
pub const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - `GESTION_API_BASE` if it was set at build time
/// - otherwise `"{protocol}//{hostname}:3000"` from the current window location
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_for(&protocol, &hostname)
}

fn origin_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// `{endpoint}/{id}`
pub fn record_path(endpoint: &str, id: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), id)
}

/// `{endpoint}/{id}/delete`
pub fn delete_path(endpoint: &str, id: &str) -> String {
    format!("{}/delete", record_path(endpoint, id))
}
