//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point the probe at different servers, only edit this file
//! or set the corresponding environment variables.

/// Default Plumber manual-transmission endpoint
///
/// This is the fallback URL when no environment variable is set.
/// The containerized Plumber API serves on port 8000 by default.
pub const DEFAULT_PLUMBER_ENDPOINT: &str = "http://localhost:8000/manual-transmission";

/// Default Machine Learning Server base URL
///
/// The operationalization endpoint listens on port 12800 by default.
pub const DEFAULT_MLS_URL: &str = "http://localhost:12800";

/// Default Machine Learning Server username
pub const DEFAULT_MLS_USER: &str = "admin";

/// Default Machine Learning Server password
pub const DEFAULT_MLS_PASSWORD: &str = "change-me-locally";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get Plumber endpoint URL from environment or use default
pub fn get_plumber_endpoint() -> String {
    std::env::var("PLUMBER_ENDPOINT").unwrap_or_else(|_| DEFAULT_PLUMBER_ENDPOINT.to_string())
}

/// Get Machine Learning Server URL from environment or use default
pub fn get_mls_url() -> String {
    std::env::var("MLS_URL").unwrap_or_else(|_| DEFAULT_MLS_URL.to_string())
}

/// Get Machine Learning Server username from environment or use default
pub fn get_mls_user() -> String {
    std::env::var("MLS_USER").unwrap_or_else(|_| DEFAULT_MLS_USER.to_string())
}

/// Get Machine Learning Server password from environment or use default
pub fn get_mls_password() -> String {
    std::env::var("MLS_PASSWORD").unwrap_or_else(|_| DEFAULT_MLS_PASSWORD.to_string())
}
