use std::env;
use std::path::PathBuf;

/// Client configuration loaded from the environment
///
/// The backend base URL is externally configured; everything else has a
/// sensible default for local development.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the REST backend, without a trailing slash
    pub api_base_url: String,
    /// Per-request deadline in seconds
    pub request_timeout_secs: u64,
    /// Where the session token is persisted between runs
    pub token_file: PathBuf,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let token_file = env::var("TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".tailordesk/session.json"));

        Self {
            api_base_url,
            request_timeout_secs,
            token_file,
        }
    }
}
