use std::sync::Arc;

use crate::auth::{FileTokenCache, TokenCache};
use crate::config::Settings;
use crate::errors::GatewayError;
use crate::gateway::HttpGateway;
use crate::stores::{RequisitionStore, SessionStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main and shared across CLI handlers:
///
/// ```text
/// main
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   ├─ tokens (Arc<dyn TokenCache>, file-backed)
///   ├─ gateway (Arc<HttpGateway>, shares the token cache)
///   ├─ requisitions (Arc<RequisitionStore>)
///   └─ session (Arc<SessionStore>)
/// ```
///
/// The token cache is shared between the gateway (which attaches and, on
/// a 401, clears the credential) and the session store (which persists it
/// on login and clears it on logout).
pub struct AppData {
    pub settings: Settings,
    pub tokens: Arc<dyn TokenCache>,
    pub gateway: Arc<HttpGateway>,
    pub requisitions: Arc<RequisitionStore>,
    pub session: Arc<SessionStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the HTTP client cannot be built.
    pub fn init(settings: Settings) -> Result<Self, GatewayError> {
        tracing::debug!(base_url = %settings.api_base_url, "Initializing AppData");

        let tokens: Arc<dyn TokenCache> =
            Arc::new(FileTokenCache::new(settings.token_file.clone()));

        let gateway = Arc::new(HttpGateway::new(&settings, tokens.clone())?);

        let requisitions = Arc::new(RequisitionStore::new(gateway.clone()));
        let session = Arc::new(SessionStore::new(gateway.clone(), tokens.clone()));

        Ok(Self {
            settings,
            tokens,
            gateway,
            requisitions,
            session,
        })
    }
}
