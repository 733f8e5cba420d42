use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::auth::TokenCache;
use crate::errors::{GatewayError, SessionError};
use crate::gateway::AuthApi;
use crate::types::user::{LoginData, RegisterData, UpdateProfileData, User};

/// How long a persisted session credential stays valid client-side
const SESSION_TTL_DAYS: i64 = 7;

/// Tracks at most one authenticated identity
///
/// Constructed once per application instance and shared by reference.
/// Every state transition is driven by a gateway response; there is no
/// client-only way to become authenticated.
pub struct SessionStore {
    gateway: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenCache>,
    user: Mutex<Option<User>>,
    // In-flight counters per operation kind; busy means count > 0
    logging_in: AtomicU64,
    registering: AtomicU64,
    updating_profile: AtomicU64,
    loading_user: AtomicU64,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn AuthApi>, tokens: Arc<dyn TokenCache>) -> Self {
        Self {
            gateway,
            tokens,
            user: Mutex::new(None),
            logging_in: AtomicU64::new(0),
            registering: AtomicU64::new(0),
            updating_profile: AtomicU64::new(0),
            loading_user: AtomicU64::new(0),
        }
    }

    /// Authenticate and persist the session credential
    ///
    /// On failure the current identity is left untouched; a 401 from the
    /// login endpoint means wrong credentials, never a forced logout.
    pub async fn login(&self, credentials: &LoginData) -> Result<User, SessionError> {
        self.logging_in.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.login(credentials).await;
        self.logging_in.fetch_sub(1, Ordering::SeqCst);

        let session = result.map_err(|e| match e {
            GatewayError::Unauthorized => SessionError::InvalidCredentials,
            other => SessionError::Login(other),
        })?;

        self.tokens.store(&session.token, SESSION_TTL_DAYS)?;
        *self.user.lock().unwrap() = Some(session.user.clone());
        tracing::info!(user = %session.user.name, "Logged in");
        Ok(session.user)
    }

    /// Create an account; the new identity becomes current immediately
    pub async fn register(&self, data: &RegisterData) -> Result<User, SessionError> {
        self.registering.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.register(data).await;
        self.registering.fetch_sub(1, Ordering::SeqCst);

        let session = result.map_err(SessionError::Register)?;

        self.tokens.store(&session.token, SESSION_TTL_DAYS)?;
        *self.user.lock().unwrap() = Some(session.user.clone());
        tracing::info!(user = %session.user.name, "Registered and logged in");
        Ok(session.user)
    }

    /// Clear the identity and the persisted credential; never fails
    pub fn logout(&self) {
        self.tokens.clear();
        *self.user.lock().unwrap() = None;
        tracing::info!("Logged out");
    }

    /// Silent session resume on startup
    ///
    /// Without a persisted credential this resolves to `None` with no
    /// network call. An authorization failure clears the dead credential
    /// and yields `None`; transport or server failures propagate and
    /// clear nothing, since they may well self-correct.
    pub async fn fetch_current(&self) -> Result<Option<User>, SessionError> {
        if self.tokens.get().is_none() {
            return Ok(None);
        }

        self.loading_user.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.fetch_profile().await;
        self.loading_user.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(user) => {
                *self.user.lock().unwrap() = Some(user.clone());
                Ok(Some(user))
            }
            Err(GatewayError::Unauthorized) => {
                tracing::warn!("Persisted session is no longer valid, clearing it");
                self.tokens.clear();
                *self.user.lock().unwrap() = None;
                Ok(None)
            }
            Err(other) => Err(SessionError::ProfileFetch(other)),
        }
    }

    /// Replace the identity with the server-returned updated record
    pub async fn update_profile(&self, data: &UpdateProfileData) -> Result<User, SessionError> {
        self.updating_profile.fetch_add(1, Ordering::SeqCst);
        let result = self.gateway.update_profile(data).await;
        self.updating_profile.fetch_sub(1, Ordering::SeqCst);

        let user = result.map_err(SessionError::ProfileUpdate)?;
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    /// Delete the account server-side; implies logout
    pub async fn delete_profile(&self) -> Result<(), SessionError> {
        self.gateway
            .delete_profile()
            .await
            .map_err(SessionError::ProfileDelete)?;
        self.logout();
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.lock().unwrap().is_some()
    }

    pub fn is_logging_in(&self) -> bool {
        self.logging_in.load(Ordering::SeqCst) > 0
    }

    pub fn is_registering(&self) -> bool {
        self.registering.load(Ordering::SeqCst) > 0
    }

    pub fn is_updating_profile(&self) -> bool {
        self.updating_profile.load(Ordering::SeqCst) > 0
    }

    pub fn is_loading_user(&self) -> bool {
        self.loading_user.load(Ordering::SeqCst) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenCache;
    use crate::gateway::AuthSession;
    use crate::test::utils::{user_named, ScriptedAuthApi};

    fn session_with(
        gateway: ScriptedAuthApi,
    ) -> (SessionStore, Arc<MemoryTokenCache>) {
        let tokens = Arc::new(MemoryTokenCache::new());
        let store = SessionStore::new(Arc::new(gateway), tokens.clone());
        (store, tokens)
    }

    fn credentials() -> LoginData {
        LoginData {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn login_sets_identity_and_persists_the_token() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Ok(AuthSession {
            user: user_named("u1", "Ada"),
            token: "tok-abc".to_string(),
        }));
        let (store, tokens) = session_with(gateway);

        let user = store.login(&credentials()).await.unwrap();

        assert_eq!(user.id, "u1");
        assert!(store.is_authenticated());
        assert_eq!(tokens.get(), Some("tok-abc".to_string()));
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_anonymous_without_forced_logout() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Err(GatewayError::Unauthorized));
        let (store, tokens) = session_with(gateway);

        let err = store.login(&credentials()).await.unwrap_err();

        assert!(matches!(err, SessionError::InvalidCredentials));
        assert!(!store.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn failed_login_leaves_an_existing_identity_untouched() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Ok(AuthSession {
            user: user_named("u1", "Ada"),
            token: "tok-abc".to_string(),
        }));
        gateway.script_login(Err(GatewayError::Server {
            status: 500,
            message: "boom".to_string(),
        }));
        let (store, _tokens) = session_with(gateway);

        store.login(&credentials()).await.unwrap();
        let err = store.login(&credentials()).await.unwrap_err();

        assert!(matches!(err, SessionError::Login(_)));
        assert_eq!(store.current_user().unwrap().id, "u1");
    }

    #[tokio::test]
    async fn register_makes_the_new_identity_current_immediately() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_register(Ok(AuthSession {
            user: user_named("u2", "Bisi"),
            token: "tok-new".to_string(),
        }));
        let (store, tokens) = session_with(gateway);

        let data = RegisterData {
            name: "Bisi".to_string(),
            email: Some("bisi@example.com".to_string()),
            phone: None,
            password: "hunter2".to_string(),
        };
        store.register(&data).await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(tokens.get(), Some("tok-new".to_string()));
    }

    #[tokio::test]
    async fn fetch_current_without_a_token_makes_no_network_call() {
        let gateway = ScriptedAuthApi::new();
        // Nothing scripted: a profile call would panic
        let (store, _tokens) = session_with(gateway);

        assert!(store.fetch_current().await.unwrap().is_none());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn unauthorized_resume_clears_token_and_identity() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_fetch_profile(Err(GatewayError::Unauthorized));
        let (store, tokens) = session_with(gateway);
        tokens.store("tok-stale", 7).unwrap();

        let resumed = store.fetch_current().await.unwrap();

        assert!(resumed.is_none());
        assert!(!store.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn transport_failure_on_resume_clears_nothing() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_fetch_profile(Err(GatewayError::Timeout { seconds: 30 }));
        let (store, tokens) = session_with(gateway);
        tokens.store("tok-live", 7).unwrap();

        let err = store.fetch_current().await.unwrap_err();

        assert!(matches!(err, SessionError::ProfileFetch(_)));
        assert_eq!(tokens.get(), Some("tok-live".to_string()));
    }

    #[tokio::test]
    async fn update_profile_replaces_identity_only_on_success() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Ok(AuthSession {
            user: user_named("u1", "Ada"),
            token: "tok".to_string(),
        }));
        gateway.script_update_profile(Ok(user_named("u1", "Adaeze")));
        gateway.script_update_profile(Err(GatewayError::Validation {
            message: "bad email".to_string(),
            field_errors: vec![],
        }));
        let (store, _tokens) = session_with(gateway);
        store.login(&credentials()).await.unwrap();

        let data = UpdateProfileData {
            name: Some("Adaeze".to_string()),
            ..UpdateProfileData::default()
        };
        store.update_profile(&data).await.unwrap();
        assert_eq!(store.current_user().unwrap().name, "Adaeze");

        store.update_profile(&data).await.unwrap_err();
        assert_eq!(store.current_user().unwrap().name, "Adaeze");
    }

    #[tokio::test]
    async fn logout_clears_everything_unconditionally() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Ok(AuthSession {
            user: user_named("u1", "Ada"),
            token: "tok".to_string(),
        }));
        let (store, tokens) = session_with(gateway);
        store.login(&credentials()).await.unwrap();

        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn delete_profile_implies_logout() {
        let gateway = ScriptedAuthApi::new();
        gateway.script_login(Ok(AuthSession {
            user: user_named("u1", "Ada"),
            token: "tok".to_string(),
        }));
        gateway.script_delete_profile(Ok(()));
        let (store, tokens) = session_with(gateway);
        store.login(&credentials()).await.unwrap();

        store.delete_profile().await.unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(tokens.get(), None);
    }
}
