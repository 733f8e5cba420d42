use thiserror::Error;

use super::gateway::GatewayError;

/// Session store failures
///
/// A 401 from the login endpoint surfaces as `InvalidCredentials`, never
/// as a forced logout; forced session clearing only applies to
/// authenticated endpoints.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid email or password. Please check your credentials.")]
    InvalidCredentials,

    #[error("Login failed: {0}")]
    Login(#[source] GatewayError),

    #[error("Registration failed: {0}")]
    Register(#[source] GatewayError),

    #[error("Failed to fetch profile: {0}")]
    ProfileFetch(#[source] GatewayError),

    #[error("Failed to update profile: {0}")]
    ProfileUpdate(#[source] GatewayError),

    #[error("Failed to delete profile: {0}")]
    ProfileDelete(#[source] GatewayError),

    #[error("Failed to persist session token: {0}")]
    TokenStorage(#[from] std::io::Error),
}
