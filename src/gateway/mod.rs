// Gateway layer - typed CRUD calls against the REST backend

pub mod http;

mod auth;
mod requisitions;

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::types::requisition::{CreateRequisitionData, Requisition, RequisitionQuery};
use crate::types::user::{LoginData, RegisterData, UpdateProfileData, User};

pub use http::HttpGateway;

/// A freshly authenticated account and its session credential
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Account endpoints of the backend
///
/// Login and register are unauthenticated; the profile endpoints carry
/// the bearer token. Object-safe so stores can be tested against
/// scripted implementations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, data: &RegisterData) -> Result<AuthSession, GatewayError>;
    async fn login(&self, data: &LoginData) -> Result<AuthSession, GatewayError>;
    async fn fetch_profile(&self) -> Result<User, GatewayError>;
    async fn update_profile(&self, data: &UpdateProfileData) -> Result<User, GatewayError>;
    async fn delete_profile(&self) -> Result<(), GatewayError>;
}

/// Requisition endpoints of the backend
///
/// Updates are full-record replacements sent with PUT, consistently;
/// a failed PUT is a real error, never a cue to retry with another verb.
#[async_trait]
pub trait RequisitionApi: Send + Sync {
    async fn list(&self, query: &RequisitionQuery) -> Result<Vec<Requisition>, GatewayError>;
    async fn fetch(&self, id: &str) -> Result<Requisition, GatewayError>;
    async fn create(&self, data: &CreateRequisitionData) -> Result<Requisition, GatewayError>;
    async fn update(
        &self,
        id: &str,
        data: &CreateRequisitionData,
    ) -> Result<Requisition, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
