use async_trait::async_trait;

use super::{AuthApi, AuthSession, HttpGateway};
use crate::errors::GatewayError;
use crate::types::user::{LoginData, RegisterData, UpdateProfileData, User};
use crate::types::wire::{AuthPayload, UserPayload};

const RESOURCE: &str = "user";

#[async_trait]
impl AuthApi for HttpGateway {
    async fn register(&self, data: &RegisterData) -> Result<AuthSession, GatewayError> {
        tracing::debug!("POST /api/auth/register");
        let builder = self
            .client()
            .post(self.url("/api/auth/register"))
            .json(data);
        let envelope = self.send::<AuthPayload>(builder, false, RESOURCE).await?;
        let payload = Self::expect_data(envelope, RESOURCE)?;
        Ok(AuthSession {
            user: payload.user,
            token: payload.token,
        })
    }

    async fn login(&self, data: &LoginData) -> Result<AuthSession, GatewayError> {
        tracing::debug!("POST /api/auth/login");
        // The backend matches on the exact address, so strip stray whitespace
        let credentials = LoginData {
            email: data.email.trim().to_string(),
            password: data.password.clone(),
        };
        let builder = self
            .client()
            .post(self.url("/api/auth/login"))
            .json(&credentials);
        let envelope = self.send::<AuthPayload>(builder, false, RESOURCE).await?;
        let payload = Self::expect_data(envelope, RESOURCE)?;
        Ok(AuthSession {
            user: payload.user,
            token: payload.token,
        })
    }

    async fn fetch_profile(&self) -> Result<User, GatewayError> {
        tracing::debug!("GET /api/auth/profile");
        let builder = self.client().get(self.url("/api/auth/profile"));
        let envelope = self.send::<UserPayload>(builder, true, RESOURCE).await?;
        Ok(Self::expect_data(envelope, RESOURCE)?.user)
    }

    async fn update_profile(&self, data: &UpdateProfileData) -> Result<User, GatewayError> {
        tracing::debug!("PUT /api/auth/profile");
        let builder = self.client().put(self.url("/api/auth/profile")).json(data);
        let envelope = self.send::<UserPayload>(builder, true, RESOURCE).await?;
        Ok(Self::expect_data(envelope, RESOURCE)?.user)
    }

    async fn delete_profile(&self) -> Result<(), GatewayError> {
        tracing::debug!("DELETE /api/auth/profile");
        let builder = self.client().delete(self.url("/api/auth/profile"));
        self.send::<serde_json::Value>(builder, true, RESOURCE)
            .await?;
        Ok(())
    }
}
