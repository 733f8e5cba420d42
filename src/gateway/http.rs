use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::auth::TokenCache;
use crate::config::Settings;
use crate::errors::GatewayError;
use crate::types::wire::ApiEnvelope;

/// HTTP implementation of the gateway traits over `reqwest`
///
/// Owns the bearer-token injection and the translation of transport and
/// HTTP failures into [`GatewayError`]. Endpoint methods live in the
/// per-resource modules beside this one.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
    tokens: Arc<dyn TokenCache>,
}

impl HttpGateway {
    /// Build a gateway from settings, sharing the token cache with the
    /// session store
    pub fn new(settings: &Settings, tokens: Arc<dyn TokenCache>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Connection {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            timeout_secs: settings.request_timeout_secs,
            tokens,
        })
    }

    pub(super) fn client(&self) -> &reqwest::Client {
        &self.http
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the response envelope
    ///
    /// When `authenticated` is set, the persisted bearer token (if any) is
    /// attached, and a 401 response clears the token cache: an invalid
    /// credential cannot self-correct, so keeping it would only loop.
    /// Login/register pass `authenticated = false` and a 401 there leaves
    /// the cache untouched.
    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        authenticated: bool,
        resource: &str,
    ) -> Result<ApiEnvelope<T>, GatewayError> {
        let builder = if authenticated {
            match self.tokens.get() {
                Some(token) => builder.bearer_auth(token),
                None => builder,
            }
        } else {
            builder
        };

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;

        if (200..300).contains(&status) {
            // Deletes answer 204 with no body; synthesize an empty envelope
            if body.trim().is_empty() {
                return Ok(ApiEnvelope {
                    status: "success".to_string(),
                    message: None,
                    data: None,
                    results: None,
                    errors: None,
                });
            }
            return serde_json::from_str(&body).map_err(|e| {
                GatewayError::decode(format!("{} response did not match envelope: {}", resource, e))
            });
        }

        if authenticated && status == 401 {
            tracing::warn!("Received 401 on an authenticated endpoint, clearing session token");
            self.tokens.clear();
        }

        Err(classify_status(status, &body, resource))
    }

    /// Unwrap the `data` field of a successful envelope
    ///
    /// A success response without data breaks the envelope contract.
    pub(super) fn expect_data<T>(
        envelope: ApiEnvelope<T>,
        resource: &str,
    ) -> Result<T, GatewayError> {
        envelope.data.ok_or_else(|| {
            GatewayError::decode(format!("success response carried no {} data", resource))
        })
    }
}

/// Map a reqwest failure to the transport side of the error taxonomy
///
/// Timeouts and unreachable servers need different user-facing messages
/// because remediation differs.
fn transport_error(error: &reqwest::Error, timeout_secs: u64) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout {
            seconds: timeout_secs,
        }
    } else {
        GatewayError::Connection {
            message: error.to_string(),
        }
    }
}

/// Map a non-success HTTP status plus its (possibly enveloped) body to a
/// domain error
fn classify_status(status: u16, body: &str, resource: &str) -> GatewayError {
    let envelope: Option<ApiEnvelope<serde_json::Value>> = serde_json::from_str(body).ok();
    let message = envelope
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| "no details provided".to_string());

    match status {
        401 => GatewayError::Unauthorized,
        403 => GatewayError::Forbidden,
        400 | 422 => GatewayError::Validation {
            message,
            field_errors: envelope.and_then(|e| e.errors).unwrap_or_default(),
        },
        404 => GatewayError::NotFound {
            resource: resource.to_string(),
        },
        500..=599 => GatewayError::Server { status, message },
        _ => GatewayError::Unexpected { status, message },
    }
}
