use serde::Deserialize;

use super::requisition::Requisition;
use super::user::User;

/// Response envelope shared by every backend endpoint
///
/// `{status, message?, data?, results?, errors?}` where `data` wraps the
/// resource under its own key (`user`, `requisition`, `requisitions`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    // "Option::default" keeps serde from demanding T: Default
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub results: Option<u64>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

/// Per-field validation error from the envelope's `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub user: User,
}

/// Login/register payload: the account plus its session credential
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequisitionPayload {
    pub requisition: Requisition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequisitionListPayload {
    #[serde(default)]
    pub requisitions: Vec<Requisition>,
}
