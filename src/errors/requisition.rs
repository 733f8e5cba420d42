use thiserror::Error;

use super::gateway::GatewayError;

/// Requisition store failures, one variant per operation kind
#[derive(Error, Debug)]
pub enum RequisitionError {
    #[error("Failed to fetch requisitions: {0}")]
    Fetch(#[source] GatewayError),

    #[error("Failed to create requisition: {0}")]
    Create(#[source] GatewayError),

    #[error("Failed to update requisition {id}: {source}")]
    Update {
        id: String,
        #[source]
        source: GatewayError,
    },

    #[error("Failed to delete requisition {id}: {source}")]
    Delete {
        id: String,
        #[source]
        source: GatewayError,
    },
}

impl RequisitionError {
    /// The underlying gateway failure
    pub fn gateway(&self) -> &GatewayError {
        match self {
            Self::Fetch(e) | Self::Create(e) => e,
            Self::Update { source, .. } | Self::Delete { source, .. } => source,
        }
    }
}
