// Errors layer - per-domain error type definitions

pub mod gateway;
pub mod requisition;
pub mod session;

// Re-exports for convenience
pub use gateway::GatewayError;
pub use requisition::RequisitionError;
pub use session::SessionError;
