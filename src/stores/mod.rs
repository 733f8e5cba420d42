// Stores layer - client-side caches orchestrating the gateway

pub mod requisition_store;
pub mod session_store;

pub use requisition_store::RequisitionStore;
pub use session_store::SessionStore;
