// Types layer - wire records and their UI-facing projections

pub mod customer;
pub mod requisition;
pub mod user;
pub mod wire;

pub use customer::{Customer, CustomerMeasurements};
pub use requisition::{
    ContactInfo, CreateRequisitionData, Measurements, Priority, Requisition, RequisitionQuery,
    Status,
};
pub use user::{LoginData, RegisterData, UpdateProfileData, User};
