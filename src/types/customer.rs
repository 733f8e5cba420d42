use serde::{Deserialize, Serialize};

use super::requisition::{Priority, Status};

/// Upper-body measurements as the intake form captures them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopsMeasurements {
    pub chest: String,
    pub shoulders: String,
    pub sleeve_length: String,
    pub sleeve_length_short: String,
    pub top_length: String,
    pub neck: String,
    pub tommy: String,
    pub hip: String,
}

/// Trouser measurements as the intake form captures them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrouserMeasurements {
    pub waist: String,
    pub length: String,
    pub lap: String,
    pub hip: String,
    pub base: String,
}

/// Agbada measurements as the intake form captures them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgbadaMeasurements {
    pub length: String,
    pub sleeve: String,
}

/// Measurements regrouped by garment category
///
/// All values are strings in form representation; an empty string means
/// "unset". The hip measurement is projected into both the tops and the
/// trouser group; the reverse mapping reads the tops copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerMeasurements {
    pub tops: TopsMeasurements,
    pub trouser: TrouserMeasurements,
    pub agbada: AgbadaMeasurements,
}

/// Form-friendly projection of a [`Requisition`](super::Requisition)
///
/// Always recomputed from the authoritative requisition list via the shape
/// adapter; never mutated independently and written back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_order: String,
    pub date_of_collection: String,
    pub status: Status,
    pub priority: Priority,
    pub measurements: CustomerMeasurements,
    pub notes: String,
    pub created_at: String,
}
