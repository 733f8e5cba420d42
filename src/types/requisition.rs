use serde::{Deserialize, Serialize};

/// Order status as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Order priority as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Flat measurement record as the backend stores it
///
/// Every field is optional: absent means "not taken", which is distinct
/// from an explicit zero. Absent fields are omitted from the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulders: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve_length_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve_length_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tommy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agbada_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agbada_sleeve: Option<f64>,
}

/// Contact details attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Backend-authoritative order record
///
/// `id` and the timestamps are server-assigned. Missing status/priority
/// decode to their defaults (PENDING / MEDIUM); this is the single place
/// those defaults are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating or replacing a requisition
///
/// Updates are full-record replacements sent with PUT; there are no
/// partial-field patch semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequisitionData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Filter/sort/paging parameters for the requisition list endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_and_priority_decode_to_defaults() {
        let json = r#"{
            "id": "abc",
            "name": "Ada",
            "createdAt": "2024-01-05T10:00:00Z",
            "updatedAt": "2024-01-05T10:00:00Z"
        }"#;
        let req: Requisition = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, Status::Pending);
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.measurements, Measurements::default());
        assert!(req.contact_info.is_none());
    }

    #[test]
    fn legacy_underscore_id_is_accepted() {
        let json = r#"{
            "_id": "legacy-1",
            "name": "Ada",
            "createdAt": "2024-01-05T10:00:00Z",
            "updatedAt": "2024-01-05T10:00:00Z"
        }"#;
        let req: Requisition = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, "legacy-1");
    }

    #[test]
    fn absent_measurements_are_omitted_from_the_wire() {
        let m = Measurements {
            chest: Some(40.0),
            ..Measurements::default()
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({ "chest": 40.0 }));
    }

    #[test]
    fn enums_use_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&Priority::Urgent).unwrap(),
            "\"URGENT\""
        );
    }
}
