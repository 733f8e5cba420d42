// Integration tests exercising the shape adapter through the public API

use tailordesk::adapter;
use tailordesk::types::customer::Customer;
use tailordesk::types::requisition::{
    ContactInfo, Measurements, Priority, Requisition, Status,
};

fn requisition(name: &str) -> Requisition {
    Requisition {
        id: format!("req-{}", name.to_lowercase()),
        name: name.to_string(),
        description: None,
        measurements: Measurements::default(),
        contact_info: None,
        status: Status::Pending,
        priority: Priority::Medium,
        due_date: None,
        created_at: "2024-03-10T08:15:00Z".to_string(),
        updated_at: "2024-03-10T08:15:00Z".to_string(),
    }
}

#[test]
fn edit_flow_preserves_untouched_fields() {
    // Fetch → project to form → edit one field → collapse back.
    let mut req = requisition("Bisi");
    req.measurements.chest = Some(38.5);
    req.measurements.waist = Some(30.0);
    req.contact_info = Some(ContactInfo {
        email: Some("bisi@example.com".to_string()),
        phone: Some("08012345678".to_string()),
    });
    req.status = Status::InProgress;
    req.priority = Priority::Urgent;
    req.due_date = Some("2024-04-01T00:00:00Z".to_string());

    let mut customer = adapter::to_customer(&req);
    customer.measurements.trouser.waist = "31".to_string();

    let input = adapter::to_requisition_input(&customer);
    assert_eq!(input.measurements.chest, Some(38.5));
    assert_eq!(input.measurements.waist, Some(31.0));
    assert_eq!(input.contact_info, req.contact_info);
    assert_eq!(input.status, Status::InProgress);
    assert_eq!(input.priority, Priority::Urgent);
    assert_eq!(input.due_date.as_deref(), Some("2024-04-01"));
}

#[test]
fn clearing_a_measurement_in_the_form_removes_it_from_the_payload() {
    let mut req = requisition("Chidi");
    req.measurements.neck = Some(15.0);

    let mut customer = adapter::to_customer(&req);
    assert_eq!(customer.measurements.tops.neck, "15");
    customer.measurements.tops.neck.clear();

    let input = adapter::to_requisition_input(&customer);
    assert_eq!(input.measurements.neck, None);
}

#[test]
fn form_only_customer_collapses_to_a_minimal_payload() {
    // A brand-new intake with only a name: no contact block, no
    // description, no due date, defaults for status and priority.
    let customer = Customer {
        name: "Dayo".to_string(),
        ..Customer::default()
    };

    let input = adapter::to_requisition_input(&customer);
    assert_eq!(input.name, "Dayo");
    assert_eq!(input.description, None);
    assert_eq!(input.contact_info, None);
    assert_eq!(input.due_date, None);
    assert_eq!(input.status, Status::Pending);
    assert_eq!(input.priority, Priority::Medium);
    assert_eq!(input.measurements, Measurements::default());
}

#[test]
fn wire_payload_omits_absent_measurements() {
    let mut customer = Customer {
        name: "Efe".to_string(),
        ..Customer::default()
    };
    customer.measurements.tops.chest = "40".to_string();

    let input = adapter::to_requisition_input(&customer);
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["measurements"], serde_json::json!({ "chest": 40.0 }));
}
