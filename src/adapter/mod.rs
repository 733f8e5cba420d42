//! Shape adapter between the backend's flat requisition record and the
//! form-friendly customer projection.
//!
//! The original client repeated this mapping inline at every call site;
//! it lives here exactly once. Both directions are pure: no I/O, no
//! validation. Malformed numeric input is silently treated as absent;
//! form validation belongs to the caller.

use crate::types::customer::{
    AgbadaMeasurements, Customer, CustomerMeasurements, TopsMeasurements, TrouserMeasurements,
};
use crate::types::requisition::{
    ContactInfo, CreateRequisitionData, Measurements, Requisition,
};

/// Project a backend requisition into the customer shape used by forms
///
/// Numeric measurements render as strings: integers without a fractional
/// part, anything else in minimal decimal form. Absent fields render as
/// the empty string. Dates are truncated to their date component.
pub fn to_customer(req: &Requisition) -> Customer {
    let m = &req.measurements;
    let contact = req.contact_info.clone().unwrap_or_default();

    Customer {
        id: req.id.clone(),
        name: req.name.clone(),
        email: contact.email.unwrap_or_default(),
        phone: contact.phone.unwrap_or_default(),
        date_of_order: date_portion(&req.created_at),
        date_of_collection: req.due_date.as_deref().map(date_portion).unwrap_or_default(),
        status: req.status,
        priority: req.priority,
        measurements: CustomerMeasurements {
            tops: TopsMeasurements {
                chest: format_field(m.chest),
                shoulders: format_field(m.shoulders),
                sleeve_length: format_field(m.sleeve_length_long),
                sleeve_length_short: format_field(m.sleeve_length_short),
                top_length: format_field(m.top_length),
                neck: format_field(m.neck),
                tommy: format_field(m.tommy),
                hip: format_field(m.hip),
            },
            trouser: TrouserMeasurements {
                waist: format_field(m.waist),
                length: format_field(m.length),
                lap: format_field(m.lap),
                hip: format_field(m.hip),
                base: format_field(m.base),
            },
            agbada: AgbadaMeasurements {
                length: format_field(m.agbada_length),
                sleeve: format_field(m.agbada_sleeve),
            },
        },
        notes: req.description.clone().unwrap_or_default(),
        created_at: req.created_at.clone(),
    }
}

/// Collapse a customer back into the backend's create/replace payload
///
/// Blank or unparsable measurement strings become absent fields, never
/// zero. An explicit `"0"` becomes the number 0.
pub fn to_requisition_input(customer: &Customer) -> CreateRequisitionData {
    let tops = &customer.measurements.tops;
    let trouser = &customer.measurements.trouser;
    let agbada = &customer.measurements.agbada;

    CreateRequisitionData {
        name: customer.name.clone(),
        description: non_empty(&customer.notes),
        measurements: Measurements {
            chest: parse_field(&tops.chest),
            shoulders: parse_field(&tops.shoulders),
            sleeve_length_long: parse_field(&tops.sleeve_length),
            sleeve_length_short: parse_field(&tops.sleeve_length_short),
            top_length: parse_field(&tops.top_length),
            neck: parse_field(&tops.neck),
            tommy: parse_field(&tops.tommy),
            // hip is shown in both groups; the tops copy is authoritative
            hip: parse_field(&tops.hip),
            waist: parse_field(&trouser.waist),
            length: parse_field(&trouser.length),
            lap: parse_field(&trouser.lap),
            base: parse_field(&trouser.base),
            agbada_length: parse_field(&agbada.length),
            agbada_sleeve: parse_field(&agbada.sleeve),
        },
        contact_info: contact_info(&customer.email, &customer.phone),
        status: customer.status,
        priority: customer.priority,
        due_date: non_empty(&customer.date_of_collection),
    }
}

/// Format an optional measurement for form display
///
/// Rust's `f64` Display already renders integers without a fractional
/// part and everything else in shortest form, so `Some(42.0)` becomes
/// `"42"` and `Some(36.5)` becomes `"36.5"`.
fn format_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Parse a form measurement string
///
/// Blank input and anything that does not parse as a finite number map to
/// `None`: absent, not zero.
fn parse_field(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Everything before the `T` of an ISO datetime
fn date_portion(datetime: &str) -> String {
    datetime.split('T').next().unwrap_or_default().to_string()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn contact_info(email: &str, phone: &str) -> Option<ContactInfo> {
    if email.is_empty() && phone.is_empty() {
        return None;
    }
    Some(ContactInfo {
        email: non_empty(email),
        phone: non_empty(phone),
    })
}
