use super::OrderCommands;
use crate::adapter;
use crate::app_data::AppData;
use crate::errors::RequisitionError;
use crate::gateway::RequisitionApi;
use crate::stats::OrderStats;
use crate::types::customer::{Customer, CustomerMeasurements};
use crate::types::requisition::{Priority, Requisition, RequisitionQuery, Status};

pub async fn execute(
    command: OrderCommands,
    app_data: &AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    super::auth::require_session(&app_data.session).await?;

    match command {
        OrderCommands::List {
            status,
            priority,
            page,
            limit,
            sort,
        } => {
            let query = RequisitionQuery {
                status: status.as_deref().map(parse_status).transpose()?,
                priority: priority.as_deref().map(parse_priority).transpose()?,
                page,
                limit,
                sort,
            };
            let requisitions = app_data.requisitions.fetch_all(&query).await?;
            print_order_lines(&requisitions);
        }

        OrderCommands::Show { id } => {
            let requisition = app_data.gateway.fetch(&id).await?;
            print_order(&adapter::to_customer(&requisition));
        }

        OrderCommands::Create {
            name,
            email,
            phone,
            due_date,
            status,
            priority,
            notes,
            measures,
        } => {
            let customer = Customer {
                name,
                email: email.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                date_of_collection: due_date.unwrap_or_default(),
                status: status.as_deref().map(parse_status).transpose()?.unwrap_or_default(),
                priority: priority
                    .as_deref()
                    .map(parse_priority)
                    .transpose()?
                    .unwrap_or_default(),
                notes: notes.unwrap_or_default(),
                measurements: parse_measures(&measures)?,
                ..Customer::default()
            };
            let created = app_data
                .requisitions
                .create(&adapter::to_requisition_input(&customer))
                .await?;
            println!("Created order {} for {}.", created.id, created.name);
        }

        OrderCommands::Update {
            id,
            name,
            email,
            phone,
            due_date,
            status,
            priority,
            notes,
            measures,
        } => {
            // Start from the current record so unset flags keep their values
            let current = app_data.gateway.fetch(&id).await?;
            let mut customer = adapter::to_customer(&current);
            if let Some(name) = name {
                customer.name = name;
            }
            if let Some(email) = email {
                customer.email = email;
            }
            if let Some(phone) = phone {
                customer.phone = phone;
            }
            if let Some(due_date) = due_date {
                customer.date_of_collection = due_date;
            }
            if let Some(status) = status {
                customer.status = parse_status(&status)?;
            }
            if let Some(priority) = priority {
                customer.priority = parse_priority(&priority)?;
            }
            if let Some(notes) = notes {
                customer.notes = notes;
            }
            apply_measures(&mut customer.measurements, &measures)?;

            let input = adapter::to_requisition_input(&customer);
            match app_data.requisitions.update(&id, &input).await {
                Ok(updated) => println!("Updated order {}.", updated.id),
                Err(e) => return refresh_on_missing(app_data, e).await,
            }
        }

        OrderCommands::Delete { id } => {
            if let Err(e) = app_data.requisitions.delete(&id).await {
                return refresh_on_missing(app_data, e).await;
            }
            println!("Deleted order {}.", id);
        }
    }

    Ok(())
}

pub async fn stats(app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    super::auth::require_session(&app_data.session).await?;

    let requisitions = app_data
        .requisitions
        .fetch_all(&RequisitionQuery::default())
        .await?;
    let stats = OrderStats::from_requisitions(&requisitions);

    println!("Total customers:  {}", stats.total);
    println!("Pending:          {}", stats.pending);
    println!("In progress:      {}", stats.in_progress);
    println!("Completed:        {}", stats.completed);
    println!("Cancelled:        {}", stats.cancelled);
    Ok(())
}

/// A missing record means it was deleted elsewhere; refresh the list
/// instead of suggesting a blind retry
async fn refresh_on_missing(
    app_data: &AppData,
    error: RequisitionError,
) -> Result<(), Box<dyn std::error::Error>> {
    if error.gateway().is_not_found() {
        eprintln!("{}", error);
        eprintln!("Refreshing the order list...");
        let requisitions = app_data
            .requisitions
            .fetch_all(&RequisitionQuery::default())
            .await?;
        print_order_lines(&requisitions);
        return Ok(());
    }
    Err(error.into())
}

fn print_order_lines(requisitions: &[Requisition]) {
    if requisitions.is_empty() {
        println!("No orders found.");
        return;
    }
    for customer in requisitions.iter().map(adapter::to_customer) {
        println!(
            "{}  {:<20} {:<12} {:<8} ordered {}  due {}",
            customer.id,
            customer.name,
            status_label(customer.status),
            priority_label(customer.priority),
            customer.date_of_order,
            if customer.date_of_collection.is_empty() {
                "-"
            } else {
                &customer.date_of_collection
            },
        );
    }
}

fn print_order(customer: &Customer) {
    println!("{} ({})", customer.name, customer.id);
    println!("  status:   {}", status_label(customer.status));
    println!("  priority: {}", priority_label(customer.priority));
    if !customer.email.is_empty() {
        println!("  email:    {}", customer.email);
    }
    if !customer.phone.is_empty() {
        println!("  phone:    {}", customer.phone);
    }
    println!("  ordered:  {}", customer.date_of_order);
    if !customer.date_of_collection.is_empty() {
        println!("  due:      {}", customer.date_of_collection);
    }
    if !customer.notes.is_empty() {
        println!("  notes:    {}", customer.notes);
    }

    let m = &customer.measurements;
    let groups: [(&str, Vec<(&str, &str)>); 3] = [
        (
            "tops",
            vec![
                ("chest", m.tops.chest.as_str()),
                ("shoulders", m.tops.shoulders.as_str()),
                ("sleeve-length", m.tops.sleeve_length.as_str()),
                ("sleeve-length-short", m.tops.sleeve_length_short.as_str()),
                ("top-length", m.tops.top_length.as_str()),
                ("neck", m.tops.neck.as_str()),
                ("tommy", m.tops.tommy.as_str()),
                ("hip", m.tops.hip.as_str()),
            ],
        ),
        (
            "trouser",
            vec![
                ("waist", m.trouser.waist.as_str()),
                ("length", m.trouser.length.as_str()),
                ("lap", m.trouser.lap.as_str()),
                ("hip", m.trouser.hip.as_str()),
                ("base", m.trouser.base.as_str()),
            ],
        ),
        (
            "agbada",
            vec![
                ("length", m.agbada.length.as_str()),
                ("sleeve", m.agbada.sleeve.as_str()),
            ],
        ),
    ];
    for (group, fields) in groups {
        let set: Vec<String> = fields
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if !set.is_empty() {
            println!("  {}: {}", group, set.join(", "));
        }
    }
}

fn parse_status(value: &str) -> Result<Status, String> {
    match value.to_uppercase().replace('-', "_").as_str() {
        "PENDING" => Ok(Status::Pending),
        "IN_PROGRESS" => Ok(Status::InProgress),
        "COMPLETED" => Ok(Status::Completed),
        "CANCELLED" => Ok(Status::Cancelled),
        other => Err(format!(
            "Unknown status '{}'. Expected one of: pending, in-progress, completed, cancelled.",
            other
        )),
    }
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    match value.to_uppercase().as_str() {
        "LOW" => Ok(Priority::Low),
        "MEDIUM" => Ok(Priority::Medium),
        "HIGH" => Ok(Priority::High),
        "URGENT" => Ok(Priority::Urgent),
        other => Err(format!(
            "Unknown priority '{}'. Expected one of: low, medium, high, urgent.",
            other
        )),
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pending => "pending",
        Status::InProgress => "in-progress",
        Status::Completed => "completed",
        Status::Cancelled => "cancelled",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
        Priority::Urgent => "urgent",
    }
}

fn parse_measures(measures: &[String]) -> Result<CustomerMeasurements, String> {
    let mut out = CustomerMeasurements::default();
    apply_measures(&mut out, measures)?;
    Ok(out)
}

/// Apply `name=value` measurement pairs onto the form representation
///
/// Values stay strings here; the shape adapter owns the string→number
/// contract (blank or unparsable input becomes an absent field).
fn apply_measures(
    measurements: &mut CustomerMeasurements,
    measures: &[String],
) -> Result<(), String> {
    for measure in measures {
        let (key, value) = measure
            .split_once('=')
            .ok_or_else(|| format!("Expected name=value, got '{}'", measure))?;
        let value = value.to_string();
        match key {
            "chest" => measurements.tops.chest = value,
            "shoulders" => measurements.tops.shoulders = value,
            "sleeve-length" => measurements.tops.sleeve_length = value,
            "sleeve-length-short" => measurements.tops.sleeve_length_short = value,
            "top-length" => measurements.tops.top_length = value,
            "neck" => measurements.tops.neck = value,
            "tommy" => measurements.tops.tommy = value,
            "hip" => {
                measurements.tops.hip = value.clone();
                measurements.trouser.hip = value;
            }
            "waist" => measurements.trouser.waist = value,
            "length" => measurements.trouser.length = value,
            "lap" => measurements.trouser.lap = value,
            "base" => measurements.trouser.base = value,
            "agbada-length" => measurements.agbada.length = value,
            "agbada-sleeve" => measurements.agbada.sleeve = value,
            other => return Err(format!("Unknown measurement '{}'", other)),
        }
    }
    Ok(())
}
