// CLI module - the command-line front end over the stores

pub mod auth;
pub mod orders;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// Tailordesk CLI for the tailoring-shop order tracker
#[derive(Parser)]
#[command(name = "tailordesk")]
#[command(about = "Order tracker client for the tailoring-shop backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        password: String,
    },

    /// Clear the current session
    Logout,

    /// Show the currently authenticated account
    Whoami,

    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Order management commands
    #[command(subcommand)]
    Orders(OrderCommands),

    /// Show order counts by status
    Stats,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Update name, email or phone on the current account
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete the current account (implies logout)
    Delete,
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List orders, optionally filtered and paged
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one order with its measurements
    Show { id: String },

    /// Create an order
    Create {
        /// Customer name
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Collection date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Measurement as name=value, repeatable (e.g. --measure chest=40.5)
        #[arg(long = "measure")]
        measures: Vec<String>,
    },

    /// Update an order (unset fields keep their current values)
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        due_date: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long = "measure")]
        measures: Vec<String>,
    },

    /// Delete an order
    Delete { id: String },
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
pub async fn execute_command(
    cli: Cli,
    app_data: &AppData,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => {
            auth::login(&app_data.session, email, password).await?;
        }
        Commands::Register {
            name,
            email,
            phone,
            password,
        } => {
            auth::register(&app_data.session, name, email, phone, password).await?;
        }
        Commands::Logout => {
            auth::logout(&app_data.session);
        }
        Commands::Whoami => {
            auth::whoami(&app_data.session).await?;
        }
        Commands::Profile(profile_cmd) => match profile_cmd {
            ProfileCommands::Update { name, email, phone } => {
                auth::update_profile(&app_data.session, name, email, phone).await?;
            }
            ProfileCommands::Delete => {
                auth::delete_profile(&app_data.session).await?;
            }
        },
        Commands::Orders(order_cmd) => {
            orders::execute(order_cmd, app_data).await?;
        }
        Commands::Stats => {
            orders::stats(app_data).await?;
        }
    }

    Ok(())
}
