use clap::Parser;

use tailordesk::app_data::AppData;
use tailordesk::cli::{execute_command, Cli};
use tailordesk::config::{init_logging, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = Settings::from_env();
    tracing::debug!(base_url = %settings.api_base_url, "Loaded settings");

    let app_data = AppData::init(settings)?;

    let cli = Cli::parse();
    execute_command(cli, &app_data).await
}
