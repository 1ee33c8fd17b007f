/// Main entry point for the business-day calculator
use tracing::info;

use habiles::{
    config::load_or_default,
    error::Result,
    holidays::{HolidayProvider, NagerClient},
    ui::App,
};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level can come from it;
    // logging starts right after, before anything worth reporting
    let (config, from_file) = load_or_default(CONFIG_PATH)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(format!("habiles={},warn", config.log_level))
        .init();

    if !from_file {
        info!("No config file found - using defaults");
    }
    info!(
        "Configuration loaded: country {}, holidays from {}",
        config.country_code, config.api_base_url
    );

    let client = NagerClient::new(config.api_base_url.clone(), config.country_code.clone());
    let provider = HolidayProvider::new(client);

    let app = App::new(config, provider);
    app.run().await
}
