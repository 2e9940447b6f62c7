use dotenvy::dotenv;
use movie_info_bot::config::Settings;
use movie_info_bot::{logging, runner};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    logging::init_logging();

    info!("Starting Movie Info Bot...");

    let settings = init_settings();

    runner::run_bot(settings).await;
}

fn init_settings() -> Arc<Settings> {
    match Settings::new() {
        Ok(s) => {
            info!("Configuration loaded successfully.");
            Arc::new(s)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    }
}
