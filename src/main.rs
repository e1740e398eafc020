use tracing::{error, info};

use hello_service::{app, config::Config, middleware::init_tracing};

#[tokio::main]
async fn main() {
    // Configuration first: it decides the log format
    let config = match Config::from_env_with_database() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(config.log_format) {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }
    info!(environment = ?config.environment, "Configuration loaded successfully");

    // Probe, bind and serve
    if let Err(e) = app::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
