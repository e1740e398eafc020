// Same responder without the startup database probe

use tracing::{error, info};

use hello_service::{app, config::Config, middleware::init_tracing};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
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

    if let Err(e) = app::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
