use domain::meeting::Gateway;
use log::{error, info};
use service::{config::Config, logging::Logger};
use web::AppState;

#[tokio::main]
async fn main() {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to initialize logger: {e}");
    }

    info!("Starting up meeting scheduler...");

    let meeting_gateway = match Gateway::from_config(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("Failed to configure the meeting gateway: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = web::init_server(AppState::new(config, meeting_gateway)).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
