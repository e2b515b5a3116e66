use domain::meeting::Gateway;
use log::*;
use service::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;

mod controller;
mod error;
mod params;
mod response;
pub mod router;

pub use error::{Error, Result};

// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub meeting_gateway: Arc<Gateway>,
}

impl AppState {
    pub fn new(config: Config, meeting_gateway: Gateway) -> Self {
        Self {
            config,
            meeting_gateway: Arc::new(meeting_gateway),
        }
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let server_url = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );
    let listener = TcpListener::bind(&server_url).await?;

    info!("Server is running on port {}", app_state.config.port);

    axum::serve(listener, router::define_routes(app_state)).await
}
