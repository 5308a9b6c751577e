use std::env;

use settlement_engine::api::{AppState, create_router};
use settlement_engine::config::ConfigLoader;
use tracing::{error, info};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CONFIG_DIR: &str = "./config/clt";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = env::var("SETTLEMENT_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let config_dir =
        env::var("SETTLEMENT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        legislation = %config.legislation().name,
        minimum_wage = %config.statutory_rates().minimum_wage,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!(addr = %addr, "Settlement engine listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
    }
}
