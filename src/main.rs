mod analyzer;
mod api;
mod config;
mod loader;
mod model;
mod normalizer;
mod parser;
mod service;
mod storage;

use config::{load_config, AppConfig};
use loader::load_movie_list;
use service::IntervalService;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use storage::SqliteStorage;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.json"));

    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(config::ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using defaults", config_path.display());
            AppConfig::default()
        }
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut storage = match SqliteStorage::new(&config.database_path) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = load_movie_list(&config.movie_list_path, &mut storage) {
        error!("Failed to load movie list: {}", e);
        return ExitCode::FAILURE;
    }

    let service = Arc::new(IntervalService::new(Arc::new(Mutex::new(storage))));
    let app = api::create_app(service);

    let bind_addr = config.bind_addr();
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Producer intervals API listening on http://{}", bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
