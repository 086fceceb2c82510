//! LowesPro backend server binary.
//!
//! Configuration comes from an optional TOML file named by
//! `LOWESPRO_CONFIG`, overridden by `LOWESPRO_HOST` / `LOWESPRO_PORT` /
//! `LOWESPRO_DB`. Log verbosity follows `RUST_LOG` (default `info`).

use std::path::Path;
use std::sync::Arc;

use lowespro_api::start_server;
use lowespro_core::AppConfig;
use lowespro_storage::Store;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::var("LOWESPRO_CONFIG") {
        Ok(path) => match AppConfig::load(Path::new(&path)) {
            Ok(config) => {
                info!(%path, "loaded configuration");
                config
            }
            Err(e) => {
                error!(error = %e, "failed to load configuration");
                std::process::exit(1);
            }
        },
        Err(_) => AppConfig::default(),
    };
    config.apply_env();

    let db_path = config.effective_database_path().to_string();
    let store = match Store::open(Path::new(&db_path), config.effective_read_pool_size()) {
        Ok(store) => store,
        Err(e) => {
            error!(path = %db_path, error = %e, "failed to open database");
            std::process::exit(1);
        }
    };
    info!(path = %db_path, "database ready");

    if let Err(e) = start_server(&config, Arc::new(store)).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
