use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use translation_gateway::config::Config;
use translation_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_gateway=debug,tower_http=debug")),
        )
        .init();

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let mut config = config.unwrap_or_else(|| {
        warn!("No configuration file found (tried {:?}), using defaults", config_paths);
        Config::default()
    });
    config.apply_env_overrides()?;

    let app_state = AppState::new(config.clone());

    // Probe once so the log says whether the backend works; nothing is cached
    let service = &app_state.translation_service;
    if service.is_available().await {
        info!("{} backend is reachable", service.backend_name());
    } else {
        warn!(
            "{} backend is not reachable, /translate will answer 503 until it is",
            service.backend_name()
        );
    }

    let app = translation_gateway::build_app(app_state);

    let host: std::net::IpAddr = config
        .system_config
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("host must be a valid IP address: {}", e))?;
    let addr = SocketAddr::new(host, config.system_config.port);
    info!("Starting translation API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
