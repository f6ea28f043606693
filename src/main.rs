use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lingo_gateway::{routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lingo_gateway=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf.yaml".to_string());
    let config = Config::load_or_default(&config_path)?
        .with_env_overrides(|key| std::env::var(key).ok())?;

    info!(
        "Loaded configuration (mode={}, model={})",
        config.mode, config.provider.model
    );
    if std::env::var(&config.provider.api_key_env).map_or(true, |key| key.is_empty()) {
        tracing::warn!(
            "{} is not set; /translate will answer with API_KEY_MISSING",
            config.provider.api_key_env
        );
    }

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let app = routes::create_app(AppState::new(config));

    info!("Starting server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
