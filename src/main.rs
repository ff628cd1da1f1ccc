use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use portal::config::Config;
use portal::db::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting portal");

    let db = Database::new(&config);
    if !db.is_configured() {
        tracing::warn!("DATABASE_URL is not set; serving fallback data only");
    } else if let Err(e) = db.connect().await {
        // Not fatal: the connector retries on the next request.
        tracing::warn!("Initial database connection failed: {e}");
    }

    if !config.mock_fallback {
        tracing::info!("Mock fallback disabled; database failures surface as errors");
    }

    let addr = SocketAddr::new(config.host, config.port);
    let (app, state) = portal::build_app(db, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.db.close().await;
    tracing::info!("Database connections closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
