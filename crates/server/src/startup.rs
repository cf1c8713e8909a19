use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from `config.toml`, falling back to environment variables.
///
/// Fallbacks: `SERVER_HOST`, `SERVER_PORT` (8081), `DATABASE_URL`, `TOKIO_WORKER_THREADS`.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            let worker_threads = env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .or(ServerConfig::default().worker_threads);
            let database = DatabaseConfig::from_env();
            database.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok(AppConfig {
                server: ServerConfig { host, port, worker_threads },
                database,
            })
        }
    }
}

fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| StartupError::InvalidConfig(e.to_string()))
}

// RUN_MIGRATIONS=false (or 0) skips them
fn migrations_enabled() -> bool {
    !matches!(env::var("RUN_MIGRATIONS").as_deref(), Ok("false") | Ok("0"))
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received; draining in-flight requests");
}

/// Serve `app` until `shutdown` resolves, letting in-flight requests finish.
async fn serve<F>(listener: tokio::net::TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

/// Connect, migrate, build the app and serve until a shutdown signal arrives
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // DB connection
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if migrations_enabled() {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }

    // Build router
    let app: Router = routes::build_router(ServerState { db: db.clone() }, build_cors());

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, sqlite = cfg.database.is_sqlite(), "gallinapp listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal()).await?;

    // pool is closed only after the last request finished
    db.close().await?;
    info!("server stopped");
    Ok(())
}
