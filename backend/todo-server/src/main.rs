use todo_server::error::ServerError;
use todo_server::jwt::build_jwt_validator;
use todo_server::{AppState, Metrics, build_router, logger};

use todo_auth::AccessEvaluator;
use todo_config::Config;
use todo_store::TodoStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up TODO_* overrides from a local .env, if present
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting todo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let jwt_validator = Arc::new(build_jwt_validator(&config)?);

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
        })?;
    info!("Prometheus recorder installed");

    let store = TodoStore::new();
    store.seed(config.seed.new_todos()).await;

    let app_state = AppState {
        store,
        evaluator: AccessEvaluator::new(config.access.delete_requires_write_scope),
        jwt_validator,
        metrics: Metrics::new(),
        prometheus: Some(prometheus),
        validation: config.validation.clone(),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
