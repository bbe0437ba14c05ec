use api::{logging::init_logging, routes::app};
use sea_orm::DatabaseConnection;
use std::{net::SocketAddr, process};
use tracing::{error, info};
use util::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() {
    // A missing DATABASE_URL is fatal before anything is bound
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            process::exit(1);
        }
    };

    let _log_guard = init_logging(&config);
    info!(env = %config.env, project = %config.project_name, "configuration loaded");

    // Connection failures are logged, not fatal: requests fail one by one instead
    let db = match db::connect(&config).await {
        Ok(db) => {
            if let Err(err) = db::migrate(&db).await {
                error!(error = %err, "failed to apply migrations");
            }
            db
        }
        Err(err) => {
            error!(error = %err, "failed to connect to database");
            DatabaseConnection::Disconnected
        }
    };

    let app_state = AppState::new(db);
    let db_handle = app_state.db_clone();
    let router = app(app_state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "failed to bind");
            eprintln!("Failed to bind {addr}: {err}");
            process::exit(1);
        }
    };

    println!("Starting {} on http://{}", config.project_name, addr);
    info!(addr = %addr, "listening");

    if let Err(err) = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        error!(error = %err, "server error");
    }

    if let Err(err) = db_handle.close().await {
        error!(error = %err, "failed to close database connection");
    }
    info!("shutdown complete");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
