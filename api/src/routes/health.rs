use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::warn;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Always answers `200 OK` while the process is serving; `database` reports
/// whether the store answered a ping.
///
/// ```json
/// { "status": "ok", "database": "up" }
/// ```
async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let database = match app_state.db().ping().await {
        Ok(()) => "up",
        Err(err) => {
            warn!(error = %err, "database ping failed");
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
    })
}
