use crate::response::ApiError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use db::models::example::Model as ExampleModel;
use tracing::info;
use util::state::AppState;

/// DELETE /{id}
///
/// Permanently removes an example and returns the record as it was just
/// before deletion. Deleting an unknown id answers `200 OK` with `null`.
///
/// ```json
/// { "id": 42, "name": "buy milk", "isComplete": true, "createdAt": "2026-10-17T09:00:00Z" }
/// ```
pub async fn delete_example(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Response {
    match ExampleModel::delete(app_state.db(), id).await {
        Ok(snapshot) => {
            if snapshot.is_some() {
                info!(id, "example deleted");
            }
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
