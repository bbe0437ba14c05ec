//! Create and toggle handlers.

use crate::{response::ApiError, routes::examples::common::ExampleRequest};
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
use validator::Validate;

/// POST /
///
/// Creates an example. The store assigns `id` and the service stamps
/// `createdAt`; clients cannot set either.
///
/// ### Request Body
/// ```json
/// { "name": "buy milk", "isComplete": false }
/// ```
/// `text` is accepted in place of `name`. `isComplete` is optional.
///
/// ### Responses
/// - `200 OK` with the created example
/// - `400 Bad Request` with `{ "msg": ... }` on a malformed body, a missing
///   or empty `name`, or a store failure
pub async fn create_example(
    State(app_state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<ExampleRequest>, ApiError>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return ApiError::from(validation_errors).into_response();
    }

    match ExampleModel::create(app_state.db(), &req.name, req.is_complete).await {
        Ok(example) => {
            info!(id = example.id, "example created");
            (StatusCode::OK, Json(example)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// POST /isDone/{id}
///
/// Flips `isComplete` atomically and returns the example after the change.
/// A never-set flag becomes `true`.
///
/// ### Responses
/// - `200 OK` with the updated example, or `null` if `id` does not exist
/// - `400 Bad Request` if `id` is not an integer or the store fails
pub async fn toggle_example(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Response {
    match ExampleModel::toggle_complete(app_state.db(), id).await {
        Ok(example) => (StatusCode::OK, Json(example)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
