//! Full replace handler.

use crate::{response::ApiError, routes::examples::common::ExampleRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use db::models::example::Model as ExampleModel;
use util::state::AppState;
use validator::Validate;

/// PUT /{id}
///
/// Overwrites every user-settable field of an example. `id` and `createdAt`
/// are preserved; leaving out `isComplete` clears it.
///
/// ### Request Body
/// ```json
/// { "name": "buy oat milk", "isComplete": true }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated example, or `null` if `id` does not exist
/// - `400 Bad Request` with `{ "msg": ... }` on a malformed id or body, an
///   empty `name`, or a store failure
pub async fn replace_example(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(req), _): WithRejection<Json<ExampleRequest>, ApiError>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return ApiError::from(validation_errors).into_response();
    }

    match ExampleModel::replace(app_state.db(), id, &req.name, req.is_complete).await {
        Ok(example) => (StatusCode::OK, Json(example)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
