//! Read handlers for the example collection.

use crate::response::ApiError;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use db::models::example::{FILTER_FIELDS, Model as ExampleModel, SORT_FIELD};
use util::{filters::ListQuery, state::AppState};

/// GET /
///
/// Lists examples, oldest first.
///
/// ### Query Parameters
/// - `name`: exact match on the label
/// - `isComplete`: `true` or `false`
/// - `sort`: `createdAt` (default) or `-createdAt`
///
/// Any other key is rejected.
///
/// ### Responses
/// - `200 OK` with a JSON array of examples
/// - `400 Bad Request` with `{ "msg": ... }` on an unknown filter, a malformed
///   value or a store failure
///
/// ```json
/// [
///   { "id": 1, "name": "buy milk", "isComplete": null, "createdAt": "2026-10-17T09:00:00Z" }
/// ]
/// ```
pub async fn list_examples(
    State(app_state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<Vec<(String, String)>>, ApiError>,
) -> Response {
    let query = match ListQuery::parse(params, FILTER_FIELDS, SORT_FIELD) {
        Ok(query) => query,
        Err(err) => return ApiError::from(err).into_response(),
    };

    match ExampleModel::find_all(app_state.db(), &query).await {
        Ok(examples) => (StatusCode::OK, Json(examples)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// GET /{id}
///
/// Fetches a single example. An unknown id is not an error: the body is `null`.
///
/// ### Responses
/// - `200 OK` with the example or `null`
/// - `400 Bad Request` if `id` is not an integer or the store fails
pub async fn get_example(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Response {
    match ExampleModel::get_by_id(app_state.db(), id).await {
        Ok(example) => (StatusCode::OK, Json(example)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
