use crate::{response::ApiError, routes::examples::common::RenameRequest};
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

/// PATCH /{id}
///
/// Changes `name` (or its alias `text`) and nothing else. Responds with the
/// example after the change, or `null` for an unknown id.
pub async fn rename_example(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(req), _): WithRejection<Json<RenameRequest>, ApiError>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return ApiError::from(validation_errors).into_response();
    }

    match ExampleModel::rename(app_state.db(), id, &req.name).await {
        Ok(example) => (StatusCode::OK, Json(example)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
