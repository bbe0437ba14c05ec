//! # Example Routes Module
//!
//! Wires the CRUD endpoints for the example resource.
//!
//! ## Structure
//! - `get.rs` — list and fetch-by-id
//! - `post.rs` — create and toggle `isComplete`
//! - `patch.rs` — rename
//! - `put.rs` — full replace
//! - `delete.rs` — delete by id
//! - `common.rs` — request DTOs

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use delete::delete_example;
use get::{get_example, list_examples};
use patch::rename_example;
use post::{create_example, toggle_example};
use put::replace_example;

/// Builds the example route group.
///
/// - `GET /` → `list_examples`
/// - `POST /` → `create_example`
/// - `GET /{id}` → `get_example`
/// - `POST /isDone/{id}` → `toggle_example`
/// - `PATCH /{id}` → `rename_example`
/// - `PUT /{id}` → `replace_example`
/// - `DELETE /{id}` → `delete_example`
pub fn example_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_examples).post(create_example))
        .route("/isDone/{id}", post(toggle_example))
        .route(
            "/{id}",
            get(get_example)
                .patch(rename_example)
                .put(replace_example)
                .delete(delete_example),
        )
}
