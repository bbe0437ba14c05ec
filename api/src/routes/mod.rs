//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → liveness plus a database ping
//! - `/` → example CRUD
//! - `/examples` → the same example CRUD under its resource prefix, plus
//!   `POST /examples/new` as a second spelling of create

use crate::middleware::log_request;
use axum::{Router, middleware::from_fn, routing::post};
use tower_http::cors::CorsLayer;
use util::state::AppState;

pub mod examples;
pub mod health;

use examples::{example_routes, post::create_example};
use health::health_routes;

/// Builds the route table with `AppState` still to be supplied.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/examples",
            example_routes().route("/new", post(create_example)),
        )
        .merge(example_routes())
}

/// The complete application: routes bound to `app_state`, request logging
/// and a wildcard CORS policy.
pub fn app(app_state: AppState) -> Router {
    routes()
        .with_state(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::permissive())
}
