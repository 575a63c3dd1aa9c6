//! Common routes: hello, health, readiness, version, OpenAPI document.

use crate::handlers::common::{health, openapi_json, ready, root, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Common routes (no state): GET /, /health, /version, /openapi.json.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi_json))
}

/// Common routes including readiness with DB check. Requires AppState.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
