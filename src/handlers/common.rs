//! Connectivity, health, readiness, version and OpenAPI handlers.

use crate::openapi::api_doc;
use crate::response::{hello_world, Greeting};
use crate::state::AppState;
use crate::store::ping;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// For testing the connection.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is reachable", body = Greeting)),
    tag = "common"
)]
pub async fn root() -> Json<Greeting> {
    Json(hello_world())
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = ping(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn openapi_json() -> Json<&'static utoipa::openapi::OpenApi> {
    Json(api_doc())
}
