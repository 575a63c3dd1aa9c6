//! Student enrollment routes.

use crate::handlers::student::{create, create_sample_data, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, routing::put, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/fetchStudents/", get(list).post(create))
        .route("/fetchStudents/:student_id", put(update).delete(delete_handler))
        .route("/createSampleData", post(create_sample_data))
        .with_state(state)
}
