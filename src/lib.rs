//! Enrollment service: REST backend for student enrollment records on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod student;

pub use config::{load_dotenv, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use extractors::Session;
pub use logging::init_tracing;
pub use openapi::{api_doc, ApiDoc};
pub use routes::{app, common_routes, common_routes_with_ready, student_routes};
pub use service::{RequestValidator, StudentService};
pub use state::AppState;
pub use store::{connect, ensure_student_table};
pub use student::{NewStudent, Student, StudentFilter, StudentLookup, StudentQuery, StudentUpdate};
