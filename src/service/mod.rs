//! StudentService: CRUD against the students table, plus request validation.

mod crud;
mod validation;
pub use crud::{StudentService, SAMPLE_STUDENTS};
pub use validation::RequestValidator;
