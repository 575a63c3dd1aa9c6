//! HTTP handlers for student enrollment and the common endpoints.

pub mod common;
pub mod student;
