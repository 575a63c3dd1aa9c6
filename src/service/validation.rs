//! Field rules for student request bodies.

use crate::error::AppError;
use crate::student::{NewStudent, StudentUpdate, NATIONALITY_MAX_LEN};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Required fields must be non-empty.
    pub fn validate_new(body: &NewStudent) -> Result<(), AppError> {
        require_non_empty("firstName", &body.first_name)?;
        require_non_empty("lastName", &body.last_name)?;
        require_non_empty("student_class", &body.student_class)?;
        if let Some(nationality) = &body.nationality {
            validate_max_length("nationality", nationality, NATIONALITY_MAX_LEN)?;
        }
        Ok(())
    }

    /// Validate only the fields present in an update body.
    pub fn validate_update(body: &StudentUpdate) -> Result<(), AppError> {
        if let Some(first_name) = &body.first_name {
            require_non_empty("firstName", first_name)?;
        }
        if let Some(student_class) = &body.student_class {
            require_non_empty("student_class", student_class)?;
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::invalid_field(field, "must not be empty"));
    }
    Ok(())
}

fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::invalid_field(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}
