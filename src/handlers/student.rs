//! Student enrollment handlers: list/filter, create, update, delete, seed.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Session, ValidJson, ValidPath, ValidQuery};
use crate::response::{sample_data_created, student_removed, SampleDataCreated, StudentRemoved};
use crate::service::{RequestValidator, StudentService};
use crate::student::{NewStudent, Student, StudentFilter, StudentLookup, StudentQuery, StudentUpdate};
use axum::Json;

/// Get students either all, by class, or by id.
#[utoipa::path(
    get,
    path = "/fetchStudents/",
    params(StudentQuery),
    responses(
        (status = 200, description = "Matching students, or the single student when looked up by id", body = StudentLookup),
        (status = 404, description = "No student matched the filter", body = ErrorBody),
        (status = 422, description = "Malformed query", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn list(
    ValidQuery(query): ValidQuery<StudentQuery>,
    mut session: Session,
) -> Result<Json<StudentLookup>, AppError> {
    let found = StudentService::lookup(&mut session, StudentFilter::from(query)).await?;
    session.commit().await?;
    Ok(Json(found))
}

#[utoipa::path(
    post,
    path = "/fetchStudents/",
    request_body = NewStudent,
    responses(
        (status = 200, description = "Created student", body = Student),
        (status = 422, description = "Missing or invalid field", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn create(
    mut session: Session,
    ValidJson(body): ValidJson<NewStudent>,
) -> Result<Json<Student>, AppError> {
    RequestValidator::validate_new(&body)?;
    let student = StudentService::create(&mut session, &body).await?;
    session.commit().await?;
    tracing::info!(id = student.id, "student created");
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/fetchStudents/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    request_body = StudentUpdate,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 404, description = "Unknown student id", body = ErrorBody),
        (status = 422, description = "Invalid id or field", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn update(
    ValidPath(student_id): ValidPath<i64>,
    mut session: Session,
    ValidJson(body): ValidJson<StudentUpdate>,
) -> Result<Json<Student>, AppError> {
    RequestValidator::validate_update(&body)?;
    let student = StudentService::update(&mut session, student_id, body)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;
    session.commit().await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/fetchStudents/{student_id}",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student removed", body = StudentRemoved),
        (status = 404, description = "Unknown student id", body = ErrorBody),
        (status = 422, description = "Invalid id", body = ErrorBody)
    ),
    tag = "students"
)]
pub async fn delete(
    ValidPath(student_id): ValidPath<i64>,
    mut session: Session,
) -> Result<Json<StudentRemoved>, AppError> {
    if !StudentService::delete(&mut session, student_id).await? {
        return Err(AppError::not_found("Student enrollment not found"));
    }
    session.commit().await?;
    tracing::info!(id = student_id, "student removed");
    Ok(Json(student_removed()))
}

/// Populate the store with sample students.
#[utoipa::path(
    post,
    path = "/createSampleData",
    responses(
        (status = 200, description = "Sample students inserted", body = SampleDataCreated)
    ),
    tag = "students"
)]
pub async fn create_sample_data(mut session: Session) -> Result<Json<SampleDataCreated>, AppError> {
    StudentService::seed(&mut session).await?;
    session.commit().await?;
    Ok(Json(sample_data_created()))
}
