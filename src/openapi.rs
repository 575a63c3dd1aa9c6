//! OpenAPI document for the enrollment routes, built once and shared.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{common, student};
use crate::response::{Greeting, SampleDataCreated, StudentRemoved};
use crate::student::{NewStudent, Student, StudentLookup, StudentUpdate};
use once_cell::sync::Lazy;
use utoipa::openapi::extensions::Extensions;
use utoipa::OpenApi;

const SUMMARY: &str = "REST API for student enrollment records of a department";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Enrollment Service",
        description = "REST API for managing student enrollment records of a department."
    ),
    paths(
        common::root,
        student::list,
        student::create,
        student::update,
        student::delete,
        student::create_sample_data,
    ),
    components(schemas(
        Student,
        NewStudent,
        StudentUpdate,
        StudentLookup,
        StudentRemoved,
        SampleDataCreated,
        Greeting,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "students", description = "Student enrollment records"),
        (name = "common", description = "Connectivity")
    )
)]
pub struct ApiDoc;

static API_DOC: Lazy<utoipa::openapi::OpenApi> = Lazy::new(|| {
    let mut doc = ApiDoc::openapi();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    // `Info` has no summary field; its flattened extension map serializes as `info.summary`.
    doc.info
        .extensions
        .get_or_insert_with(Extensions::default)
        .insert("summary".to_string(), SUMMARY.into());
    doc
});

/// The document is generated on first access and never mutated afterwards.
pub fn api_doc() -> &'static utoipa::openapi::OpenApi {
    &API_DOC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_enrollment_route() {
        let doc = api_doc();
        for path in ["/", "/fetchStudents/", "/fetchStudents/{student_id}", "/createSampleData"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn info_carries_summary_and_description() {
        let json = serde_json::to_value(api_doc()).unwrap();
        assert_eq!(json["info"]["summary"], SUMMARY);
        assert!(json["info"]["description"].is_string());
    }

    #[test]
    fn same_instance_on_every_call() {
        assert!(std::ptr::eq(api_doc(), api_doc()));
    }

    #[test]
    fn student_schema_uses_wire_names() {
        let json = serde_json::to_value(api_doc()).unwrap();
        let props = &json["components"]["schemas"]["Student"]["properties"];
        assert!(props.get("firstName").is_some());
        assert!(props.get("student_class").is_some());
    }
}
