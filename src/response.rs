//! Fixed-shape response bodies for the non-record endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"Student removed": true}`
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentRemoved {
    #[serde(rename = "Student removed")]
    pub removed: bool,
}

/// `{"data made": true}`
#[derive(Debug, Serialize, ToSchema)]
pub struct SampleDataCreated {
    #[serde(rename = "data made")]
    pub created: bool,
}

/// `{"message": "Hello World"}`
#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    pub message: &'static str,
}

pub fn student_removed() -> StudentRemoved {
    StudentRemoved { removed: true }
}

pub fn sample_data_created() -> SampleDataCreated {
    SampleDataCreated { created: true }
}

pub fn hello_world() -> Greeting {
    Greeting {
        message: "Hello World",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_use_wire_keys() {
        assert_eq!(
            serde_json::to_value(student_removed()).unwrap(),
            serde_json::json!({ "Student removed": true })
        );
        assert_eq!(
            serde_json::to_value(sample_data_created()).unwrap(),
            serde_json::json!({ "data made": true })
        );
        assert_eq!(
            serde_json::to_value(hello_world()).unwrap(),
            serde_json::json!({ "message": "Hello World" })
        );
    }
}
