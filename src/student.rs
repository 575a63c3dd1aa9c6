//! Student record and its request shapes.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Longest accepted `nationality` value, in characters.
pub const NATIONALITY_MAX_LEN: usize = 100;

/// A persisted student enrollment row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    /// Assigned by the store on insert.
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub student_class: String,
    #[schema(max_length = 100)]
    pub nationality: Option<String>,
}

/// Body of a create request. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewStudent {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub student_class: String,
    #[serde(default)]
    #[schema(max_length = 100)]
    pub nationality: Option<String>,
}

impl NewStudent {
    pub fn new(first_name: &str, last_name: &str, student_class: &str, nationality: Option<&str>) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            student_class: student_class.to_string(),
            nationality: nationality.map(String::from),
        }
    }
}

/// Body of an update request. Only `firstName` and `student_class` are mutable;
/// anything else in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentUpdate {
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_class: Option<String>,
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.student_class.is_none()
    }

    /// Apply the fields present in this update to `stored`, leaving the rest untouched.
    pub fn merge_into(self, stored: &mut Student) {
        if let Some(first_name) = self.first_name {
            stored.first_name = first_name;
        }
        if let Some(student_class) = self.student_class {
            stored.student_class = student_class;
        }
    }
}

/// Query parameters of `GET /fetchStudents/`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    /// Exact, case-sensitive class name. Takes precedence over `id`.
    pub s_class: Option<String>,
    /// Student id. `0` is treated as not supplied.
    pub id: Option<i64>,
}

/// Which students a list request asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentFilter {
    Class(String),
    Id(i64),
    All,
}

impl From<StudentQuery> for StudentFilter {
    fn from(q: StudentQuery) -> Self {
        match (q.s_class.filter(|c| !c.is_empty()), q.id.filter(|id| *id != 0)) {
            (Some(class), _) => StudentFilter::Class(class),
            (None, Some(id)) => StudentFilter::Id(id),
            (None, None) => StudentFilter::All,
        }
    }
}

/// Result of a list request: a class or full listing, or one student looked up by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum StudentLookup {
    Many(Vec<Student>),
    One(Student),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Student {
        Student {
            id: 7,
            first_name: "Mike".into(),
            last_name: "Wong".into(),
            student_class: "3 A".into(),
            nationality: Some("Singapore".into()),
        }
    }

    #[test]
    fn merge_applies_only_present_fields() {
        let mut s = stored();
        StudentUpdate {
            first_name: Some("X".into()),
            student_class: None,
        }
        .merge_into(&mut s);
        assert_eq!(s.first_name, "X");
        assert_eq!(s.last_name, "Wong");
        assert_eq!(s.student_class, "3 A");
        assert_eq!(s.nationality.as_deref(), Some("Singapore"));
        assert_eq!(s.id, 7);
    }

    #[test]
    fn empty_update_leaves_record_unchanged() {
        let mut s = stored();
        let update = StudentUpdate::default();
        assert!(update.is_empty());
        update.merge_into(&mut s);
        assert_eq!(s, stored());
    }

    #[test]
    fn update_ignores_immutable_fields() {
        let update: StudentUpdate = serde_json::from_value(serde_json::json!({
            "lastName": "Other",
            "nationality": "Elsewhere",
            "student_class": "4 B"
        }))
        .unwrap();
        let mut s = stored();
        update.merge_into(&mut s);
        assert_eq!(s.last_name, "Wong");
        assert_eq!(s.nationality.as_deref(), Some("Singapore"));
        assert_eq!(s.student_class, "4 B");
    }

    #[test]
    fn student_serializes_with_wire_names() {
        let v = serde_json::to_value(stored()).unwrap();
        assert_eq!(v["firstName"], "Mike");
        assert_eq!(v["lastName"], "Wong");
        assert_eq!(v["student_class"], "3 A");
        assert_eq!(v["id"], 7);
    }

    #[test]
    fn class_takes_precedence_over_id() {
        let filter = StudentFilter::from(StudentQuery {
            s_class: Some("3 A".into()),
            id: Some(1),
        });
        assert_eq!(filter, StudentFilter::Class("3 A".into()));
    }

    #[test]
    fn empty_class_falls_through() {
        let filter = StudentFilter::from(StudentQuery {
            s_class: Some(String::new()),
            id: Some(4),
        });
        assert_eq!(filter, StudentFilter::Id(4));
        assert_eq!(StudentFilter::from(StudentQuery::default()), StudentFilter::All);
    }

    #[test]
    fn zero_id_falls_through() {
        let filter = StudentFilter::from(StudentQuery {
            s_class: None,
            id: Some(0),
        });
        assert_eq!(filter, StudentFilter::All);
    }
}
