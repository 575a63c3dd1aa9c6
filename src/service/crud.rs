//! Student CRUD execution against SQLite. Every call runs on the caller's
//! connection, normally the transaction held by a request [`Session`](crate::extractors::Session).

use crate::error::AppError;
use crate::student::{NewStudent, Student, StudentFilter, StudentLookup, StudentUpdate};
use crate::store::STUDENTS_TABLE;
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, first_name, last_name, student_class, nationality";

/// Fixed rows inserted by [`StudentService::seed`]: (firstName, lastName, student_class, nationality).
pub const SAMPLE_STUDENTS: [(&str, &str, &str, &str); 5] = [
    ("Mike", "Wong", "A 3", "Singapore"),
    ("King", "Arthur", "A 3", "England"),
    ("John", "Doe", "0 A", "Brazil"),
    ("Jane", "Doe", "C 2", "Guam"),
    ("That", "Guy", "D 3", "Atlantis"),
];

pub struct StudentService;

impl StudentService {
    /// All students in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Students whose class equals `student_class` exactly, in insertion order.
    pub async fn list_by_class(
        conn: &mut SqliteConnection,
        student_class: &str,
    ) -> Result<Vec<Student>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE student_class = ?1 ORDER BY id",
            COLUMNS, STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, params = ?[student_class], "query");
        let rows = sqlx::query_as::<_, Student>(&sql)
            .bind(student_class)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Fetch one row by primary key.
    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?1", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, params = ?[id], "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Resolve a list request. Empty class matches and unknown ids are NotFound.
    pub async fn lookup(
        conn: &mut SqliteConnection,
        filter: StudentFilter,
    ) -> Result<StudentLookup, AppError> {
        match filter {
            StudentFilter::Class(student_class) => {
                let rows = Self::list_by_class(conn, &student_class).await?;
                if rows.is_empty() {
                    return Err(AppError::not_found("No students found for that class"));
                }
                Ok(StudentLookup::Many(rows))
            }
            StudentFilter::Id(id) => Self::read(conn, id)
                .await?
                .map(StudentLookup::One)
                .ok_or_else(|| AppError::not_found("Student not found")),
            StudentFilter::All => Ok(StudentLookup::Many(Self::list(conn).await?)),
        }
    }

    /// Insert one row. Returns the created row with its assigned id.
    pub async fn create(conn: &mut SqliteConnection, body: &NewStudent) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, student_class, nationality) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?body, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&body.first_name)
            .bind(&body.last_name)
            .bind(&body.student_class)
            .bind(&body.nationality)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Merge `changes` into the stored row and write it back. Returns None when the id is unknown.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        changes: StudentUpdate,
    ) -> Result<Option<Student>, AppError> {
        let Some(mut stored) = Self::read(conn, id).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(stored));
        }
        changes.merge_into(&mut stored);

        let sql = format!(
            "UPDATE {} SET first_name = ?1, student_class = ?2 WHERE id = ?3 RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?stored, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&stored.first_name)
            .bind(&stored.student_class)
            .bind(stored.id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Delete one row by id. Returns whether a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, params = ?[id], "query");
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert the sample rows. Not idempotent: every call adds another five.
    pub async fn seed(conn: &mut SqliteConnection) -> Result<Vec<Student>, AppError> {
        let mut out = Vec::with_capacity(SAMPLE_STUDENTS.len());
        for (first_name, last_name, student_class, nationality) in SAMPLE_STUDENTS {
            let body = NewStudent::new(first_name, last_name, student_class, Some(nationality));
            out.push(Self::create(conn, &body).await?);
        }
        tracing::info!(count = out.len(), "inserted sample students");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect, ensure_student_table};

    async fn conn() -> sqlx::pool::PoolConnection<sqlx::Sqlite> {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_student_table(&pool).await.unwrap();
        pool.acquire().await.unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let mut conn = conn().await;
        let a = StudentService::create(&mut conn, &NewStudent::new("Mike", "Wong", "3 A", None))
            .await
            .unwrap();
        let b = StudentService::create(&mut conn, &NewStudent::new("King", "Arthur", "3 A", None))
            .await
            .unwrap();
        assert!(b.id > a.id);
        assert_eq!(a.nationality, None);
    }

    #[tokio::test]
    async fn class_match_is_exact() {
        let mut conn = conn().await;
        for class in ["3 A", "3 a", " 3 A", "3 A"] {
            StudentService::create(&mut conn, &NewStudent::new("F", "L", class, None))
                .await
                .unwrap();
        }
        let rows = StudentService::list_by_class(&mut conn, "3 A").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id < rows[1].id);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let mut conn = conn().await;
        let changes = StudentUpdate {
            first_name: Some("X".into()),
            student_class: None,
        };
        assert!(StudentService::update(&mut conn, 99, changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_missing_row() {
        let mut conn = conn().await;
        let s = StudentService::create(&mut conn, &NewStudent::new("Mike", "Wong", "3 A", None))
            .await
            .unwrap();
        assert!(StudentService::delete(&mut conn, s.id).await.unwrap());
        assert!(!StudentService::delete(&mut conn, s.id).await.unwrap());
    }

    #[tokio::test]
    async fn seed_is_not_idempotent() {
        let mut conn = conn().await;
        StudentService::seed(&mut conn).await.unwrap();
        StudentService::seed(&mut conn).await.unwrap();
        let all = StudentService::list(&mut conn).await.unwrap();
        assert_eq!(all.len(), 2 * SAMPLE_STUDENTS.len());
        assert_eq!(all[0].first_name, "Mike");
        assert_eq!(all[5].first_name, "Mike");
    }

    #[tokio::test]
    async fn lookup_empty_class_is_not_found() {
        let mut conn = conn().await;
        let err = StudentService::lookup(&mut conn, StudentFilter::Class("Z".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let all = StudentService::lookup(&mut conn, StudentFilter::All).await.unwrap();
        assert_eq!(all, StudentLookup::Many(Vec::new()));
    }
}
