//! Pool construction and the `students` table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const STUDENTS_TABLE: &str = "students";

/// Open a pool for `database_url`. In-memory databases are pinned to a single
/// connection that never expires, since each new connection would see an empty database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(opts)
            .await?
    };
    Ok(pool)
}

/// Create the `students` table if it does not exist. Existing tables are left as they are.
pub async fn ensure_student_table(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            student_class TEXT NOT NULL,
            nationality VARCHAR(100)
        )
        "#,
        STUDENTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = STUDENTS_TABLE, "student table ready");
    Ok(())
}

/// `SELECT 1` against the pool; used by readiness checks.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn table_creation_is_repeatable() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        ensure_student_table(&pool).await.unwrap();
        ensure_student_table(&pool).await.unwrap();
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", STUDENTS_TABLE))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        ping(&pool).await.unwrap();
    }
}
