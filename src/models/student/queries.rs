use sqlx::PgPool;

use super::types::Student;

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as("SELECT id, user_id, group_id FROM students WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Student profile for a user account. A user holds at most one.
pub async fn find_by_user_id(pool: &PgPool, user_id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as("SELECT id, user_id, group_id FROM students WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
