use sqlx::PgPool;

use super::types::Grade;

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Grade>, sqlx::Error> {
    sqlx::query_as("SELECT id, student_id, assignment_id, value, status FROM grades WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
