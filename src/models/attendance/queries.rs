use sqlx::PgPool;

use super::types::Attendance;

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, student_id, assignment_id, date, status FROM attendance WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
