use sqlx::PgPool;

use super::types::TeachingAssignment;

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<TeachingAssignment>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, teacher_id, subject_id, group_id, semester_id
         FROM teaching_assignments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether the teacher owns at least one assignment bound to the group.
pub async fn owns_group_assignment(
    pool: &PgPool,
    teacher_id: i64,
    group_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS (
             SELECT 1 FROM teaching_assignments
             WHERE teacher_id = $1 AND group_id = $2
         )",
    )
    .bind(teacher_id)
    .bind(group_id)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}
