use serde::Serialize;

/// The unit of teaching authority: one teacher, one subject, an optional
/// group, one semester. `group_id` is `None` for cross-group electives.
///
/// `(teacher_id, subject_id, group_id, semester_id)` is unique; the schema
/// enforces it and nothing here re-checks.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TeachingAssignment {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub group_id: Option<i64>,
    pub semester_id: i64,
}
