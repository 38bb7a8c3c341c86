use serde::Serialize;

/// Always anchored to exactly one assignment and one student; never exists
/// without both. `status` is opaque to the permission core.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub value: i32,
    pub status: String,
}
