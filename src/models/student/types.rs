use serde::Serialize;

/// A student belongs to exactly one group at a time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
}
