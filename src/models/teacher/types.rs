use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
}
