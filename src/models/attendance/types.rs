use chrono::NaiveDate;
use serde::Serialize;

/// One attendance mark, anchored the same way a grade is.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub date: NaiveDate,
    pub status: String,
}
