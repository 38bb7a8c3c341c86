//! Reference data: groups, subjects, semesters, roles. The permission core
//! treats these as opaque ids and only ever asks whether a row exists.

use sqlx::PgPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Group,
    Subject,
    Semester,
    Role,
}

impl RefKind {
    fn table(self) -> &'static str {
        match self {
            RefKind::Group => "student_groups",
            RefKind::Subject => "subjects",
            RefKind::Semester => "semesters",
            RefKind::Role => "roles",
        }
    }
}

/// Existence probe for a reference row. The table name comes from the closed
/// enum above, never from caller input.
pub async fn exists(pool: &PgPool, kind: RefKind, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)", kind.table());
    let row: (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(pool).await?;
    Ok(row.0)
}
