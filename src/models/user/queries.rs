use sqlx::PgPool;

/// Role name for a user, via the role link. `None` when the user is unknown.
/// The permission core never reads anything else off the account row;
/// usernames, display names, and credentials stay in the outer system.
pub async fn role_name(pool: &PgPool, user_id: i64) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> = sqlx::query_as(
        "SELECT r.name FROM users u JOIN roles r ON r.id = u.role_id WHERE u.id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| r.0))
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
