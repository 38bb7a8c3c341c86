use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Read DATABASE_URL, loading a .env file first if one is present.
pub fn database_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

pub async fn init_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
        .expect("Failed to create DB pool")
}

pub async fn run_migrations(pool: &PgPool) {
    sqlx::raw_sql(MIGRATIONS)
        .execute(pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}
