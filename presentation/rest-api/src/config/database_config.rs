use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize the content-store connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - MIGRATIONS_PATH: schema migrations directory (default:
///   "infrastructure/persistence/migrations")
///
/// The pool connects lazily and migrations are best-effort: an unreachable
/// store is logged and tolerated, because every content read degrades to
/// the static catalogs.
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url))?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    if let Err(err) = run_migrations(&pool, &migrations_path).await {
        tracing::warn!("Skipping migrations ({}), content reads will fall back", err);
    }

    Ok(pool)
}
