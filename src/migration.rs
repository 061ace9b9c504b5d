//! Schema bootstrap and demo seed data.

use crate::error::AppError;
use sqlx::PgPool;

/// Idempotent DDL for the two resource tables. person.name carries the unique
/// constraint; a violation surfaces as a database error, not a validation error.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fruit (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            color TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS person (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

const DEMO_FRUITS: &[(&str, &str)] = &[
    ("Cherry", "Red"),
    ("Apple", "Red"),
    ("Banana", "Yellow"),
    ("Avocado", "Green"),
    ("Strawberry", "Red"),
];

/// Insert the demo fruits when the table is empty, so a fresh database has
/// something to list. No-op otherwise; restarts do not duplicate rows.
pub async fn seed_demo_fruits(pool: &PgPool) -> Result<(), AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fruit")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }
    for (name, color) in DEMO_FRUITS {
        sqlx::query("INSERT INTO fruit (name, color) VALUES ($1, $2)")
            .bind(name)
            .bind(color)
            .execute(pool)
            .await?;
    }
    tracing::info!(count = DEMO_FRUITS.len(), "seeded demo fruits");
    Ok(())
}
