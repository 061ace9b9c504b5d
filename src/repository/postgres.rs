//! PostgreSQL adapters for the repository traits.
//!
//! Every operation is a single sqlx statement; writes use RETURNING so the
//! caller gets the row exactly as stored.

use crate::error::AppError;
use crate::model::{Fruit, Person};
use crate::repository::{FruitRepository, PersonRepository};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgFruitRepository {
    pool: PgPool,
}

impl PgFruitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FruitRepository for PgFruitRepository {
    async fn find_all(&self) -> Result<Vec<Fruit>, AppError> {
        let fruits = sqlx::query_as::<_, Fruit>("SELECT id, name, color FROM fruit ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(fruits)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fruit>, AppError> {
        let fruit =
            sqlx::query_as::<_, Fruit>("SELECT id, name, color FROM fruit WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(fruit)
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Fruit>, AppError> {
        let fruits = sqlx::query_as::<_, Fruit>(
            "SELECT id, name, color FROM fruit WHERE color = $1 ORDER BY id",
        )
        .bind(color)
        .fetch_all(&self.pool)
        .await?;
        Ok(fruits)
    }

    async fn save(&self, fruit: Fruit) -> Result<Fruit, AppError> {
        let saved = match fruit.id {
            Some(id) => {
                tracing::debug!(id, "updating fruit");
                sqlx::query_as::<_, Fruit>(
                    "UPDATE fruit SET name = $2, color = $3 WHERE id = $1 RETURNING id, name, color",
                )
                .bind(id)
                .bind(&fruit.name)
                .bind(&fruit.color)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("fruit with id {id} does not exist")))?
            }
            None => {
                tracing::debug!(name = %fruit.name, "inserting fruit");
                sqlx::query_as::<_, Fruit>(
                    "INSERT INTO fruit (name, color) VALUES ($1, $2) RETURNING id, name, color",
                )
                .bind(&fruit.name)
                .bind(&fruit.color)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM fruit WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let people = sqlx::query_as::<_, Person>("SELECT id, name FROM person ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(people)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError> {
        let person = sqlx::query_as::<_, Person>("SELECT id, name FROM person WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(person)
    }

    // A unique-name violation comes back as sqlx::Error::Database here; there
    // is no duplicate pre-check.
    async fn save(&self, person: Person) -> Result<Person, AppError> {
        let saved = match person.id {
            Some(id) => sqlx::query_as::<_, Person>(
                "UPDATE person SET name = $2 WHERE id = $1 RETURNING id, name",
            )
            .bind(id)
            .bind(&person.name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("person with id {id} does not exist")))?,
            None => sqlx::query_as::<_, Person>(
                "INSERT INTO person (name) VALUES ($1) RETURNING id, name",
            )
            .bind(&person.name)
            .fetch_one(&self.pool)
            .await?,
        };
        Ok(saved)
    }
}
