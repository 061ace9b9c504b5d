//! Repository abstraction: capability-set traits over a relational store,
//! with one adapter per store technology.

mod memory;
mod postgres;

pub use memory::{MemoryFruitRepository, MemoryPersonRepository};
pub use postgres::{PgFruitRepository, PgPersonRepository};

use crate::error::AppError;
use crate::model::{Fruit, Person};
use async_trait::async_trait;

/// Record-level persistence for the Fruit resource.
///
/// `save` inserts when the entity has no id and replaces the existing row
/// otherwise; the returned record always carries the store-assigned id.
#[async_trait]
pub trait FruitRepository: Send + Sync {
    /// All fruits, ascending by id.
    async fn find_all(&self) -> Result<Vec<Fruit>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Fruit>, AppError>;

    /// Fruits whose color equals `color` exactly (case-sensitive), ascending by id.
    async fn find_by_color(&self, color: &str) -> Result<Vec<Fruit>, AppError>;

    async fn save(&self, fruit: Fruit) -> Result<Fruit, AppError>;

    /// Returns false when no row with `id` existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

/// Record-level persistence for the Person resource. Deletion is not exposed.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All persons, ascending by name.
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError>;

    async fn save(&self, person: Person) -> Result<Person, AppError>;
}
