//! Shared application state: repository handles injected into every handler.

use crate::repository::{
    FruitRepository, MemoryFruitRepository, MemoryPersonRepository, PersonRepository,
    PgFruitRepository, PgPersonRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fruits: Arc<dyn FruitRepository>,
    pub people: Arc<dyn PersonRepository>,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            fruits: Arc::new(PgFruitRepository::new(pool.clone())),
            people: Arc::new(PgPersonRepository::new(pool)),
        }
    }

    /// State backed by process-local stores; used by the test suite and for
    /// running without a database.
    pub fn in_memory() -> Self {
        Self {
            fruits: Arc::new(MemoryFruitRepository::default()),
            people: Arc::new(MemoryPersonRepository::default()),
        }
    }
}
