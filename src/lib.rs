//! Demonstration CRUD backend: Fruit and Person resources over HTTP, backed by PostgreSQL.

pub mod error;
pub mod greeting;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use migration::{apply_migrations, seed_demo_fruits};
pub use model::{Fruit, Person};
pub use repository::{FruitRepository, PersonRepository};
pub use routes::{app, common_routes, fruit_routes, greeting_routes, person_routes};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
