//! Entity records for the Fruit and Person resources.

use serde::{Deserialize, Serialize};

/// One row of the fruit table. `id` is None until the store assigns one on
/// first save; every record handed out by the API carries a non-null id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Fruit {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
}

impl Fruit {
    /// A fruit that has not been persisted yet.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// One row of the person table. Names are unique; the constraint lives in the
/// store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
}
