//! Greeting handlers: plain-text hello endpoints.

use crate::greeting::greeting;
use axum::extract::Path;

/// GET /hello: fixed plain-text response.
pub async fn hello() -> &'static str {
    "hello"
}

/// GET /greeting/:name: greets the caller by name.
pub async fn greet(Path(name): Path<String>) -> String {
    greeting(&name)
}
