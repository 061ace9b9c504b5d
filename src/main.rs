//! Server binary: env config, database bootstrap, migrations, seed, serve.

use orchard_api::{
    apply_migrations, connect_pool, ensure_database_exists, routes, seed_demo_fruits, AppState,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("orchard_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/orchard".into());
    ensure_database_exists(&database_url).await?;
    let pool = connect_pool(&database_url).await?;

    apply_migrations(&pool).await?;
    let seed = std::env::var("SEED_DEMO_DATA").map(|v| v != "false").unwrap_or(true);
    if seed {
        seed_demo_fruits(&pool).await?;
    }

    let state = AppState::postgres(pool);
    let app = routes::app(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
