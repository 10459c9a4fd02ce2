use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod seed;
mod state;

use common::config::ServerConfig;

use crate::{repositories::WriteUpRepository, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting write-up service");

    // Seed the in-process library; it lives for the lifetime of the
    // service and is shared by every client session.
    let write_ups = WriteUpRepository::seeded(seed::write_ups());
    info!("Library seeded with {} write-ups", write_ups.count().await);

    let app_state = AppState { write_ups };

    // Start the web server
    let config = ServerConfig::from_env("WRITEUPS_ADDR", "0.0.0.0:3001")?;
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Write-up service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
