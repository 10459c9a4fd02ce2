use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod seed;
mod state;
mod validation;

use common::config::ServerConfig;

use crate::{repositories::UserRepository, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting directory service");

    // Seed the in-process directory; it lives for the lifetime of the
    // service and is shared by every client session.
    let users = UserRepository::seeded(seed::users());
    info!("Directory seeded with {} users", users.count().await);

    let app_state = AppState { users };

    // Start the web server
    let config = ServerConfig::from_env("DIRECTORY_ADDR", "0.0.0.0:3000")?;
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Directory service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
