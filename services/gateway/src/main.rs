use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod client;
mod error;
mod extract;
mod models;
mod routes;
mod state;
mod validation;

use crate::client::ServerClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting ShareIt gateway service");

    let client = ServerClient::from_env();
    let app_state = AppState { client };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = std::env::var("GATEWAY_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("ShareIt gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
