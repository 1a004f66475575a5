use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod extract;
mod models;
mod repositories;
mod routes;
mod services;
mod state;

use common::database::{DatabaseConfig, init_pool};

use crate::repositories::UserRepository;
use crate::repositories::booking::BookingRepository;
use crate::repositories::item::{CommentRepository, ItemRepository};
use crate::repositories::request::ItemRequestRepository;
use crate::services::UserService;
use crate::services::booking::BookingService;
use crate::services::item::ItemService;
use crate::services::request::ItemRequestService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting ShareIt server service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply schema migrations
    sqlx::migrate!().run(&pool).await?;
    info!("Database migrations applied");

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let item_repository = ItemRepository::new(pool.clone());
    let comment_repository = CommentRepository::new(pool.clone());
    let booking_repository = BookingRepository::new(pool.clone());
    let request_repository = ItemRequestRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        user_service: UserService::new(user_repository.clone()),
        item_service: ItemService::new(
            item_repository.clone(),
            comment_repository,
            booking_repository.clone(),
            user_repository.clone(),
        ),
        booking_service: BookingService::new(
            booking_repository,
            item_repository.clone(),
            user_repository.clone(),
        ),
        request_service: ItemRequestService::new(
            request_repository,
            item_repository,
            user_repository,
        ),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:9090".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("ShareIt server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
