//! Application state shared across handlers

use sqlx::PgPool;

use crate::services::UserService;
use crate::services::booking::BookingService;
use crate::services::item::ItemService;
use crate::services::request::ItemRequestService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_service: UserService,
    pub item_service: ItemService,
    pub booking_service: BookingService,
    pub request_service: ItemRequestService,
}
