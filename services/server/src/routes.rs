//! Server routes
//!
//! Handlers stay thin: extract, delegate to the service, serialize.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    error::ApiError,
    extract::XSharerUserId,
    models::{CreateUserRequest, PageParams, UpdateUserRequest},
    models::booking::{ApproveParams, CreateBookingRequest, StateParams},
    models::item::{CreateCommentRequest, CreateItemRequest, SearchParams, UpdateItemRequest},
    models::request::CreateItemRequestPayload,
    state::AppState,
};

/// Create the router for the server service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user).get(get_users))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/items", post(create_item).get(get_own_items))
        .route("/items/search", get(search_items))
        .route(
            "/items/:id",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/items/:id/comment", post(create_comment))
        .route("/bookings", post(create_booking).get(get_bookings_for_booker))
        .route("/bookings/owner", get(get_bookings_for_owner))
        .route(
            "/bookings/:id",
            get(get_booking).patch(approve_booking).delete(delete_booking),
        )
        .route("/requests", post(create_request).get(get_own_requests))
        .route("/requests/all", get(browse_requests))
        .route("/requests/:id", get(get_request))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match common::database::health_check(&state.db_pool).await {
        Ok(_) => Json(json!({
            "status": "ok",
            "service": "shareit-server"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "unavailable"})),
            )
                .into_response()
        }
    }
}

// --- users ---

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.create(&payload.name, &payload.email).await?;
    Ok(Json(user))
}

pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_service.find_all().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .update(id, payload.name.as_deref(), payload.email.as_deref())
        .await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.user_service.delete_by_id(id).await?;
    Ok(Json(json!({"message": "User deleted"})))
}

// --- items ---

pub async fn create_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(payload): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("POST /items by user {}: {}", user_id, payload.name);
    let item = state.item_service.create(user_id, &payload).await?;
    Ok(Json(item))
}

pub async fn get_own_items(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .item_service
        .find_all(user_id, page.from_or_default(), page.size_or_default())
        .await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_service.find_by_id(id, user_id).await?;
    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_service.update(id, user_id, &payload).await?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.item_service.delete_by_id(id).await?;
    Ok(Json(json!({"message": "Item deleted"})))
}

pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .item_service
        .search(
            params.text.as_deref().unwrap_or(""),
            params.from.unwrap_or(0),
            params.size.unwrap_or(20),
        )
        .await?;
    Ok(Json(items))
}

pub async fn create_comment(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state.item_service.add_comment(user_id, id, &payload.text).await?;
    Ok(Json(comment))
}

// --- bookings ---

pub async fn create_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("POST /bookings by user {} for item {}", user_id, payload.item_id);
    let booking = state.booking_service.create(user_id, &payload).await?;
    Ok(Json(booking))
}

pub async fn approve_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Query(params): Query<ApproveParams>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state
        .booking_service
        .approve(user_id, id, params.approved)
        .await?;
    Ok(Json(booking))
}

pub async fn get_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state.booking_service.find_by_id(id, user_id).await?;
    Ok(Json(booking))
}

pub async fn get_bookings_for_booker(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(params): Query<StateParams>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state
        .booking_service
        .find_all_for_booker(
            user_id,
            params.state.as_deref().unwrap_or("ALL"),
            params.from.unwrap_or(0),
            params.size.unwrap_or(20),
        )
        .await?;
    Ok(Json(bookings))
}

pub async fn get_bookings_for_owner(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(params): Query<StateParams>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state
        .booking_service
        .find_all_for_owner(
            user_id,
            params.state.as_deref().unwrap_or("ALL"),
            params.from.unwrap_or(0),
            params.size.unwrap_or(20),
        )
        .await?;
    Ok(Json(bookings))
}

pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.booking_service.delete_by_id(id).await?;
    Ok(Json(json!({"message": "Booking deleted"})))
}

// --- item requests ---

pub async fn create_request(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(payload): Json<CreateItemRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = state
        .request_service
        .create(user_id, &payload.description)
        .await?;
    Ok(Json(request))
}

pub async fn get_own_requests(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
) -> Result<impl IntoResponse, ApiError> {
    let requests = state.request_service.find_own(user_id).await?;
    Ok(Json(requests))
}

pub async fn browse_requests(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let requests = state
        .request_service
        .find_all_paged(user_id, page.from_or_default(), page.size_or_default())
        .await?;
    Ok(Json(requests))
}

pub async fn get_request(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let request = state.request_service.find_by_id(user_id, id).await?;
    Ok(Json(request))
}
