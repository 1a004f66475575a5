//! Gateway routes
//!
//! Each handler validates the request structurally, then forwards it to
//! the server tier. Bodies are forwarded as the original JSON so nothing
//! is lost or reshaped in transit.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{
    error::{GatewayError, GatewayResult},
    extract::XSharerUserId,
    models::{
        ApproveParams, CreateBookingPayload, CreateCommentPayload, CreateItemPayload,
        CreateItemRequestPayload, CreateUserPayload, PageParams, SearchParams, StateParams,
        UpdateUserPayload,
    },
    state::AppState,
    validation,
};

/// Create the router for the gateway service
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

/// Parse the raw body into a validation view without consuming it
fn parse<T: DeserializeOwned>(body: &Value) -> GatewayResult<T> {
    serde_json::from_value(body.clone())
        .map_err(|e| GatewayError::Validation(format!("Invalid request body: {}", e)))
}

fn page_query(from: Option<i64>, size: Option<i64>) -> GatewayResult<Vec<(&'static str, String)>> {
    let from = from.unwrap_or(0);
    let size = size.unwrap_or(20);
    validation::validate_page(from, size).map_err(GatewayError::Validation)?;
    Ok(vec![("from", from.to_string()), ("size", size.to_string())])
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "shareit-gateway"
    }))
}

// --- users ---

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: CreateUserPayload = parse(&body)?;
    validation::validate_new_user(&payload).map_err(GatewayError::Validation)?;
    tracing::info!("POST /users email={}", payload.email.as_deref().unwrap_or(""));
    state.client.post("/users", None, &body).await
}

pub async fn get_users(State(state): State<AppState>) -> GatewayResult<impl IntoResponse> {
    state.client.get("/users", None, &[]).await
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state.client.get(&format!("/users/{}", id), None, &[]).await
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: UpdateUserPayload = parse(&body)?;
    validation::validate_user_patch(&payload).map_err(GatewayError::Validation)?;
    state
        .client
        .patch(&format!("/users/{}", id), None, &[], Some(&body))
        .await
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state.client.delete(&format!("/users/{}", id), None).await
}

// --- items ---

pub async fn create_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: CreateItemPayload = parse(&body)?;
    validation::validate_new_item(&payload).map_err(GatewayError::Validation)?;
    tracing::info!(
        "POST /items user={} name={}",
        user_id,
        payload.name.as_deref().unwrap_or("")
    );
    state.client.post("/items", Some(user_id), &body).await
}

pub async fn get_own_items(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(page): Query<PageParams>,
) -> GatewayResult<impl IntoResponse> {
    let query = page_query(page.from, page.size)?;
    state.client.get("/items", Some(user_id), &query).await
}

pub async fn get_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state
        .client
        .get(&format!("/items/{}", id), Some(user_id), &[])
        .await
}

pub async fn update_item(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    state
        .client
        .patch(&format!("/items/{}", id), Some(user_id), &[], Some(&body))
        .await
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state.client.delete(&format!("/items/{}", id), None).await
}

pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> GatewayResult<impl IntoResponse> {
    let text = params
        .text
        .ok_or_else(|| GatewayError::Validation("text is required".to_string()))?;
    let mut query = page_query(params.from, params.size)?;
    query.push(("text", text));
    state.client.get("/items/search", None, &query).await
}

pub async fn create_comment(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: CreateCommentPayload = parse(&body)?;
    validation::validate_new_comment(&payload).map_err(GatewayError::Validation)?;
    state
        .client
        .post(&format!("/items/{}/comment", id), Some(user_id), &body)
        .await
}

// --- bookings ---

pub async fn create_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: CreateBookingPayload = parse(&body)?;
    validation::validate_new_booking(&payload, Utc::now()).map_err(GatewayError::Validation)?;
    tracing::info!(
        "POST /bookings user={} item={}",
        user_id,
        payload.item_id.unwrap_or_default()
    );
    state.client.post("/bookings", Some(user_id), &body).await
}

pub async fn approve_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
    Query(params): Query<ApproveParams>,
) -> GatewayResult<impl IntoResponse> {
    let approved = params.approved.ok_or_else(|| {
        GatewayError::Validation("The approved parameter must be provided".to_string())
    })?;
    state
        .client
        .patch(
            &format!("/bookings/{}", id),
            Some(user_id),
            &[("approved", approved.to_string())],
            None,
        )
        .await
}

pub async fn get_booking(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state
        .client
        .get(&format!("/bookings/{}", id), Some(user_id), &[])
        .await
}

pub async fn get_bookings_for_booker(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(params): Query<StateParams>,
) -> GatewayResult<impl IntoResponse> {
    let mut query = page_query(params.from, params.size)?;
    query.push(("state", params.state.unwrap_or_else(|| "ALL".to_string())));
    state.client.get("/bookings", Some(user_id), &query).await
}

pub async fn get_bookings_for_owner(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(params): Query<StateParams>,
) -> GatewayResult<impl IntoResponse> {
    let mut query = page_query(params.from, params.size)?;
    query.push(("state", params.state.unwrap_or_else(|| "ALL".to_string())));
    state
        .client
        .get("/bookings/owner", Some(user_id), &query)
        .await
}

pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state.client.delete(&format!("/bookings/{}", id), None).await
}

// --- item requests ---

pub async fn create_request(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Json(body): Json<Value>,
) -> GatewayResult<impl IntoResponse> {
    let payload: CreateItemRequestPayload = parse(&body)?;
    validation::validate_new_request(&payload).map_err(GatewayError::Validation)?;
    state.client.post("/requests", Some(user_id), &body).await
}

pub async fn get_own_requests(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
) -> GatewayResult<impl IntoResponse> {
    state.client.get("/requests", Some(user_id), &[]).await
}

pub async fn browse_requests(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Query(page): Query<PageParams>,
) -> GatewayResult<impl IntoResponse> {
    let query = page_query(page.from, page.size)?;
    state.client.get("/requests/all", Some(user_id), &query).await
}

pub async fn get_request(
    State(state): State<AppState>,
    XSharerUserId(user_id): XSharerUserId,
    Path(id): Path<i64>,
) -> GatewayResult<impl IntoResponse> {
    state
        .client
        .get(&format!("/requests/{}", id), Some(user_id), &[])
        .await
}
