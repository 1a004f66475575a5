//! HTTP client forwarding validated requests to the server tier
//!
//! The gateway relays the upstream status code and body verbatim so
//! clients see exactly what the server decided.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use reqwest::Method;
use serde_json::Value;

use crate::error::GatewayResult;
use crate::extract::SHARER_USER_ID;

/// Client for the server service
#[derive(Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from `SHAREIT_SERVER_URL`, with a local default
    pub fn from_env() -> Self {
        let base_url = std::env::var("SHAREIT_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:9090".to_string());
        Self::new(base_url)
    }

    /// Forward a request and relay the upstream status and body
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        user_id: Option<i64>,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> GatewayResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        if let Some(user_id) = user_id {
            request = request.header(SHARER_USER_ID, user_id);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let upstream = request.send().await?;
        let status = StatusCode::from_u16(upstream.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = upstream.bytes().await?;

        Ok((
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response())
    }

    pub async fn get(
        &self,
        path: &str,
        user_id: Option<i64>,
        query: &[(&str, String)],
    ) -> GatewayResult<Response> {
        self.forward(Method::GET, path, user_id, query, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        user_id: Option<i64>,
        body: &Value,
    ) -> GatewayResult<Response> {
        self.forward(Method::POST, path, user_id, &[], Some(body))
            .await
    }

    pub async fn patch(
        &self,
        path: &str,
        user_id: Option<i64>,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> GatewayResult<Response> {
        self.forward(Method::PATCH, path, user_id, query, body).await
    }

    pub async fn delete(&self, path: &str, user_id: Option<i64>) -> GatewayResult<Response> {
        self.forward(Method::DELETE, path, user_id, &[], None).await
    }
}
