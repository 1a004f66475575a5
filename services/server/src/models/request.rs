//! Item request models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::item::ItemResponse;

/// Payload for item request creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequestPayload {
    pub description: String,
}

/// Response for a bare item request
#[derive(Debug, Clone, Serialize)]
pub struct ItemRequestResponse {
    pub id: i64,
    pub description: String,
    pub created: DateTime<Utc>,
}

/// Item request enriched with the items created to fulfill it
#[derive(Debug, Clone, Serialize)]
pub struct ItemRequestWithItemsResponse {
    pub id: i64,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemResponse>,
}
