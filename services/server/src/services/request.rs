//! Item request service

use crate::error::{ApiError, ApiResult};
use crate::models::request::{ItemRequestResponse, ItemRequestWithItemsResponse};
use crate::repositories::UserRepository;
use crate::repositories::item::{ItemRecord, ItemRepository};
use crate::repositories::request::ItemRequestRepository;
use crate::services::page_bounds;

/// Item request service: open calls for items not yet in the catalog
#[derive(Clone)]
pub struct ItemRequestService {
    requests: ItemRequestRepository,
    items: ItemRepository,
    users: UserRepository,
}

impl ItemRequestService {
    pub fn new(
        requests: ItemRequestRepository,
        items: ItemRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            requests,
            items,
            users,
        }
    }

    async fn require_user(&self, user_id: i64) -> ApiResult<()> {
        if !self.users.exists(user_id).await? {
            return Err(ApiError::NotFound(format!(
                "User with id = {} not found",
                user_id
            )));
        }
        Ok(())
    }

    async fn with_items(
        &self,
        request: ItemRequestResponse,
    ) -> ApiResult<ItemRequestWithItemsResponse> {
        let items = self.items.find_by_request_id(request.id).await?;
        Ok(ItemRequestWithItemsResponse {
            id: request.id,
            description: request.description,
            created: request.created,
            items: items.into_iter().map(ItemRecord::into_response).collect(),
        })
    }

    pub async fn create(
        &self,
        user_id: i64,
        description: &str,
    ) -> ApiResult<ItemRequestResponse> {
        self.require_user(user_id).await?;
        Ok(self.requests.create(user_id, description).await?)
    }

    /// The user's own requests, newest first, with fulfilling items
    pub async fn find_own(&self, user_id: i64) -> ApiResult<Vec<ItemRequestWithItemsResponse>> {
        self.require_user(user_id).await?;
        let requests = self.requests.find_by_requestor(user_id).await?;

        let mut result = Vec::with_capacity(requests.len());
        for request in requests {
            result.push(self.with_items(request).await?);
        }
        Ok(result)
    }

    /// Other users' requests, oldest first, paginated
    pub async fn find_all_paged(
        &self,
        user_id: i64,
        from: i64,
        size: i64,
    ) -> ApiResult<Vec<ItemRequestWithItemsResponse>> {
        self.require_user(user_id).await?;
        let (limit, offset) = page_bounds(from, size)?;
        let requests = self.requests.find_all_excluding(user_id, limit, offset).await?;

        let mut result = Vec::with_capacity(requests.len());
        for request in requests {
            result.push(self.with_items(request).await?);
        }
        Ok(result)
    }

    pub async fn find_by_id(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> ApiResult<ItemRequestWithItemsResponse> {
        self.require_user(user_id).await?;
        let request = self.requests.find_by_id(request_id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Request with id = {} not found", request_id))
        })?;
        self.with_items(request).await
    }
}
