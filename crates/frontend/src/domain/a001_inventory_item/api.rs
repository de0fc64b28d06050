//! HTTP client for the inventory store
//!
//! `GET/POST /inventory`, `PUT/DELETE /inventory/{id}`. No logic beyond
//! serialization; callers decide what a failure means for the page.

use async_trait::async_trait;
use contracts::domain::a001_inventory_item::{
    InventoryItem, InventoryItemId, ItemPayload, MutationResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_url;

const INVENTORY_PATH: &str = "/inventory";

/// Ошибка обращения к хранилищу позиций
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Failed to fetch: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Хранилище позиций склада
#[async_trait(?Send)]
pub trait ItemStore {
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError>;

    async fn create(&self, payload: &ItemPayload) -> Result<MutationResponse, StoreError>;

    async fn update(
        &self,
        id: InventoryItemId,
        payload: &ItemPayload,
    ) -> Result<MutationResponse, StoreError>;

    async fn delete(&self, id: InventoryItemId) -> Result<MutationResponse, StoreError>;
}

/// The backend store reached through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpItemStore;

fn collection_url() -> String {
    api_url(INVENTORY_PATH)
}

fn item_url(id: InventoryItemId) -> String {
    api_url(&format!("{}/{}", INVENTORY_PATH, id))
}

fn network(e: gloo_net::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

/// Non-2xx bodies carry `{message}`; fall back to the status text.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<MutationResponse>().await {
            Ok(body) => body.message,
            Err(_) => response.status_text(),
        };
        return Err(StoreError::Status { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ItemStore for HttpItemStore {
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let response = Request::get(&collection_url())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn create(&self, payload: &ItemPayload) -> Result<MutationResponse, StoreError> {
        let response = Request::post(&collection_url())
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn update(
        &self,
        id: InventoryItemId,
        payload: &ItemPayload,
    ) -> Result<MutationResponse, StoreError> {
        let response = Request::put(&item_url(id))
            .json(payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn delete(&self, id: InventoryItemId) -> Result<MutationResponse, StoreError> {
        let response = Request::delete(&item_url(id))
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }
}
