use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_inventory_item::{
    InventoryItem, InventoryItemId, ItemPayload, MutationResponse,
};

use crate::domain::a001_inventory_item::service::{self, InventoryError};
use crate::shared::data::db::get_connection;

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            InventoryError::Storage(e) => tracing::error!("Inventory storage failure: {:#}", e),
            other => tracing::warn!("Inventory request rejected: {}", other),
        }
        (status, Json(MutationResponse::message(self.to_string()))).into_response()
    }
}

// Отклонённый экстрактор отвечает тем же `{message}`, что и остальные ошибки
impl From<JsonRejection> for InventoryError {
    fn from(rejection: JsonRejection) -> Self {
        InventoryError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for InventoryError {
    fn from(rejection: PathRejection) -> Self {
        InventoryError::Validation(rejection.body_text())
    }
}

/// GET /inventory
pub async fn list_all() -> Result<Json<Vec<InventoryItem>>, InventoryError> {
    let items = service::list_all(get_connection()).await?;
    Ok(Json(items))
}

/// POST /inventory
pub async fn create(
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), InventoryError> {
    let Json(payload) = payload?;
    let item = service::create(get_connection(), payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::with_item("New item added successfully", item)),
    ))
}

/// PUT|PATCH /inventory/:id
pub async fn update(
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<MutationResponse>, InventoryError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let item = service::update(get_connection(), InventoryItemId(id), payload).await?;
    Ok(Json(MutationResponse::with_item(
        "Item updated successfully",
        item,
    )))
}

/// DELETE /inventory/:id
pub async fn delete(
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MutationResponse>, InventoryError> {
    let Path(id) = id?;
    service::delete(get_connection(), InventoryItemId(id)).await?;
    Ok(Json(MutationResponse::message("Item deleted successfully")))
}
