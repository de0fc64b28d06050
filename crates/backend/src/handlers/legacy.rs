use axum::Json;
use contracts::domain::a001_inventory_item::LegacyItemsResponse;

use crate::domain::a001_inventory_item::service::{self, InventoryError};
use crate::shared::data::db::get_connection;

/// GET /legacy/items
///
/// Deprecated read path kept for old clients: same rows, `{data: [...]}` envelope.
pub async fn list_items() -> Result<Json<LegacyItemsResponse>, InventoryError> {
    let items = service::list_all(get_connection()).await?;
    Ok(Json(items.into()))
}
