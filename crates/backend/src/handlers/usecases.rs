use axum::extract::rejection::JsonRejection;
use axum::Json;
use contracts::usecases::u501_apply_inventory_actions::{
    ApplyActionsRequest, ApplyActionsResponse,
};

use crate::domain::a001_inventory_item::service::InventoryError;
use crate::shared::data::db::get_connection;
use crate::usecases::u501_apply_inventory_actions::ApplyActionsExecutor;

// ============================================================================
// UseCase u501: Apply inventory actions
// ============================================================================

/// POST /inventory/actions
pub async fn u501_apply_actions(
    request: Result<Json<ApplyActionsRequest>, JsonRejection>,
) -> Result<Json<ApplyActionsResponse>, InventoryError> {
    let Json(request) = request?;
    let response = ApplyActionsExecutor::new()
        .execute(get_connection(), request)
        .await?;
    Ok(Json(response))
}
