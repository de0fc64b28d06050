//! Синхронизация таблицы с хранилищем
//!
//! Every successful mutation is followed by a full reload of the table.
//! Failures leave a notice and put the page back into a safe state.
//! Nothing here serializes overlapping calls.

use contracts::domain::a001_inventory_item::{InventoryItemId, ItemPayload};

use super::row::RowBinding;
use super::state::InventoryPageModel;
use crate::domain::a001_inventory_item::api::ItemStore;
use crate::shared::model_cell::ModelCell;

/// Reload all rows. On failure the previous rows stay as they were.
pub async fn refresh<S, M>(store: &S, model: &M) -> bool
where
    S: ItemStore + ?Sized,
    M: ModelCell<InventoryPageModel> + ?Sized,
{
    match store.list().await {
        Ok(items) => {
            log::debug!("Inventory loaded: {} item(s)", items.len());
            model.update_model(|m| m.table.replace_all(items));
            true
        }
        Err(e) => {
            model.update_model(|m| {
                m.notices.error(format!("Failed to load inventory: {}", e));
            });
            false
        }
    }
}

/// Send the edit buffer of row `id` as an update.
///
/// A rejected update reverts the row to Display with its last snapshot.
pub async fn confirm_edit<S, M>(store: &S, model: &M, id: InventoryItemId) -> bool
where
    S: ItemStore + ?Sized,
    M: ModelCell<InventoryPageModel> + ?Sized,
{
    let payload = model
        .read_model(|m| m.table.row(id).and_then(RowBinding::update_payload))
        .flatten();
    let Some(payload) = payload else {
        log::warn!("confirm_edit: row {} is not being edited", id);
        return false;
    };

    match store.update(id, &payload).await {
        Ok(response) => {
            log::info!("{}", response.message);
            if !refresh(store, model).await {
                model.update_model(|m| {
                    if let Some(row) = m.table.row_mut(id) {
                        row.cancel_edit();
                    }
                });
            }
            true
        }
        Err(e) => {
            model.update_model(|m| {
                if let Some(row) = m.table.row_mut(id) {
                    row.cancel_edit();
                }
                m.notices.error(format!("Failed to update item {}: {}", id, e));
            });
            false
        }
    }
}

/// On failure the row stays visible and unchanged.
pub async fn delete_item<S, M>(store: &S, model: &M, id: InventoryItemId) -> bool
where
    S: ItemStore + ?Sized,
    M: ModelCell<InventoryPageModel> + ?Sized,
{
    match store.delete(id).await {
        Ok(response) => {
            log::info!("{}", response.message);
            refresh(store, model).await;
            true
        }
        Err(e) => {
            model.update_model(|m| {
                m.notices.error(format!("Failed to delete item {}: {}", id, e));
            });
            false
        }
    }
}

pub async fn add_item<S, M>(store: &S, model: &M, payload: ItemPayload) -> bool
where
    S: ItemStore + ?Sized,
    M: ModelCell<InventoryPageModel> + ?Sized,
{
    match store.create(&payload).await {
        Ok(response) => {
            log::info!("{}", response.message);
            refresh(store, model).await;
            true
        }
        Err(e) => {
            model.update_model(|m| {
                m.notices.error(format!("Failed to add item: {}", e));
            });
            false
        }
    }
}
