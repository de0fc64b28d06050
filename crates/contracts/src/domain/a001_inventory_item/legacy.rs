//! Deprecated read path: rows wrapped in `{data: [...]}` with the column
//! named `name` instead of `item_name`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{InventoryItem, InventoryItemId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyItemRow {
    pub id: InventoryItemId,
    pub name: String,
    pub quantity: i32,
    pub expiration_date: Option<NaiveDate>,
}

impl From<InventoryItem> for LegacyItemRow {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.item_name,
            quantity: item.quantity,
            expiration_date: item.expiration_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyItemsResponse {
    pub data: Vec<LegacyItemRow>,
}

impl From<Vec<InventoryItem>> for LegacyItemsResponse {
    fn from(items: Vec<InventoryItem>) -> Self {
        Self {
            data: items.into_iter().map(Into::into).collect(),
        }
    }
}
