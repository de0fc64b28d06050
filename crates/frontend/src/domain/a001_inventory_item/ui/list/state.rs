use contracts::domain::a001_inventory_item::{InventoryItem, InventoryItemId};
use leptos::prelude::*;

use super::row::{DisplayRow, RowBinding};
use crate::shared::notices::NoticeBoard;

/// What a rendered row depends on; the edit buffer text is not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey {
    pub item: InventoryItem,
    pub editing: bool,
}

/// Строки таблицы в порядке, полученном от хранилища
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryTable {
    rows: Vec<RowBinding>,
    pub is_loaded: bool,
}

impl InventoryTable {
    /// Wipe and rebuild: every row comes back in Display, no client-side sort.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        self.rows = items.into_iter().map(RowBinding::new).collect();
        self.is_loaded = true;
    }

    pub fn rows(&self) -> &[RowBinding] {
        &self.rows
    }

    pub fn row(&self, id: InventoryItemId) -> Option<&RowBinding> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn row_mut(&mut self, id: InventoryItemId) -> Option<&mut RowBinding> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    pub fn row_keys(&self) -> Vec<RowKey> {
        self.rows
            .iter()
            .map(|r| RowKey {
                item: r.item().clone(),
                editing: r.is_editing(),
            })
            .collect()
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.rows.iter().map(RowBinding::render).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Состояние страницы склада
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryPageModel {
    pub table: InventoryTable,
    pub notices: NoticeBoard,
}

pub fn create_state() -> RwSignal<InventoryPageModel> {
    RwSignal::new(InventoryPageModel::default())
}
