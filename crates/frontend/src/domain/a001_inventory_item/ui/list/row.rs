use contracts::domain::a001_inventory_item::{InventoryItem, InventoryItemId, ItemPayload};

/// Текст ячеек строки в режиме просмотра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: InventoryItemId,
    pub item_name: String,
    pub quantity: String,
    pub expiration_date: String,
}

/// Содержимое полей ввода строки в режиме редактирования
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub item_name: String,
    pub quantity: String,
    pub expiration_date: String,
}

impl EditBuffer {
    /// Missing expiration date opens as an empty field, not the placeholder.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            quantity: item.quantity.to_string(),
            expiration_date: item.expiration_text(),
        }
    }

    /// Quantity goes out as an integer or `null`; the store decides what is valid.
    pub fn to_payload(&self) -> ItemPayload {
        ItemPayload::from_form(&self.item_name, &self.quantity, &self.expiration_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    ItemName,
    Quantity,
    ExpirationDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Display,
    Editing(EditBuffer),
}

/// Строка таблицы, привязанная к снимку позиции на момент последнего обновления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBinding {
    item: InventoryItem,
    state: RowState,
}

/// Pure function of the snapshot.
pub fn render(item: &InventoryItem) -> DisplayRow {
    DisplayRow {
        id: item.id,
        item_name: item.item_name.clone(),
        quantity: item.quantity.to_string(),
        expiration_date: item.expiration_display(),
    }
}

impl RowBinding {
    pub fn new(item: InventoryItem) -> Self {
        Self {
            item,
            state: RowState::Display,
        }
    }

    pub fn id(&self) -> InventoryItemId {
        self.item.id
    }

    pub fn item(&self) -> &InventoryItem {
        &self.item
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, RowState::Editing(_))
    }

    pub fn render(&self) -> DisplayRow {
        render(&self.item)
    }

    /// Display -> Editing. Re-entering while editing keeps the typed text.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.state = RowState::Editing(EditBuffer::from_item(&self.item));
        }
    }

    /// Editing -> Display from the last known snapshot, never re-fetched.
    pub fn cancel_edit(&mut self) {
        self.state = RowState::Display;
    }

    /// `false` if the row is not being edited.
    pub fn set_field(&mut self, field: EditField, value: String) -> bool {
        let RowState::Editing(buffer) = &mut self.state else {
            return false;
        };
        match field {
            EditField::ItemName => buffer.item_name = value,
            EditField::Quantity => buffer.quantity = value,
            EditField::ExpirationDate => buffer.expiration_date = value,
        }
        true
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        match &self.state {
            RowState::Editing(buffer) => Some(buffer),
            RowState::Display => None,
        }
    }

    /// Payload for confirm; `None` outside of Editing.
    pub fn update_payload(&self) -> Option<ItemPayload> {
        self.edit_buffer().map(EditBuffer::to_payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn milk() -> InventoryItem {
        InventoryItem {
            id: InventoryItemId(7),
            item_name: "Milk".into(),
            quantity: 2,
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        }
    }

    #[test]
    fn test_render_shows_placeholder_for_missing_date() {
        let mut item = milk();
        item.expiration_date = None;
        let row = render(&item);
        assert_eq!(row.expiration_date, "N/A");
        assert_eq!(row.quantity, "2");

        let mut binding = RowBinding::new(item);
        binding.begin_edit();
        assert_eq!(binding.edit_buffer().unwrap().expiration_date, "");
    }

    #[test]
    fn test_begin_then_cancel_restores_display() {
        let mut binding = RowBinding::new(milk());
        let before = binding.render();

        binding.begin_edit();
        assert!(binding.is_editing());
        assert_eq!(
            binding.edit_buffer().unwrap(),
            &EditBuffer {
                item_name: "Milk".into(),
                quantity: "2".into(),
                expiration_date: "2025-01-01".into(),
            }
        );

        binding.set_field(EditField::ItemName, "Oat milk".into());
        binding.cancel_edit();

        assert!(!binding.is_editing());
        assert_eq!(binding.render(), before);
    }

    #[test]
    fn test_set_field_outside_editing_is_ignored() {
        let mut binding = RowBinding::new(milk());
        assert!(!binding.set_field(EditField::Quantity, "9".into()));
        assert!(binding.update_payload().is_none());
    }

    #[test]
    fn test_update_payload_normalizes_quantity() {
        let mut binding = RowBinding::new(milk());
        binding.begin_edit();
        binding.set_field(EditField::Quantity, " 5 ".into());
        binding.set_field(EditField::ExpirationDate, "".into());
        assert_eq!(
            binding.update_payload(),
            Some(ItemPayload::new("Milk", Some(5), ""))
        );

        binding.set_field(EditField::Quantity, "five".into());
        assert_eq!(binding.update_payload().unwrap().quantity, Some(None));
    }
}
