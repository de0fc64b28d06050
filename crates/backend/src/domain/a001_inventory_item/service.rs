use super::repository::{self, ItemFields};
use contracts::domain::a001_inventory_item::aggregate::parse_expiration_date;
use contracts::domain::a001_inventory_item::{InventoryItem, InventoryItemId, ItemPayload};
use sea_orm::DatabaseConnection;
use thiserror::Error;

/// Ошибки операций над складскими позициями
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Item not found")]
    NotFound(InventoryItemId),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Список всех позиций в порядке добавления
pub async fn list_all(db: &DatabaseConnection) -> InventoryResult<Vec<InventoryItem>> {
    Ok(repository::list_all(db).await?)
}

/// Создание новой позиции
pub async fn create(db: &DatabaseConnection, payload: ItemPayload) -> InventoryResult<InventoryItem> {
    let item_name = payload
        .item_name
        .ok_or_else(|| InventoryError::Validation("item_name is required".into()))?;
    let quantity = require_quantity(payload.quantity.flatten())?;
    let expiration_date = parse_expiration_date(payload.expiration_date.as_deref())
        .map_err(InventoryError::Validation)?;

    let item = repository::insert(
        db,
        ItemFields {
            item_name,
            quantity,
            expiration_date,
        },
    )
    .await?;
    tracing::info!("Inventory item {} created: {}", item.id, item.item_name);
    Ok(item)
}

/// Обновление позиции
///
/// Absent fields keep their stored value. An empty `expiration_date` also
/// keeps the stored date; an explicit `null` quantity is rejected.
pub async fn update(
    db: &DatabaseConnection,
    id: InventoryItemId,
    payload: ItemPayload,
) -> InventoryResult<InventoryItem> {
    let current = repository::get_by_id(db, id)
        .await?
        .ok_or(InventoryError::NotFound(id))?;

    let quantity = match payload.quantity {
        None => current.quantity,
        Some(value) => require_quantity(value)?,
    };
    let expiration_date = parse_expiration_date(payload.expiration_date.as_deref())
        .map_err(InventoryError::Validation)?
        .or(current.expiration_date);

    let item = repository::update(
        db,
        id,
        ItemFields {
            item_name: payload.item_name.unwrap_or(current.item_name),
            quantity,
            expiration_date,
        },
    )
    .await?;
    tracing::info!("Inventory item {} updated", item.id);
    Ok(item)
}

/// Удаление позиции
pub async fn delete(db: &DatabaseConnection, id: InventoryItemId) -> InventoryResult<()> {
    if !repository::delete(db, id).await? {
        return Err(InventoryError::NotFound(id));
    }
    tracing::info!("Inventory item {} deleted", id);
    Ok(())
}

fn require_quantity(quantity: Option<i32>) -> InventoryResult<i32> {
    quantity.ok_or_else(|| InventoryError::Validation("quantity must be an integer".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_create_then_list_shows_values() {
        let db = test_connection().await;
        let created = create(&db, ItemPayload::new("Milk", Some(2), "2025-01-01"))
            .await
            .unwrap();

        let items = list_all(&db).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, created.id);
        assert_eq!(items[0].item_name, "Milk");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].expiration_date, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[tokio::test]
    async fn test_create_with_empty_expiration_stores_none() {
        let db = test_connection().await;
        let created = create(&db, ItemPayload::new("Rice", Some(1), ""))
            .await
            .unwrap();
        assert_eq!(created.expiration_date, None);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_quantity_and_bad_date() {
        let db = test_connection().await;

        let err = create(&db, ItemPayload::new("Rice", None, "")).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let err = create(&db, ItemPayload::new("Rice", Some(1), "tomorrow"))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        assert!(list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let db = test_connection().await;
        let created = create(&db, ItemPayload::new("Cheese", Some(1), "2025-02-02"))
            .await
            .unwrap();

        let patch = ItemPayload {
            quantity: Some(Some(3)),
            ..ItemPayload::default()
        };
        let updated = update(&db, created.id, patch).await.unwrap();
        assert_eq!(updated.item_name, "Cheese");
        assert_eq!(updated.quantity, 3);
        assert_eq!(updated.expiration_date, NaiveDate::from_ymd_opt(2025, 2, 2));

        // Empty date text keeps the stored date
        let updated = update(&db, created.id, ItemPayload::new("Gouda", Some(3), ""))
            .await
            .unwrap();
        assert_eq!(updated.item_name, "Gouda");
        assert_eq!(updated.expiration_date, NaiveDate::from_ymd_opt(2025, 2, 2));
    }

    #[tokio::test]
    async fn test_update_rejects_null_quantity() {
        let db = test_connection().await;
        let created = create(&db, ItemPayload::new("Tea", Some(1), ""))
            .await
            .unwrap();

        let err = update(&db, created.id, ItemPayload::from_form("Tea", "lots", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let db = test_connection().await;
        let missing = InventoryItemId(404);

        let err = update(&db, missing, ItemPayload::new("x", Some(1), ""))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::NotFound(id) if id == missing));

        let err = delete(&db, missing).await.unwrap_err();
        assert!(matches!(err, InventoryError::NotFound(_)));
    }
}
