use chrono::NaiveDate;
use contracts::domain::a001_inventory_item::{InventoryItem, InventoryItemId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryItem {
    fn from(m: Model) -> Self {
        InventoryItem {
            id: InventoryItemId(m.id),
            item_name: m.item_name,
            quantity: m.quantity,
            expiration_date: m.expiration_date,
        }
    }
}

/// Поля новой или изменённой позиции, уже провалидированные сервисом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub item_name: String,
    pub quantity: i32,
    pub expiration_date: Option<NaiveDate>,
}

/// All rows in insertion order.
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<InventoryItem>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    id: InventoryItemId,
) -> anyhow::Result<Option<InventoryItem>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

pub async fn insert(db: &DatabaseConnection, fields: ItemFields) -> anyhow::Result<InventoryItem> {
    let active = ActiveModel {
        id: NotSet,
        item_name: Set(fields.item_name),
        quantity: Set(fields.quantity),
        expiration_date: Set(fields.expiration_date),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: InventoryItemId,
    fields: ItemFields,
) -> anyhow::Result<InventoryItem> {
    let active = ActiveModel {
        id: Set(id.value()),
        item_name: Set(fields.item_name),
        quantity: Set(fields.quantity),
        expiration_date: Set(fields.expiration_date),
    };
    let model = active.update(db).await?;
    Ok(model.into())
}

/// Returns `false` when no row had that id.
pub async fn delete(db: &DatabaseConnection, id: InventoryItemId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn fields(name: &str, quantity: i32) -> ItemFields {
        ItemFields {
            item_name: name.to_string(),
            quantity,
            expiration_date: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = test_connection().await;
        let a = insert(&db, fields("Milk", 2)).await.unwrap();
        let b = insert(&db, fields("Bread", 1)).await.unwrap();
        assert!(b.id > a.id);

        let all = list_all(&db).await.unwrap();
        let names: Vec<_> = all.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread"]);
        assert_eq!(count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_expiration_date_round_trips_through_storage() {
        let db = test_connection().await;
        let mut f = fields("Yogurt", 4);
        f.expiration_date = NaiveDate::from_ymd_opt(2025, 3, 9);
        let created = insert(&db, f).await.unwrap();

        let loaded = get_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(loaded.expiration_date, NaiveDate::from_ymd_opt(2025, 3, 9));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let db = test_connection().await;
        let item = insert(&db, fields("Salt", 1)).await.unwrap();
        assert!(delete(&db, item.id).await.unwrap());
        assert!(!delete(&db, item.id).await.unwrap());
        assert!(get_by_id(&db, item.id).await.unwrap().is_none());
    }
}
