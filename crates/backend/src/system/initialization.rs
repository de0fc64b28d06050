use anyhow::Result;
use contracts::domain::a001_inventory_item::aggregate::EXPIRATION_DATE_FORMAT;
use contracts::domain::a001_inventory_item::ItemPayload;
use sea_orm::DatabaseConnection;

use crate::domain::a001_inventory_item::{repository, service};

pub const INITIAL_ITEM_NAME: &str = "Initial Item";
pub const INITIAL_ITEM_QUANTITY: i32 = 5;

/// Ensure the inventory has a starter row (create if table is empty)
pub async fn ensure_initial_item_exists(db: &DatabaseConnection) -> Result<()> {
    let count = repository::count(db).await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("Inventory is empty. Creating initial item...");
    let today = chrono::Local::now()
        .date_naive()
        .format(EXPIRATION_DATE_FORMAT)
        .to_string();
    let item = service::create(
        db,
        ItemPayload::new(INITIAL_ITEM_NAME, Some(INITIAL_ITEM_QUANTITY), today),
    )
    .await?;

    tracing::info!("Initial item inserted into database (id {})", item.id);
    Ok(())
}
