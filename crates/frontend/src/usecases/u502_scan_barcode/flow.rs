use contracts::domain::a001_inventory_item::ItemPayload;
use contracts::domain::a002_catalog_product::LookupOutcome;

use crate::domain::a001_inventory_item::api::ItemStore;
use crate::domain::a001_inventory_item::ui::list::state::InventoryPageModel;
use crate::domain::a001_inventory_item::ui::list::sync::add_item;
use crate::domain::a002_catalog_product::api::ProductLookup;
use crate::shared::model_cell::ModelCell;

/// Quantity of an item created from a scan.
pub const SCANNED_ITEM_QUANTITY: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanImport {
    Created(String),
    NotFound,
    Failed,
}

/// Resolve an accepted code and add the product as a new item.
///
/// A catalog miss only leaves a notice; nothing is created.
pub async fn import_scanned_code<L, S, M>(
    lookup: &L,
    store: &S,
    model: &M,
    code: &str,
) -> ScanImport
where
    L: ProductLookup + ?Sized,
    S: ItemStore + ?Sized,
    M: ModelCell<InventoryPageModel> + ?Sized,
{
    match lookup.lookup(code).await {
        Ok(LookupOutcome::Found(name)) => {
            let payload = ItemPayload::new(name.clone(), Some(SCANNED_ITEM_QUANTITY), "");
            if add_item(store, model, payload).await {
                ScanImport::Created(name)
            } else {
                ScanImport::Failed
            }
        }
        Ok(LookupOutcome::NotFound) => {
            model.update_model(|m| {
                m.notices
                    .info(format!("No product found for barcode: {}", code));
            });
            ScanImport::NotFound
        }
        Err(e) => {
            model.update_model(|m| {
                m.notices.error(format!("{} (barcode {})", e, code));
            });
            ScanImport::Failed
        }
    }
}
