pub mod aggregate;
pub mod legacy;

pub use aggregate::{
    parse_expiration_date, parse_quantity, InventoryItem, InventoryItemId, ItemPayload,
    MutationResponse, EXPIRATION_DATE_FORMAT, MISSING_EXPIRATION_PLACEHOLDER,
};
pub use legacy::{LegacyItemRow, LegacyItemsResponse};
