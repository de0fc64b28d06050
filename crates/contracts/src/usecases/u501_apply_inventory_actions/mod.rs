pub mod request;
pub mod response;

pub use request::{ApplyActionsRequest, InventoryAction, InventoryActionKind};
pub use response::{ActionOutcome, ActionResult, ApplyActionsResponse};

use crate::usecases::common::UseCaseMetadata;

/// Similarity ratio an existing name must reach to count as the same item.
pub const NAME_MATCH_CUTOFF: f64 = 0.8;

pub struct ApplyInventoryActions;

impl UseCaseMetadata for ApplyInventoryActions {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "apply_inventory_actions"
    }
}
