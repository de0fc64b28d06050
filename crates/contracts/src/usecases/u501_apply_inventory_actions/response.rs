use serde::{Deserialize, Serialize};

use super::request::InventoryActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Added,
    Updated,
    Deleted,
    /// `add` skipped because a similarly named item already exists
    SkippedSimilar,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action: InventoryActionKind,
    pub item_name: String,
    pub outcome: ActionOutcome,

    /// Existing item name the action was matched against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_name: Option<String>,

    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyActionsResponse {
    pub results: Vec<ActionResult>,
}
