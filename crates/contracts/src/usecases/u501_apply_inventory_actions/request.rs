use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryActionKind {
    Add,
    Update,
    Delete,
}

/// Одно действие над складом, адресованное по имени позиции
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAction {
    pub action: InventoryActionKind,
    pub item_name: String,

    /// Ignored for `delete`
    #[serde(default)]
    pub quantity: i32,
}

/// Тело POST /inventory/actions
pub type ApplyActionsRequest = Vec<InventoryAction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_list() {
        let body = r#"[
            {"action":"add","item_name":"eggs","quantity":12},
            {"action":"delete","item_name":"milk"}
        ]"#;
        let actions: ApplyActionsRequest = serde_json::from_str(body).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].action, InventoryActionKind::Add);
        assert_eq!(actions[0].quantity, 12);
        assert_eq!(actions[1].action, InventoryActionKind::Delete);
        assert_eq!(actions[1].quantity, 0);
    }
}
