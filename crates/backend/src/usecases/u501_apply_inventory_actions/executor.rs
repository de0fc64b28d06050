use contracts::domain::a001_inventory_item::{InventoryItem, ItemPayload};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_apply_inventory_actions::{
    ActionOutcome, ActionResult, ApplyActionsRequest, ApplyActionsResponse, ApplyInventoryActions,
    InventoryAction, InventoryActionKind, NAME_MATCH_CUTOFF,
};
use sea_orm::DatabaseConnection;

use crate::domain::a001_inventory_item::service::{self, InventoryResult};
use crate::shared::similarity::closest_match;

/// Executor для UseCase применения действий над складом по именам позиций
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyActionsExecutor;

impl ApplyActionsExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Actions run one after another; each one sees what the previous wrote.
    pub async fn execute(
        &self,
        db: &DatabaseConnection,
        request: ApplyActionsRequest,
    ) -> InventoryResult<ApplyActionsResponse> {
        tracing::info!(
            "{}: applying {} action(s)",
            ApplyInventoryActions::full_name(),
            request.len()
        );

        let mut results = Vec::with_capacity(request.len());
        for action in request {
            let inventory = service::list_all(db).await?;
            let result = self.apply_one(db, &inventory, action).await?;
            tracing::debug!("{:?} '{}' -> {:?}", result.action, result.item_name, result.outcome);
            results.push(result);
        }
        Ok(ApplyActionsResponse { results })
    }

    async fn apply_one(
        &self,
        db: &DatabaseConnection,
        inventory: &[InventoryItem],
        action: InventoryAction,
    ) -> InventoryResult<ActionResult> {
        let matched = closest_match(
            &action.item_name,
            inventory.iter().map(|i| i.item_name.as_str()),
            NAME_MATCH_CUTOFF,
        )
        .and_then(|name| inventory.iter().find(|i| i.item_name == name));

        let (outcome, message) = match (action.action, matched) {
            (InventoryActionKind::Add, Some(existing)) => (
                ActionOutcome::SkippedSimilar,
                format!(
                    "Item '{}' is similar to existing item '{}'. Consider updating instead.",
                    action.item_name, existing.item_name
                ),
            ),
            (InventoryActionKind::Add, None) => {
                service::create(
                    db,
                    ItemPayload::new(action.item_name.clone(), Some(action.quantity), ""),
                )
                .await?;
                (
                    ActionOutcome::Added,
                    format!("Item '{}' added successfully.", action.item_name),
                )
            }
            (InventoryActionKind::Update, Some(existing)) => {
                let patch = ItemPayload {
                    quantity: Some(Some(action.quantity)),
                    ..ItemPayload::default()
                };
                service::update(db, existing.id, patch).await?;
                (
                    ActionOutcome::Updated,
                    format!("Item '{}' updated successfully.", existing.item_name),
                )
            }
            (InventoryActionKind::Delete, Some(existing)) => {
                service::delete(db, existing.id).await?;
                (
                    ActionOutcome::Deleted,
                    format!("Item '{}' deleted successfully.", existing.item_name),
                )
            }
            (kind, None) => (
                ActionOutcome::NotFound,
                format!(
                    "Item '{}' not found in inventory for {}.",
                    action.item_name,
                    match kind {
                        InventoryActionKind::Delete => "deletion",
                        _ => "updating",
                    }
                ),
            ),
        };

        Ok(ActionResult {
            action: action.action,
            item_name: action.item_name,
            outcome,
            matched_name: matched.map(|m| m.item_name.clone()),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory_item::service::{create, list_all};
    use crate::shared::data::db::test_connection;

    fn action(kind: InventoryActionKind, name: &str, quantity: i32) -> InventoryAction {
        InventoryAction {
            action: kind,
            item_name: name.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_skips_similar_names() {
        let db = test_connection().await;
        create(&db, ItemPayload::new("tomatoes", Some(3), "")).await.unwrap();

        let response = ApplyActionsExecutor::new()
            .execute(
                &db,
                vec![
                    action(InventoryActionKind::Add, "tomatoe", 1),
                    action(InventoryActionKind::Add, "basil", 2),
                ],
            )
            .await
            .unwrap();

        assert_eq!(response.results[0].outcome, ActionOutcome::SkippedSimilar);
        assert_eq!(response.results[0].matched_name.as_deref(), Some("tomatoes"));
        assert_eq!(response.results[1].outcome, ActionOutcome::Added);

        let names: Vec<_> = list_all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.item_name)
            .collect();
        assert_eq!(names, vec!["tomatoes", "basil"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_approximate_name() {
        let db = test_connection().await;
        create(&db, ItemPayload::new("milk", Some(1), "2025-01-01"))
            .await
            .unwrap();
        create(&db, ItemPayload::new("bread", Some(2), "")).await.unwrap();

        let response = ApplyActionsExecutor::new()
            .execute(
                &db,
                vec![
                    action(InventoryActionKind::Update, "milks", 4),
                    action(InventoryActionKind::Delete, "breads", 0),
                    action(InventoryActionKind::Delete, "caviar", 0),
                ],
            )
            .await
            .unwrap();

        let outcomes: Vec<_> = response.results.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                ActionOutcome::Updated,
                ActionOutcome::Deleted,
                ActionOutcome::NotFound
            ]
        );

        let items = list_all(&db).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "milk");
        assert_eq!(items[0].quantity, 4);
        assert!(items[0].expiration_date.is_some());
    }

    #[tokio::test]
    async fn test_later_actions_see_earlier_writes() {
        let db = test_connection().await;
        let response = ApplyActionsExecutor::new()
            .execute(
                &db,
                vec![
                    action(InventoryActionKind::Add, "rice", 1),
                    action(InventoryActionKind::Update, "rice", 6),
                ],
            )
            .await
            .unwrap();

        assert_eq!(response.results[1].outcome, ActionOutcome::Updated);
        assert_eq!(list_all(&db).await.unwrap()[0].quantity, 6);
    }
}
