/// Метаданные UseCase для идентификации в логах
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "apply_inventory_actions")
    fn usecase_name() -> &'static str;

    /// Полное имя вида "u501_apply_inventory_actions"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
