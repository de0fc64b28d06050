use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Формат даты истечения срока на проводе и в полях ввода
pub const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Текст в ячейке таблицы, когда срок годности не задан
pub const MISSING_EXPIRATION_PLACEHOLDER: &str = "N/A";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор позиции, назначается хранилищем
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(pub i32);

impl InventoryItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Складская позиция (одна строка таблицы `inventory`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub item_name: String,
    pub quantity: i32,
    pub expiration_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// Expiration date as it goes into a date input: ISO text or empty.
    pub fn expiration_text(&self) -> String {
        self.expiration_date
            .map(|d| d.format(EXPIRATION_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Expiration date as shown in a display row.
    pub fn expiration_display(&self) -> String {
        self.expiration_date
            .map(|d| d.format(EXPIRATION_DATE_FORMAT).to_string())
            .unwrap_or_else(|| MISSING_EXPIRATION_PLACEHOLDER.to_string())
    }
}

// ============================================================================
// Request / Response DTOs
// ============================================================================

/// Тело запросов POST /inventory и PUT /inventory/{id}
///
/// `quantity` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`): the client sends `null` when the typed text is not an
/// integer, and the store rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Option<i32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl ItemPayload {
    /// Payload with all three fields set, the shape every client request uses.
    pub fn new(
        item_name: impl Into<String>,
        quantity: Option<i32>,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            item_name: Some(item_name.into()),
            quantity: Some(quantity),
            expiration_date: Some(expiration_date.into()),
        }
    }

    /// Build a payload from raw form text; quantity is normalized to an integer.
    pub fn from_form(item_name: &str, quantity_text: &str, expiration_text: &str) -> Self {
        Self::new(item_name, parse_quantity(quantity_text), expiration_text)
    }
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Ответ на изменение позиции
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<InventoryItem>,
}

impl MutationResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            item: None,
        }
    }

    pub fn with_item(message: impl Into<String>, item: InventoryItem) -> Self {
        Self {
            message: message.into(),
            item: Some(item),
        }
    }
}

// ============================================================================
// Parsing helpers
// ============================================================================

/// Parse quantity text the same way on every input path.
pub fn parse_quantity(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

/// Blank or missing text means "no expiration date".
pub fn parse_expiration_date(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, EXPIRATION_DATE_FORMAT)
            .map(Some)
            .map_err(|e| format!("Invalid expiration_date '{}': {}", text, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> InventoryItem {
        InventoryItem {
            id: InventoryItemId(7),
            item_name: "Milk".into(),
            quantity: 2,
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        }
    }

    #[test]
    fn test_item_wire_shape() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "item_name": "Milk",
                "quantity": 2,
                "expiration_date": "2025-01-01"
            })
        );
    }

    #[test]
    fn test_missing_expiration_text() {
        let mut item = milk();
        item.expiration_date = None;
        assert_eq!(item.expiration_display(), "N/A");
        assert_eq!(item.expiration_text(), "");
    }

    #[test]
    fn test_payload_distinguishes_null_quantity() {
        let absent: ItemPayload = serde_json::from_str(r#"{"item_name":"Eggs"}"#).unwrap();
        assert_eq!(absent.quantity, None);

        let null: ItemPayload = serde_json::from_str(r#"{"quantity":null}"#).unwrap();
        assert_eq!(null.quantity, Some(None));

        let set: ItemPayload = serde_json::from_str(r#"{"quantity":3}"#).unwrap();
        assert_eq!(set.quantity, Some(Some(3)));
    }

    #[test]
    fn test_payload_from_form_normalizes_quantity() {
        let payload = ItemPayload::from_form("Bread", " 4 ", "");
        assert_eq!(payload.quantity, Some(Some(4)));

        let payload = ItemPayload::from_form("Bread", "four", "");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["quantity"], serde_json::Value::Null);
        assert_eq!(json["expiration_date"], "");
    }

    #[test]
    fn test_parse_expiration_date() {
        assert_eq!(parse_expiration_date(None), Ok(None));
        assert_eq!(parse_expiration_date(Some("  ")), Ok(None));
        assert_eq!(
            parse_expiration_date(Some("2025-01-01")),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 1))
        );
        assert!(parse_expiration_date(Some("01/01/2025")).is_err());
    }
}
