use serde::{Deserialize, Serialize};

/// Base of the public product catalog (Open Food Facts, API v0).
pub const CATALOG_BASE_URL: &str = "https://world.openfoodfacts.org/api/v0/product";

/// `status` value the catalog uses for a hit
pub const CATALOG_STATUS_FOUND: i32 = 1;

/// Ответ каталога `GET {CATALOG_BASE_URL}/{code}.json`
///
/// `status` is required: a body without it is not a catalog answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub status: i32,

    #[serde(default)]
    pub product: Option<CatalogProduct>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub product_name: Option<String>,
}

/// Result of resolving a scanned code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
}

impl CatalogResponse {
    /// A hit without a usable product name is treated as a miss.
    pub fn into_outcome(self) -> LookupOutcome {
        if self.status != CATALOG_STATUS_FOUND {
            return LookupOutcome::NotFound;
        }
        match self
            .product
            .and_then(|p| p.product_name)
            .map(|name| name.trim().to_string())
        {
            Some(name) if !name.is_empty() => LookupOutcome::Found(name),
            _ => LookupOutcome::NotFound,
        }
    }
}
