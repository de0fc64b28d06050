use async_trait::async_trait;
use contracts::domain::a002_catalog_product::{CatalogResponse, LookupOutcome, CATALOG_BASE_URL};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Barcode lookup failed: {0}")]
    Network(String),

    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse catalog response: {0}")]
    Decode(String),
}

/// Поиск товара по штрихкоду во внешнем каталоге
#[async_trait(?Send)]
pub trait ProductLookup {
    async fn lookup(&self, code: &str) -> Result<LookupOutcome, LookupError>;
}

/// Open Food Facts catalog client
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::with_base_url(CATALOG_BASE_URL)
    }
}

impl OpenFoodFactsClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base}/{code}.json`, code trimmed and percent-encoded
    pub fn product_url(&self, code: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(code.trim())
        )
    }
}

#[async_trait(?Send)]
impl ProductLookup for OpenFoodFactsClient {
    async fn lookup(&self, code: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.product_url(code);
        log::debug!("Catalog lookup: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let body = response
            .json::<CatalogResponse>()
            .await
            .map_err(|e| e.to_string());
        resolve(body, response.status())
    }
}

/// A miss may come back as 404 with a regular `{status: 0}` body,
/// so the body decides before the HTTP status does.
fn resolve(body: Result<CatalogResponse, String>, status: u16) -> Result<LookupOutcome, LookupError> {
    match body {
        Ok(body) => Ok(body.into_outcome()),
        Err(_) if !(200..300).contains(&status) => Err(LookupError::Status(status)),
        Err(e) => Err(LookupError::Decode(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_url() {
        let client = OpenFoodFactsClient::default();
        assert_eq!(
            client.product_url(" 3017620422003 "),
            "https://world.openfoodfacts.org/api/v0/product/3017620422003.json"
        );

        let custom = OpenFoodFactsClient::with_base_url("http://localhost:9000/product/");
        assert_eq!(
            custom.product_url("12 34"),
            "http://localhost:9000/product/12%2034.json"
        );
    }

    #[test]
    fn test_resolve_body_before_status() {
        let miss = CatalogResponse {
            status: 0,
            product: None,
        };
        assert_eq!(resolve(Ok(miss), 404), Ok(LookupOutcome::NotFound));

        // Envelope without `status` fails to decode
        let undecodable = || Err("missing field `status`".to_string());
        assert_eq!(resolve(undecodable(), 429), Err(LookupError::Status(429)));
        assert_eq!(resolve(undecodable(), 503), Err(LookupError::Status(503)));
        assert_eq!(
            resolve(undecodable(), 200),
            Err(LookupError::Decode("missing field `status`".into()))
        );
    }
}
