pub mod aggregate;

pub use aggregate::{
    CatalogProduct, CatalogResponse, LookupOutcome, CATALOG_BASE_URL, CATALOG_STATUS_FOUND,
};
