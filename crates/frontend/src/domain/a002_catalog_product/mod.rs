pub mod api;

pub use api::{LookupError, OpenFoodFactsClient, ProductLookup};
