pub mod executor;

pub use executor::ApplyActionsExecutor;
