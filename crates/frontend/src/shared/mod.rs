pub mod api_utils;
pub mod components;
pub mod model_cell;
pub mod notices;
