pub mod list;
pub mod new_item;
