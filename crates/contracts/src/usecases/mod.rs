pub mod common;
pub mod u501_apply_inventory_actions;
