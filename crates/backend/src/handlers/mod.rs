pub mod a001_inventory_item;
pub mod legacy;
pub mod usecases;
