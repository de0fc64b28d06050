pub mod a001_inventory_item;
pub mod a002_catalog_product;
