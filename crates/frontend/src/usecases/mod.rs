pub mod u502_scan_barcode;
