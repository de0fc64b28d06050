pub mod camera;
pub mod flow;
pub mod session;
pub mod view;

pub use session::{DuplicateSuppressor, ScanError, ScanSessionController, DUPLICATE_WINDOW_MS};
pub use view::BarcodeScanner;
