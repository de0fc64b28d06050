use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// Everything that is not an API route falls through to the built frontend.
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // INVENTORY
        // ========================================
        .route(
            "/inventory",
            get(handlers::a001_inventory_item::list_all)
                .post(handlers::a001_inventory_item::create),
        )
        .route(
            "/inventory/:id",
            put(handlers::a001_inventory_item::update)
                .patch(handlers::a001_inventory_item::update)
                .delete(handlers::a001_inventory_item::delete),
        )
        // UseCase u501: bulk actions by item name
        .route(
            "/inventory/actions",
            post(handlers::usecases::u501_apply_actions),
        )
        // Deprecated read path
        .route("/legacy/items", get(handlers::legacy::list_items))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
}
