//! API routes for order-api

pub mod health;
pub mod orders;
pub mod stats;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/{order_id}", get(orders::get_order))
        .route("/order-stats", get(stats::order_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
