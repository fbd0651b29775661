use super::handlers;
use crate::board::LiveOrderBoard;
use axum::Router;
use axum::routing::{delete, get, post};

/// Builds the order routes with the board as shared state.
pub fn build(board: LiveOrderBoard) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/orders", post(handlers::register_order))
        .route("/orders/{order_id}", delete(handlers::cancel_order))
        .route("/summary", get(handlers::get_summary))
        .with_state(board)
}
