use super::models::{ApiError, RegisteredResponse};
use crate::board::LiveOrderBoard;
use crate::models::{OrderId, OrderInput};
use crate::summary::LiveSummary;
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

/// GET /health — simple liveness check
pub async fn health() -> &'static str {
    "OK"
}

/// POST /orders — register a new order, returns the assigned id
pub async fn register_order(
    State(board): State<LiveOrderBoard>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredResponse>), ApiError> {
    let Json(input) = payload?;
    let order_id = board.register_order(input)?;
    Ok((StatusCode::CREATED, Json(RegisteredResponse { order_id })))
}

/// DELETE /orders/{order_id} — idempotent, unknown ids are fine
pub async fn cancel_order(
    State(board): State<LiveOrderBoard>,
    Path(order_id): Path<OrderId>,
) -> StatusCode {
    board.cancel_order(&order_id);
    StatusCode::NO_CONTENT
}

/// GET /summary — both sides, collapsed by price level
pub async fn get_summary(State(board): State<LiveOrderBoard>) -> Json<LiveSummary> {
    Json(board.live_summary())
}
