use crate::errors::OrderError;
use crate::models::OrderId;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Response for POST /orders
#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub order_id: OrderId,
}

/// Body returned for rejected requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every way a request can be refused; all render as `ErrorResponse`.
#[derive(Debug)]
pub enum ApiError {
    Order(OrderError),
    Body(JsonRejection),
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        Self::Order(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Body(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Order(e @ OrderError::PreconditionViolation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
