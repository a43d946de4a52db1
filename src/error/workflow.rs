//! Ticket workflow error type and its HTTP response mappings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by ticket creation, parts recording, and feedback
/// submission.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// No ticket exists for the given id.
    #[error("Ticket ID {0} not found")]
    TicketNotFound(i32),
    /// A required workflow field was empty.
    #[error("Missing required field {0:?}")]
    MissingField(&'static str),
    /// Part quantity must be strictly positive.
    #[error("Part quantity must be greater than zero, got {0}")]
    InvalidQuantity(i32),
    /// Part unit cost must not be negative.
    #[error("Part unit cost must not be negative, got {0}")]
    NegativeUnitCost(Decimal),
}

impl IntoResponse for WorkflowError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Ticket not found.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingField(_) | Self::InvalidQuantity(_) | Self::NegativeUnitCost(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
