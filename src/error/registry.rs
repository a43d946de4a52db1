//! Device registry error type and its HTTP response mappings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by device lookup and registration.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A serial number made of nothing or whitespace was submitted. This is a
    /// validation failure, not a lookup miss.
    #[error("Serial number must not be empty")]
    EmptySerial,
    /// A required registration field was empty.
    #[error("Missing required field {0:?}")]
    MissingField(&'static str),
    /// Registration attempted with a serial number that already exists.
    #[error("Device with serial number {0:?} is already registered")]
    DuplicateSerial(String),
    /// No device exists for the given id.
    #[error("Device ID {0} not found")]
    DeviceNotFound(i32),
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptySerial | Self::MissingField(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto {
                    error: self.to_string(),
                }))
                    .into_response()
            }
            Self::DuplicateSerial(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Device with this serial number already exists.".to_string(),
                }),
            )
                .into_response(),
            Self::DeviceNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Device not found.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
