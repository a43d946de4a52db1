//! Authentication error type and its HTTP response mappings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

/// Errors raised while authenticating a technician or resolving the session
/// identity.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No technician id is stored in the session.
    #[error("Technician ID is not present in session")]
    NotLoggedIn,
    /// The session carries an id that no longer exists in the database.
    #[error("Technician ID {0:?} not found in database despite having an active session")]
    TechnicianNotInDatabase(i32),
    /// Login failed; the message is deliberately identical for unknown email
    /// and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Signup attempted with an email that is already registered.
    #[error("Technician with email {0:?} is already registered")]
    EmailAlreadyRegistered(String),
    /// A required signup or login field was empty.
    #[error("Missing required field {0:?}")]
    MissingField(&'static str),
    /// Password shorter than the minimum length.
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    /// Password hashing or hash parsing failed.
    #[error("Password hash operation failed: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn technician_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Technician not found".to_string(),
            }),
        )
            .into_response()
    }

    fn bad_request(message: String) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", Self::NotLoggedIn);

                Self::technician_not_found()
            }
            Self::TechnicianNotInDatabase(technician_id) => {
                tracing::debug!(technician_id = %technician_id, "{}", self);

                Self::technician_not_found()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::EmailAlreadyRegistered(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Email already registered. Please use a different email or login."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::MissingField(_) | Self::PasswordTooShort(_) => {
                Self::bad_request(self.to_string())
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
