//! Error types for the Fixdesk server.
//!
//! Per-domain error enums (authentication, device registry, ticket workflow)
//! are aggregated into a single [`Error`] type via `thiserror`. All errors
//! implement `IntoResponse`: validation failures map to 400, missing records
//! to 404, conflicts to 409, and everything else to a 500 with a generic
//! message so store-level details never reach the client.

pub mod auth;
pub mod registry;
pub mod workflow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, registry::RegistryError, workflow::WorkflowError},
    model::api::ErrorDto,
};

/// Main error type for the Fixdesk server.
///
/// Aggregates the domain-specific error types and external library errors
/// into one unified error, with automatic conversion from underlying error
/// types via `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session, credentials, signup conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Device registry error (serial validation, duplicate serial, unknown device).
    #[error(transparent)]
    RegistryError(#[from] RegistryError),
    /// Ticket workflow error (field validation, unknown ticket, part constraints).
    #[error(transparent)]
    WorkflowError(#[from] WorkflowError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Fixdesk's code.
    #[error("Internal error with Fixdesk's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::RegistryError(err) => err.into_response(),
            Self::WorkflowError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic "try again"
/// message to the client so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Something went wrong, please try again.".to_string(),
            }),
        )
            .into_response()
    }
}
