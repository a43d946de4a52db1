//! Generic API response models.

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Result of a durable-store health probe.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusDto {
    /// `true` when the database answered the ping.
    pub database: bool,
}
