//! Authentication request and response models.

use serde::{Deserialize, Serialize};

/// Technician identity as held in the session and returned to the client.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TechnicianDto {
    /// Database id of the technician.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Login email, unique per technician.
    pub email: String,
}

/// Signup form payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignupDto {
    /// Display name.
    pub name: String,
    /// Login email; must not already be registered.
    pub email: String,
    /// Plain-text password, hashed before storage.
    pub password: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
}

/// Login form payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginDto {
    /// Login email.
    pub email: String,
    /// Plain-text password to verify.
    pub password: String,
}
