//! Authentication endpoints: signup, login, logout, current identity.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::get_technician::get_technician_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::{LoginDto, SignupDto, TechnicianDto},
        session::technician::SessionTechnicianId,
    },
    service::auth::AuthService,
};

/// OpenAPI tag for authentication routes.
pub static AUTH_TAG: &str = "auth";

/// Register a new technician account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = TechnicianDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(signup): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let technician = AuthService::new(&state.db).signup(signup).await?;

    Ok((StatusCode::CREATED, Json(technician)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TechnicianDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let technician = AuthService::new(&state.db).login(login).await?;

    SessionTechnicianId::insert(&session, technician.id).await?;

    Ok((StatusCode::OK, Json(technician)))
}

/// Log out the current technician
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok(StatusCode::OK)
}

/// Get the logged in technician's identity
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current technician", body = TechnicianDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let technician = get_technician_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(technician)))
}
