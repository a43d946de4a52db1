//! Device registry endpoints: serial check and registration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::get_technician::get_technician_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        device::{DeviceCheckDto, DeviceDto, RegisterDeviceDto},
    },
    service::device::DeviceService,
};

/// OpenAPI tag for device registry routes.
pub static DEVICE_TAG: &str = "device";

/// Query parameters for the serial check.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct CheckDeviceQuery {
    /// Serial number to look up.
    pub serial: String,
}

/// Look up a device by serial number
///
/// When the device is unknown, the response echoes the serial so the client
/// can carry it into the registration form.
#[utoipa::path(
    get,
    path = "/api/device/check",
    tag = DEVICE_TAG,
    params(CheckDeviceQuery),
    responses(
        (status = 200, description = "Lookup result", body = DeviceCheckDto),
        (status = 400, description = "Empty serial number", body = ErrorDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CheckDeviceQuery>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let result = DeviceService::new(&state.db).check_serial(&query.serial).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Register a new device
#[utoipa::path(
    post,
    path = "/api/device/register",
    tag = DEVICE_TAG,
    request_body = RegisterDeviceDto,
    responses(
        (status = 201, description = "Device registered", body = DeviceDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 409, description = "Serial number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(device): Json<RegisterDeviceDto>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let device = DeviceService::new(&state.db).register(device).await?;

    Ok((StatusCode::CREATED, Json(device)))
}
