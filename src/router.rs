//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/signup` - Register a technician account
/// - `POST /api/auth/login` - Log in with email and password
/// - `GET  /api/auth/logout` - Log out the current technician
/// - `GET  /api/auth/user` - Get the logged in technician
/// - `GET  /api/device/check` - Look up a device by serial number
/// - `POST /api/device/register` - Register a new device
/// - `POST /api/ticket` - Open a repair ticket
/// - `GET  /api/ticket/{id}` - View a ticket
/// - `POST /api/ticket/{id}/parts` - Record part usage
/// - `GET  /api/ticket/{id}/parts` - List the parts ledger
/// - `POST /api/ticket/{id}/parts/finish` - Finish parts recording
/// - `POST /api/ticket/{id}/feedback` - Submit feedback
/// - `GET  /api/tickets` - List recent tickets with counts
/// - `GET  /api/dashboard` - Dashboard projections
/// - `GET  /api/status` - Durable store health probe
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fixdesk", description = "Fixdesk API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::device::DEVICE_TAG, description = "Device registry API routes"),
        (name = controller::ticket::TICKET_TAG, description = "Ticket workflow API routes"),
        (name = controller::report::REPORT_TAG, description = "Reporting API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::device::check))
        .routes(routes!(controller::device::register))
        .routes(routes!(controller::ticket::create))
        .routes(routes!(controller::ticket::get))
        .routes(routes!(
            controller::ticket::record_part,
            controller::ticket::list_parts
        ))
        .routes(routes!(controller::ticket::finish_parts))
        .routes(routes!(controller::ticket::submit_feedback))
        .routes(routes!(controller::report::list_tickets))
        .routes(routes!(controller::report::dashboard))
        .routes(routes!(controller::report::status))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
