//! Reporting endpoints: ticket list, dashboard, and the store health probe.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::get_technician::get_technician_from_session,
    error::Error,
    model::{
        api::{ErrorDto, StatusDto},
        app::AppState,
        report::{DashboardDto, RecentTicketsQuery, TicketListDto},
    },
    service::report::{ReportService, DEFAULT_LIST_LIMIT},
};

/// OpenAPI tag for reporting routes.
pub static REPORT_TAG: &str = "report";

/// List recent tickets with counts, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = REPORT_TAG,
    params(RecentTicketsQuery),
    responses(
        (status = 200, description = "Tickets and counts", body = TicketListDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RecentTicketsQuery>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let report_service = ReportService::new(&state.db);

    let tickets = report_service
        .list_recent(
            query.filter.unwrap_or_default(),
            query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        )
        .await?;
    let counts = report_service.counts().await?;

    Ok((StatusCode::OK, Json(TicketListDto { tickets, counts })))
}

/// Dashboard: counts, recent tickets, and the technician's own tickets
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard payload", body = DashboardDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let technician = get_technician_from_session(&state, &session).await?;

    let dashboard = ReportService::new(&state.db)
        .dashboard(&technician.email)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Probe the durable store
#[utoipa::path(
    get,
    path = "/api/status",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Database reachable", body = StatusDto),
        (status = 500, description = "Database unreachable", body = StatusDto)
    ),
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusDto { database: true })),
        Err(e) => {
            tracing::error!("Database ping failed: {}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusDto { database: false }),
            )
        }
    }
}
