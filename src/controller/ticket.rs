//! Ticket workflow endpoints: creation, detail, parts recording, feedback.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::get_technician::get_technician_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        ticket::{
            CreateTicketDto, FeedbackDto, PartUsageDto, PartsLedgerDto, RecordPartUsageDto,
            SubmitFeedbackDto, TicketDetailDto, TicketDto,
        },
    },
    service::ticket::TicketService,
};

/// OpenAPI tag for ticket workflow routes.
pub static TICKET_TAG: &str = "ticket";

/// Open a repair ticket for a device
#[utoipa::path(
    post,
    path = "/api/ticket",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "Device or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(ticket): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let technician = get_technician_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db)
        .create_ticket(technician.id, ticket)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// View a ticket with its device, technician, parts ledger, and feedback
#[utoipa::path(
    get,
    path = "/api/ticket/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket detail", body = TicketDetailDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let detail = TicketService::new(&state.db).get_ticket(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Record one spare part used on a ticket
#[utoipa::path(
    post,
    path = "/api/ticket/{id}/parts",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    request_body = RecordPartUsageDto,
    responses(
        (status = 201, description = "Part usage recorded", body = PartUsageDto),
        (status = 400, description = "Invalid part name, quantity, or cost", body = ErrorDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_part(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(usage): Json<RecordPartUsageDto>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let usage = TicketService::new(&state.db)
        .record_part_usage(id, usage)
        .await?;

    Ok((StatusCode::CREATED, Json(usage)))
}

/// List a ticket's parts ledger with the running total
#[utoipa::path(
    get,
    path = "/api/ticket/{id}/parts",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Parts ledger", body = PartsLedgerDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_parts(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let ledger = TicketService::new(&state.db).parts_ledger(id).await?;

    Ok((StatusCode::OK, Json(ledger)))
}

/// Finish parts recording and move on to feedback
///
/// Pure navigation signal, also used for "no parts needed". Never changes the
/// ticket status.
#[utoipa::path(
    post,
    path = "/api/ticket/{id}/parts/finish",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket unchanged", body = TicketDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finish_parts(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db).finish_parts_recording(id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Submit post-service feedback, completing the ticket
#[utoipa::path(
    post,
    path = "/api/ticket/{id}/feedback",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    request_body = SubmitFeedbackDto,
    responses(
        (status = 200, description = "Feedback stored, ticket completed", body = FeedbackDto),
        (status = 400, description = "Missing comment or status label", body = ErrorDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(feedback): Json<SubmitFeedbackDto>,
) -> Result<impl IntoResponse, Error> {
    get_technician_from_session(&state, &session).await?;

    let feedback = TicketService::new(&state.db)
        .submit_feedback(id, feedback)
        .await?;

    Ok((StatusCode::OK, Json(feedback)))
}
