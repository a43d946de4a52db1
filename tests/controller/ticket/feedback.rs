use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::ticket::TicketStatus;
use fixdesk::controller::ticket::submit_feedback;
use fixdesk_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{controller::ticket::log_in_technician, util::submit_feedback_dto};

#[tokio::test]
// Test the return of a 200 response and a completed ticket after feedback
async fn completes_ticket() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = submit_feedback(
        State(test.state()),
        test.session.clone(),
        Path(ticket.id),
        Json(submit_feedback_dto("Fixed")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Ticket::find_by_id(ticket.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TicketStatus::Completed);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 response for a blank status label
async fn rejects_blank_status_label() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let mut feedback = submit_feedback_dto("Fixed");
    feedback.status_label = String::new();

    let result = submit_feedback(
        State(test.state()),
        test.session.clone(),
        Path(ticket.id),
        Json(feedback),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response for an unknown ticket
async fn rejects_unknown_ticket() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = submit_feedback(
        State(test.state()),
        test.session.clone(),
        Path(99),
        Json(submit_feedback_dto("Fixed")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
