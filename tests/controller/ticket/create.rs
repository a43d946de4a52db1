use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fixdesk::controller::ticket::create;
use fixdesk_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{controller::ticket::log_in_technician, util::create_ticket_dto};

#[tokio::test]
// Test the return of a 201 response and one assignment row for a first ticket
async fn creates_ticket_with_lazy_assignment() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let device = test.insert_device("SN-001").await?;

    let result = create(
        State(test.state()),
        test.session.clone(),
        Json(create_ticket_dto(device.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let assignment_count = entity::prelude::TechnicianAssignment::find()
        .count(&test.state.db)
        .await?;
    assert_eq!(assignment_count, 1);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response for an unknown device
async fn rejects_unknown_device() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = create(
        State(test.state()),
        test.session.clone(),
        Json(create_ticket_dto(42)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 response for a blank reporter
async fn rejects_blank_reporter() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let device = test.insert_device("SN-001").await?;

    let mut ticket = create_ticket_dto(device.id);
    ticket.reported_by = " ".to_string();

    let result = create(State(test.state()), test.session.clone(), Json(ticket)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
