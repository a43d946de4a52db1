use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fixdesk::controller::ticket::{finish_parts, list_parts, record_part};
use fixdesk_test_utils::prelude::*;

use crate::{controller::ticket::log_in_technician, util::record_part_dto};

#[tokio::test]
// Test the return of a 201 response when recording a part
async fn records_part_usage() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = record_part(
        State(test.state()),
        test.session.clone(),
        Path(ticket.id),
        Json(record_part_dto("PSU")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 response for a zero quantity
async fn rejects_zero_quantity() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let mut usage = record_part_dto("PSU");
    usage.quantity = 0;

    let result = record_part(
        State(test.state()),
        test.session.clone(),
        Path(ticket.id),
        Json(usage),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// Test the return of a 200 response when listing the ledger
async fn lists_ledger() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = list_parts(State(test.state()), test.session.clone(), Path(ticket.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 200 response from the finish navigation signal
async fn finish_parts_returns_ticket() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = finish_parts(State(test.state()), test.session.clone(), Path(ticket.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response for an unknown ticket
async fn rejects_unknown_ticket() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = list_parts(State(test.state()), test.session.clone(), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
