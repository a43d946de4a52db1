use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fixdesk::controller::ticket::get;
use fixdesk_test_utils::prelude::*;

use crate::controller::ticket::log_in_technician;

#[tokio::test]
// Test the return of a 200 response for an existing ticket
async fn returns_ticket_detail() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    let ticket = test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = get(State(test.state()), test.session.clone(), Path(ticket.id)).await;

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

    let result = get(State(test.state()), test.session.clone(), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
