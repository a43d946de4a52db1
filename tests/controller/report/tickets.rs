use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use fixdesk::{controller::report::list_tickets, model::report::RecentTicketsQuery};
use fixdesk_test_utils::prelude::*;

use crate::controller::report::log_in_technician;

#[tokio::test]
// Test the return of a 200 response for the default listing
async fn lists_tickets() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = list_tickets(
        State(test.state()),
        test.session.clone(),
        Query(RecentTicketsQuery {
            filter: None,
            limit: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response when no technician is logged in
async fn requires_login() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;

    let result = list_tickets(
        State(test.state()),
        test.session.clone(),
        Query(RecentTicketsQuery {
            filter: None,
            limit: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
