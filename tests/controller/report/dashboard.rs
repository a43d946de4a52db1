use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fixdesk::controller::report::dashboard;
use fixdesk_test_utils::prelude::*;

use crate::controller::report::log_in_technician;

#[tokio::test]
// Test the return of a 200 response for the dashboard
async fn returns_dashboard() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    test.insert_ticket_chain("sam@example.com", "SN-001").await?;

    let result = dashboard(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
