use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fixdesk::controller::report::status;
use fixdesk_test_utils::prelude::*;

#[tokio::test]
// Test the return of a 200 response when the database answers the ping
async fn reports_database_reachable() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = status(State(test.state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
