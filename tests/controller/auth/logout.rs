use axum::{http::StatusCode, response::IntoResponse};
use fixdesk::{controller::auth::logout, model::session::technician::SessionTechnicianId};
use fixdesk_test_utils::prelude::*;

#[tokio::test]
// Test that logout clears the stored technician id
async fn clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionTechnicianId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_id = SessionTechnicianId::get(&test.session).await.unwrap();
    assert!(session_id.is_none());

    Ok(())
}
