use axum::{extract::State, http::StatusCode, response::IntoResponse};
use fixdesk::{controller::auth::get_user, model::session::technician::SessionTechnicianId};
use fixdesk_test_utils::prelude::*;

#[tokio::test]
// Test the return of a 200 response for a logged in technician
async fn returns_current_technician() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;
    let technician = test.insert_technician("jordan@example.com").await?;
    SessionTechnicianId::insert(&test.session, technician.id)
        .await
        .unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response without a session
async fn fails_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// Test that a stale session id is cleared and 404 returned
async fn clears_stale_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;
    SessionTechnicianId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_id = SessionTechnicianId::get(&test.session).await.unwrap();
    assert!(session_id.is_none());

    Ok(())
}
