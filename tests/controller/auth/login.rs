use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fixdesk::{controller::auth::login, model::session::technician::SessionTechnicianId};
use fixdesk_test_utils::prelude::*;

use crate::util::login_dto;

#[tokio::test]
// Test the return of a 200 response and a populated session for valid credentials
async fn logs_in_and_stores_session_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;
    let technician = test.insert_technician("jordan@example.com").await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_dto("jordan@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_id = SessionTechnicianId::get(&test.session).await.unwrap();
    assert_eq!(session_id, Some(technician.id));

    Ok(())
}

#[tokio::test]
// Test the return of a 401 unauthorized response for a wrong password
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;
    test.insert_technician("jordan@example.com").await?;

    let mut login_body = login_dto("jordan@example.com");
    login_body.password = "wrong".to_string();

    let result = login(State(test.state()), test.session.clone(), Json(login_body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
// Test the return of a 401 unauthorized response for an unknown email
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_dto("nobody@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
