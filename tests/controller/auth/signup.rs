use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fixdesk::controller::auth::signup;
use fixdesk_test_utils::prelude::*;

use crate::util::signup_dto;

#[tokio::test]
// Test the return of a 201 created response for a valid signup
async fn creates_technician_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;

    let result = signup(State(test.state()), Json(signup_dto("jordan@example.com"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
// Test the return of a 409 conflict response for a duplicate email
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;

    let result = signup(State(test.state()), Json(signup_dto("jordan@example.com"))).await;
    assert!(result.is_ok());

    let result = signup(State(test.state()), Json(signup_dto("jordan@example.com"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 bad request response for a blank name
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Technician)?;

    let mut signup_body = signup_dto("jordan@example.com");
    signup_body.name = "  ".to_string();

    let result = signup(State(test.state()), Json(signup_body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
