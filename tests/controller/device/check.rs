use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use fixdesk::controller::device::{check, CheckDeviceQuery};
use fixdesk_test_utils::prelude::*;

use crate::controller::device::log_in_technician;

#[tokio::test]
// Test the return of a 200 response for a known serial number
async fn finds_registered_device() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    test.insert_device("SN-001").await?;

    let result = check(
        State(test.state()),
        test.session.clone(),
        Query(CheckDeviceQuery {
            serial: "SN-001".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 200 response for an unknown serial number
async fn unknown_serial_is_not_an_error() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = check(
        State(test.state()),
        test.session.clone(),
        Query(CheckDeviceQuery {
            serial: "SN-404".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 response for a whitespace serial number
async fn rejects_blank_serial() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = check(
        State(test.state()),
        test.session.clone(),
        Query(CheckDeviceQuery {
            serial: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// Test the return of a 404 response when no technician is logged in
async fn requires_login() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;

    let result = check(
        State(test.state()),
        test.session.clone(),
        Query(CheckDeviceQuery {
            serial: "SN-001".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
