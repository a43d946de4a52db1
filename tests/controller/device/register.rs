use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fixdesk::controller::device::register;
use fixdesk_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{controller::device::log_in_technician, util::register_device_dto};

#[tokio::test]
// Test the return of a 201 response and a stored row for a valid registration
async fn registers_device() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(register_device_dto("SN-001")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::Device::find()
        .filter(entity::device::Column::SerialNumber.eq("SN-001"))
        .one(&test.state.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
// Test the return of a 409 conflict response for a duplicate serial number
async fn rejects_duplicate_serial() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;
    test.insert_device("SN-001").await?;

    let result = register(
        State(test.state()),
        test.session.clone(),
        Json(register_device_dto("SN-001")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
// Test the return of a 400 response for a blank required field
async fn rejects_blank_model() -> Result<(), TestError> {
    let test = test_setup_with_workflow_tables!()?;
    log_in_technician(&test).await?;

    let mut device = register_device_dto("SN-001");
    device.model = String::new();

    let result = register(State(test.state()), test.session.clone(), Json(device)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
