//! DTO builders shared across controller tests.

use chrono::NaiveDate;
use fixdesk::model::{
    auth::{LoginDto, SignupDto},
    device::RegisterDeviceDto,
    ticket::{CreateTicketDto, RecordPartUsageDto, SubmitFeedbackDto},
};
use fixdesk_test_utils::constant::TEST_PASSWORD;
use rust_decimal::Decimal;

pub fn signup_dto(email: &str) -> SignupDto {
    SignupDto {
        name: "Jordan Reyes".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        phone: Some("555-0100".to_string()),
    }
}

pub fn login_dto(email: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn register_device_dto(serial_number: &str) -> RegisterDeviceDto {
    RegisterDeviceDto {
        serial_number: serial_number.to_string(),
        device_type: "Laptop".to_string(),
        brand: Some("Lenovo".to_string()),
        model: "X1".to_string(),
        location: "HQ".to_string(),
        os: "Win11".to_string(),
        date_issued: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

pub fn create_ticket_dto(device_id: i32) -> CreateTicketDto {
    CreateTicketDto {
        device_id,
        reported_by: "Alice".to_string(),
        issue_description: "won't boot".to_string(),
    }
}

pub fn record_part_dto(part_name: &str) -> RecordPartUsageDto {
    RecordPartUsageDto {
        part_name: part_name.to_string(),
        quantity: 1,
        unit_cost: Decimal::new(4000, 2),
    }
}

pub fn submit_feedback_dto(status_label: &str) -> SubmitFeedbackDto {
    SubmitFeedbackDto {
        comment: "replaced PSU".to_string(),
        remark: None,
        status_label: status_label.to_string(),
        date_solved: None,
    }
}
