//! DTO builders shared by unit tests.

use chrono::NaiveDate;

use crate::{
    data::device::NewDevice,
    model::{
        device::RegisterDeviceDto,
        ticket::{CreateTicketDto, SubmitFeedbackDto},
    },
};

pub fn new_device(serial_number: &str) -> NewDevice {
    NewDevice {
        serial_number: serial_number.to_string(),
        device_type: "Laptop".to_string(),
        brand: None,
        model: "X1".to_string(),
        location: "HQ".to_string(),
        os: "Win11".to_string(),
        date_issued: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
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

pub fn submit_feedback_dto(status_label: &str) -> SubmitFeedbackDto {
    SubmitFeedbackDto {
        comment: "replaced PSU".to_string(),
        remark: None,
        status_label: status_label.to_string(),
        date_solved: None,
    }
}
