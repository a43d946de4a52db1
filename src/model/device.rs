//! Device registry request and response models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered device.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeviceDto {
    /// Database id of the device.
    pub id: i32,
    /// Unique serial number.
    pub serial_number: String,
    /// Device category, e.g. "Laptop".
    pub device_type: String,
    /// Manufacturer, if recorded.
    pub brand: Option<String>,
    /// Model designation.
    pub model: String,
    /// Where the device lives, e.g. an office name.
    pub location: String,
    /// Operating system.
    pub os: String,
    /// Date the device was issued.
    pub date_issued: NaiveDate,
}

impl From<entity::device::Model> for DeviceDto {
    fn from(device: entity::device::Model) -> Self {
        Self {
            id: device.id,
            serial_number: device.serial_number,
            device_type: device.device_type,
            brand: device.brand,
            model: device.model,
            location: device.location,
            os: device.os,
            date_issued: device.date_issued,
        }
    }
}

/// Outcome of a serial-number lookup.
///
/// When the device is unknown, the searched serial is echoed back so the
/// client can carry it into the registration form without any server-side
/// pending state.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeviceCheckDto {
    /// Whether a device with the serial exists.
    pub found: bool,
    /// The serial number that was searched.
    pub serial_number: String,
    /// The device record when found.
    pub device: Option<DeviceDto>,
}

/// Device registration payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterDeviceDto {
    /// Unique serial number.
    pub serial_number: String,
    /// Device category, e.g. "Laptop".
    pub device_type: String,
    /// Manufacturer.
    pub brand: Option<String>,
    /// Model designation.
    pub model: String,
    /// Where the device lives.
    pub location: String,
    /// Operating system.
    pub os: String,
    /// Date the device was issued.
    pub date_issued: NaiveDate,
}
