//! Device registry: serial lookup and registration.

use sea_orm::DatabaseConnection;

use crate::{
    data::device::{DeviceRepository, NewDevice},
    error::{registry::RegistryError, Error},
    model::device::{DeviceCheckDto, DeviceDto, RegisterDeviceDto},
};

/// Service for the device registry.
pub struct DeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceService<'a> {
    /// Creates a new instance of [`DeviceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exact-match lookup by serial number.
    ///
    /// An empty or whitespace serial is a validation error, not a miss. When
    /// the device is unknown the response still carries the serial, so the
    /// registration step receives it request-scoped rather than through
    /// ambient session state.
    pub async fn check_serial(&self, serial_number: &str) -> Result<DeviceCheckDto, Error> {
        let serial_number = serial_number.trim();

        if serial_number.is_empty() {
            return Err(RegistryError::EmptySerial.into());
        }

        let device = DeviceRepository::new(self.db)
            .get_by_serial(serial_number)
            .await?;

        Ok(DeviceCheckDto {
            found: device.is_some(),
            serial_number: serial_number.to_string(),
            device: device.map(DeviceDto::from),
        })
    }

    /// Registers a new device.
    ///
    /// # Returns
    /// - `Ok(DeviceDto)` - Device registered
    /// - `Err(Error::RegistryError(RegistryError::MissingField))` - Empty required field
    /// - `Err(Error::RegistryError(RegistryError::DuplicateSerial))` - Serial taken; no write performed
    pub async fn register(&self, device: RegisterDeviceDto) -> Result<DeviceDto, Error> {
        let serial_number = device.serial_number.trim().to_string();
        let device_type = device.device_type.trim().to_string();
        let model = device.model.trim().to_string();
        let location = device.location.trim().to_string();

        if serial_number.is_empty() {
            return Err(RegistryError::EmptySerial.into());
        }
        if device_type.is_empty() {
            return Err(RegistryError::MissingField("device_type").into());
        }
        if model.is_empty() {
            return Err(RegistryError::MissingField("model").into());
        }
        if location.is_empty() {
            return Err(RegistryError::MissingField("location").into());
        }

        let device_repo = DeviceRepository::new(self.db);

        if device_repo.get_by_serial(&serial_number).await?.is_some() {
            return Err(RegistryError::DuplicateSerial(serial_number).into());
        }

        let created = device_repo
            .create(NewDevice {
                serial_number,
                device_type,
                brand: device
                    .brand
                    .map(|brand| brand.trim().to_string())
                    .filter(|brand| !brand.is_empty()),
                model,
                location,
                os: device.os.trim().to_string(),
                date_issued: device.date_issued,
            })
            .await?;

        Ok(DeviceDto::from(created))
    }
}
