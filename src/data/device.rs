use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Attributes captured when a device is registered.
pub struct NewDevice {
    pub serial_number: String,
    pub device_type: String,
    pub brand: Option<String>,
    pub model: String,
    pub location: String,
    pub os: String,
    pub date_issued: NaiveDate,
}

pub struct DeviceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceRepository<'a, C> {
    /// Creates a new instance of [`DeviceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, device: NewDevice) -> Result<entity::device::Model, DbErr> {
        let device = entity::device::ActiveModel {
            serial_number: ActiveValue::Set(device.serial_number),
            device_type: ActiveValue::Set(device.device_type),
            brand: ActiveValue::Set(device.brand),
            model: ActiveValue::Set(device.model),
            location: ActiveValue::Set(device.location),
            os: ActiveValue::Set(device.os),
            date_issued: ActiveValue::Set(device.date_issued),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        device.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::device::Model>, DbErr> {
        entity::prelude::Device::find_by_id(id).one(self.db).await
    }

    /// Exact-match lookup by serial number
    pub async fn get_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<entity::device::Model>, DbErr> {
        entity::prelude::Device::find()
            .filter(entity::device::Column::SerialNumber.eq(serial_number))
            .one(self.db)
            .await
    }
}
