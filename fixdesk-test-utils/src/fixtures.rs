//! Entity-level fixture inserters.
//!
//! Each method writes rows directly through sea-orm so tests can stage
//! reference data without exercising the application's own services.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_PASSWORD, error::TestError, TestSetup};

fn hash_test_password() -> Result<String, TestError> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
    use argon2::Argon2;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PasswordHash(e.to_string()))
}

fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

impl TestSetup {
    /// Inserts a technician whose password is [`TEST_PASSWORD`].
    pub async fn insert_technician(
        &self,
        email: &str,
    ) -> Result<entity::technician::Model, TestError> {
        let technician = entity::technician::ActiveModel {
            name: ActiveValue::Set("Jordan Reyes".to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(hash_test_password()?),
            phone: ActiveValue::Set(Some("555-0100".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(technician.insert(&self.state.db).await?)
    }

    /// Inserts a device with the given serial number.
    pub async fn insert_device(
        &self,
        serial_number: &str,
    ) -> Result<entity::device::Model, TestError> {
        let device = entity::device::ActiveModel {
            serial_number: ActiveValue::Set(serial_number.to_string()),
            device_type: ActiveValue::Set("Laptop".to_string()),
            brand: ActiveValue::Set(None),
            model: ActiveValue::Set("X1".to_string()),
            location: ActiveValue::Set("HQ".to_string()),
            os: ActiveValue::Set("Win11".to_string()),
            date_issued: ActiveValue::Set(fixture_date()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(device.insert(&self.state.db).await?)
    }

    /// Inserts an assignment record for the given email.
    pub async fn insert_assignment(
        &self,
        email: &str,
    ) -> Result<entity::technician_assignment::Model, TestError> {
        let assignment = entity::technician_assignment::ActiveModel {
            first_name: ActiveValue::Set("Jordan".to_string()),
            last_name: ActiveValue::Set("Reyes".to_string()),
            contact: ActiveValue::Set("555-0100".to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(assignment.insert(&self.state.db).await?)
    }

    /// Inserts a pending ticket referencing the given device and assignment.
    pub async fn insert_ticket(
        &self,
        device_id: i32,
        assignment_id: i32,
    ) -> Result<entity::ticket::Model, TestError> {
        let ticket = entity::ticket::ActiveModel {
            device_id: ActiveValue::Set(device_id),
            assignment_id: ActiveValue::Set(assignment_id),
            reported_by: ActiveValue::Set("Alice".to_string()),
            issue_description: ActiveValue::Set("won't boot".to_string()),
            status: ActiveValue::Set(entity::ticket::TicketStatus::Pending),
            opened_on: ActiveValue::Set(fixture_date()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(ticket.insert(&self.state.db).await?)
    }

    /// Inserts the whole reference chain for one pending ticket: technician,
    /// device, assignment, and the ticket itself.
    pub async fn insert_ticket_chain(
        &self,
        email: &str,
        serial_number: &str,
    ) -> Result<entity::ticket::Model, TestError> {
        self.insert_technician(email).await?;
        let device = self.insert_device(serial_number).await?;
        let assignment = self.insert_assignment(email).await?;

        self.insert_ticket(device.id, assignment.id).await
    }
}
