mod dashboard;
mod status;
mod tickets;

use fixdesk::model::session::technician::SessionTechnicianId;
use fixdesk_test_utils::{TestError, TestSetup};

/// Inserts a technician and logs them into the test session.
pub async fn log_in_technician(test: &TestSetup) -> Result<(), TestError> {
    let technician = test.insert_technician("jordan@example.com").await?;
    SessionTechnicianId::insert(&test.session, technician.id)
        .await
        .unwrap();

    Ok(())
}
