//! Session wrapper for the logged-in technician's id.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for the logged-in technician's id.
pub const SESSION_TECHNICIAN_ID_KEY: &str = "fixdesk:technician:id";

/// Session wrapper for the technician id, stored as a string and parsed on
/// read.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionTechnicianId(pub String);

impl SessionTechnicianId {
    /// Insert technician ID into session
    pub async fn insert(session: &Session, technician_id: i32) -> Result<(), Error> {
        session
            .insert(
                SESSION_TECHNICIAN_ID_KEY,
                SessionTechnicianId(technician_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get technician ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionTechnicianId>(SESSION_TECHNICIAN_ID_KEY)
            .await?
            .map(|SessionTechnicianId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session technician id: {}", e))
                })
            })
            .transpose()
    }
}
