use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::TechnicianDto, session::technician::SessionTechnicianId},
    service::auth::AuthService,
};

/// Retrieves the technician identity from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The technician's session
///
/// # Returns
/// - `Ok(TechnicianDto)`: Technician found, containing id, name, and email
/// - `Err(Error::AuthError(AuthError::NotLoggedIn))`: No technician ID in session
/// - `Err(Error::AuthError(AuthError::TechnicianNotInDatabase))`: Session ID not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_technician_from_session(
    state: &AppState,
    session: &Session,
) -> Result<TechnicianDto, Error> {
    // Get technician from session
    let Some(technician_id) = SessionTechnicianId::get(session).await? else {
        return Err(Error::AuthError(AuthError::NotLoggedIn));
    };

    // Get technician from database
    let Some(technician) = AuthService::new(&state.db)
        .get_technician(technician_id)
        .await?
    else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for technician ID {} with active session but was not found in database",
            technician_id
        );

        return Err(Error::AuthError(AuthError::TechnicianNotInDatabase(
            technician_id,
        )));
    };

    Ok(technician)
}
