//! Identity collaborator: technician signup, login, and session lookup.
//!
//! Credentials are stored as argon2id hashes. The ticket workflow never sees
//! them; it only consumes the `{id, name, email}` identity this service
//! yields.

use sea_orm::DatabaseConnection;

use crate::{
    data::technician::TechnicianRepository,
    error::{auth::AuthError, Error},
    model::auth::{LoginDto, SignupDto, TechnicianDto},
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a plain password with argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
    use argon2::Argon2;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verify a password against an argon2id hash.
fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use argon2::Argon2;

    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn to_dto(technician: entity::technician::Model) -> TechnicianDto {
    TechnicianDto {
        id: technician.id,
        name: technician.name,
        email: technician.email,
    }
}

/// Service for technician account operations.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new technician account.
    ///
    /// # Returns
    /// - `Ok(TechnicianDto)` - Account created
    /// - `Err(Error::AuthError(AuthError::MissingField))` - Empty required field
    /// - `Err(Error::AuthError(AuthError::PasswordTooShort))` - Password below minimum length
    /// - `Err(Error::AuthError(AuthError::EmailAlreadyRegistered))` - Email taken; no write performed
    pub async fn signup(&self, signup: SignupDto) -> Result<TechnicianDto, Error> {
        let name = signup.name.trim().to_string();
        let email = signup.email.trim().to_string();

        if name.is_empty() {
            return Err(AuthError::MissingField("name").into());
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("email").into());
        }
        if signup.password.is_empty() {
            return Err(AuthError::MissingField("password").into());
        }
        if signup.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        let technician_repo = TechnicianRepository::new(self.db);

        if technician_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered(email).into());
        }

        let password_hash = hash_password(&signup.password)?;
        let phone = signup
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        let technician = technician_repo
            .create(name, email, password_hash, phone)
            .await?;

        Ok(to_dto(technician))
    }

    /// Verifies credentials and yields the technician identity.
    ///
    /// The same error is returned for an unknown email and a wrong password.
    pub async fn login(&self, login: LoginDto) -> Result<TechnicianDto, Error> {
        let email = login.email.trim();

        if email.is_empty() {
            return Err(AuthError::MissingField("email").into());
        }
        if login.password.is_empty() {
            return Err(AuthError::MissingField("password").into());
        }

        let technician_repo = TechnicianRepository::new(self.db);

        let Some(technician) = technician_repo.get_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&login.password, &technician.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(to_dto(technician))
    }

    /// Retrieves a technician identity by id.
    pub async fn get_technician(&self, technician_id: i32) -> Result<Option<TechnicianDto>, Error> {
        let technician = TechnicianRepository::new(self.db)
            .get_by_id(technician_id)
            .await?;

        Ok(technician.map(to_dto))
    }
}
