//! Environment-derived application configuration.

/// Runtime configuration read from the process environment.
pub struct Config {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Valkey/Redis connection URL for the session store.
    pub valkey_url: String,
    /// Address the HTTP server binds to, e.g. `0.0.0.0:8080`.
    pub server_address: String,
}

impl Config {
    /// Reads configuration from the environment.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            valkey_url: std::env::var("VALKEY_URL")?,
            server_address: std::env::var("SERVER_ADDRESS")?,
        })
    }
}
