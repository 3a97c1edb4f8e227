//! Runtime settings loaded from the environment.
//!
//! Everything here has a development default so `cargo run` works out of the
//! box; production deployments override via `.env` or real environment
//! variables.

use crate::errors::Result;

/// Application configuration assembled at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SeaORM connection string
    pub database_url: String,
    /// Port the HTTP server binds on
    pub port: u16,
    /// Address enquiry notifications are sent to
    pub admin_email: String,
    /// How long an admin session token stays valid
    pub session_ttl_minutes: i64,
    /// Path to the catalogue seed file
    pub catalogue_path: String,
}

impl AppConfig {
    /// Reads configuration from the environment, applying defaults for
    /// anything unset.
    ///
    /// # Errors
    /// Returns an error if a variable is set but unparseable (e.g. a
    /// non-numeric `PORT`).
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/loomdesk.sqlite?mode=rwc".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| crate::errors::Error::Config {
                message: format!("PORT is not a valid port number: {raw}"),
            })?,
            Err(_) => 8000,
        };

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());

        let session_ttl_minutes = match std::env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => raw.parse().map_err(|_| crate::errors::Error::Config {
                message: format!("SESSION_TTL_MINUTES is not a valid integer: {raw}"),
            })?,
            Err(_) => 60,
        };

        let catalogue_path =
            std::env::var("CATALOGUE_PATH").unwrap_or_else(|_| "config.toml".to_string());

        Ok(Self {
            database_url,
            port,
            admin_email,
            session_ttl_minutes,
            catalogue_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only assert on knobs this test does not share with the environment
        let config = AppConfig::from_env().expect("defaults should always load");
        assert!(config.port > 0);
        assert!(config.session_ttl_minutes > 0);
        assert!(!config.database_url.is_empty());
    }
}
