/// Catalogue seed loading from config.toml
pub mod catalogue;

/// Database connection and table creation
pub mod database;

/// Runtime settings from environment variables
pub mod settings;

pub use settings::AppConfig;
