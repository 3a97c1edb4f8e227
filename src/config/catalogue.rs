//! Catalogue seed configuration loading from config.toml.
//!
//! The bulk-fabric catalogue shown on the marketing site is seeded from a
//! TOML file on first run (when the fabric table is empty). Edits made
//! through the admin API afterwards are never overwritten.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogueConfig {
    /// Fabric catalogue entries to seed
    #[serde(default)]
    pub fabrics: Vec<FabricSeed>,
    /// Readymade shop items to seed
    #[serde(default)]
    pub readymade_products: Vec<ReadymadeSeed>,
}

/// Seed data for a single bulk fabric
#[derive(Debug, Deserialize, Clone)]
pub struct FabricSeed {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    pub image: Option<String>,
    pub file: Option<String>,
    pub category: Option<String>,
    /// Comma-separated feature list, as stored
    pub features: Option<String>,
}

/// Seed data for a single readymade product
#[derive(Debug, Deserialize, Clone)]
pub struct ReadymadeSeed {
    pub name: String,
    pub quantity: String,
    pub quality: String,
    pub price: Option<i32>,
}

/// Loads catalogue seed data from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<CatalogueConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalogue file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalogue TOML: {e}"),
    })
}
