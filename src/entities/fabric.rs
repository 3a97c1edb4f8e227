//! Fabric entity - A bulk fabric in the catalogue (the marketing-site
//! "Products" page), as opposed to the readymade shop items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fabric database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fabrics")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price per unit in whole rupees
    pub price: i32,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    /// Image URL
    pub image: Option<String>,
    /// Catalogue PDF link
    pub file: Option<String>,
    pub category: Option<String>,
    /// Feature list stored as a comma-separated string
    pub features: Option<String>,
}

/// Fabrics have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
