//! Readymade product entity - A shop item sold through the cart flow.
//!
//! The leading number in `quantity` (e.g. `"50 meters"`) doubles as the
//! minimum order quantity in the cart.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Readymade product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readymade_products")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Unit description, e.g. `"50 meters"`; leading number = minimum order
    pub quantity: String,
    pub quality: String,
    /// Price per unit in whole rupees
    pub price: Option<i32>,
}

/// Readymade products have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
