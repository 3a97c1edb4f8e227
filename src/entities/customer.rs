//! Customer entity - Registered storefront accounts. Checkout does not
//! require one; orders reference a customer only when placed while
//! logged in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub phone: String,
    /// Login email
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Customers have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
