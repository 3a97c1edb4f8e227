//! Admin entity - Back-office accounts. Passwords are stored as argon2
//! hashes, never in the clear.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login email
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Admins have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
