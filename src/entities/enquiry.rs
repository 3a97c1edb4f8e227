//! Enquiry entity - A contact-form submission from a prospective customer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Enquiry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
    pub created_at: DateTimeUtc,
}

/// Enquiries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
