//! Vendor entity - An upstream supplier, dealer, or service provider the
//! business owes money to. Referenced by vendor payments.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vendor database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    /// Unique identifier for the vendor
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Contact name, the only required field
    pub name: String,
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// One of "Supplier", "Dealer", "Service Provider"
    pub vendor_type: Option<String>,
    /// GST identification number
    pub gstin: Option<String>,
    /// Permanent account number
    pub pan: Option<String>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub ifsc_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Vendor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One vendor receives many payments
    #[sea_orm(has_many = "super::vendor_payment::Entity")]
    Payments,
}

impl Related<super::vendor_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
