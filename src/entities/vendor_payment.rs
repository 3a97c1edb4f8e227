//! Vendor payment entity - A scheduled or completed payment obligation to a
//! vendor. The transition of `status` into `Paid` is the one event in the
//! system that other views observe (dashboard revenue refresh).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::status::PaymentStatus;

/// Vendor payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendor_payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The vendor this payment is owed to
    pub vendor_id: i64,
    /// Human-facing document number, `VP-YYYYMMDD-XXXXXXXX`
    #[sea_orm(unique)]
    pub payment_number: String,
    /// What the payment is for
    pub description: Option<String>,
    /// Payment amount
    pub amount: f64,
    /// One of "Bank Transfer", "Cash", "Cheque", "UPI"
    pub payment_method: Option<String>,
    /// When the payment was (or will be) made
    pub payment_date: DateTimeUtc,
    /// Payment deadline, if any
    pub due_date: Option<DateTimeUtc>,
    /// Current status; free-form transitions, Paid is observed
    pub status: PaymentStatus,
    /// Transaction or cheque number
    pub reference_number: Option<String>,
    /// Vendor bill or invoice number this settles
    pub bill_reference: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Defines relationships between VendorPayment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one vendor
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
