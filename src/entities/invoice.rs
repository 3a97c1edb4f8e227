//! Invoice entity - A billing document generated from exactly one order.
//!
//! The tax math (`tax_amount`, `total_amount`) is computed once at generation
//! time and persisted; it is never recomputed on read, so a later edit of
//! `tax_rate` elsewhere cannot retroactively change an issued invoice.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::status::InvoiceStatus;

/// Invoice database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier for the invoice
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-facing document number, `INV-YYYYMMDD-XXXXXXXX`
    #[sea_orm(unique)]
    pub invoice_number: String,
    /// The order this invoice bills; the unique index enforces at most one
    /// invoice per order even if the application check is bypassed
    #[sea_orm(unique)]
    pub order_id: i64,
    /// Customer details copied from the order at generation time
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub customer_phone: Option<String>,
    /// Product summary copied from the order
    pub product_name: Option<String>,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    /// Order amount before tax
    pub subtotal: f64,
    /// Tax percentage applied at generation (GST-style, default 18)
    pub tax_rate: f64,
    /// `subtotal * tax_rate / 100`, persisted
    pub tax_amount: f64,
    /// `subtotal + tax_amount`, persisted
    pub total_amount: f64,
    /// Payment status, mutated independently of the order's own status
    pub payment_status: InvoiceStatus,
    /// How the customer pays, free text
    pub payment_method: Option<String>,
    /// When the invoice was issued
    pub issue_date: DateTimeUtc,
    /// Payment deadline, if any
    pub due_date: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Invoice and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each invoice bills exactly one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
