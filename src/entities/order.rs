//! Order entity - A customer's aggregated purchase request.
//!
//! One order is created per checkout regardless of how many cart lines it
//! came from: the `product_name`, `quantity`, and `amount` fields carry the
//! aggregated values for the whole cart. `cancellation_requested` marks an
//! order as awaiting admin action; it never cancels the order by itself.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::status::OrderStatus;

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Registered customer account, if the order was placed while logged in
    pub customer_id: Option<i64>,
    /// Customer name as entered at checkout
    pub customer_name: Option<String>,
    /// Contact email; also the credential for cancellation requests
    pub customer_email: Option<String>,
    /// Contact phone
    pub customer_phone: Option<String>,
    /// Delivery address
    pub customer_address: Option<String>,
    /// First readymade product in the cart, kept for reference
    pub readymade_product_id: Option<i64>,
    /// Bulk fabric reference, for catalogue orders
    pub fabric_id: Option<i64>,
    /// Aggregated product names, e.g. `"Bedsheet (x10), Towel (x5)"`
    pub product_name: Option<String>,
    /// Aggregated quantity as free-form text, e.g. `"15"`
    pub quantity: Option<String>,
    /// Quality descriptor; `"Multiple Items"` for multi-line carts
    pub quality: Option<String>,
    /// Total amount across all cart lines
    pub amount: Option<f64>,
    /// Fulfilment status
    pub status: OrderStatus,
    /// True when the customer has asked for cancellation and the order is
    /// awaiting admin approval (= deletion)
    pub cancellation_requested: bool,
    /// When the order was placed
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order produces one sale record at creation time
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
    /// At most one invoice is ever generated per order
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
