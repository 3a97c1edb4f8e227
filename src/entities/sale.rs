//! Sale entity - One revenue record per order, written at checkout and used
//! by the dashboard analytics.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the sale was recorded
    pub date: DateTimeUtc,
    /// Sale amount (mirrors the order amount)
    pub amount: f64,
    /// Weekday name at recording time, e.g. `"Monday"`; analytics group on it
    pub day: Option<String>,
    /// Unique reference, `TXN-{order_id}-{unix_ts}`
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// The order that produced this sale
    pub order_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
