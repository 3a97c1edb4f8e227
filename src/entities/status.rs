//! Closed status enums shared by the order, invoice, and vendor-payment
//! entities. Stored as their display strings in the database.
//!
//! Closed enums rather than free text, so an impossible status cannot be
//! written in the first place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a customer order. Orders are deleted outright on
/// cancellation, so there is no `Cancelled` state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OrderStatus {
    /// Order received and awaiting fulfilment (the default)
    #[sea_orm(string_value = "Active")]
    Active,
    /// Order fulfilled
    #[sea_orm(string_value = "Completed")]
    Completed,
}

/// Payment status of a customer invoice. Any status may follow any other;
/// no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum InvoiceStatus {
    /// Awaiting payment
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Payment received
    #[sea_orm(string_value = "Paid")]
    Paid,
    /// Past the due date without payment
    #[sea_orm(string_value = "Overdue")]
    Overdue,
}

/// Status of a payment owed to a vendor. Transitions are free-form, but the
/// move into `Paid` from any other status is observed for side effects (see
/// `core::vendor_payment::save_payment`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PaymentStatus {
    /// Scheduled but not yet paid (the default)
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Payment completed
    #[sea_orm(string_value = "Paid")]
    Paid,
    /// Past the due date without payment
    #[sea_orm(string_value = "Overdue")]
    Overdue,
    /// Obligation withdrawn
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}
