//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        cart::{CustomerInfo, OrderDraft},
        events::PaymentEvents,
        order, vendor, vendor_payment,
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a checkout draft with sensible defaults.
///
/// # Defaults
/// * `product_name`: `"Bedsheet Set (x10)"`
/// * `quantity`: `"10"`
/// * `quality`: `"Multiple Items"`
/// * `amount`: 12000.0
#[must_use]
pub fn test_order_draft(customer_name: &str, customer_email: &str) -> OrderDraft {
    OrderDraft {
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        customer_phone: "9876543210".to_string(),
        customer_address: "14 Mill Road".to_string(),
        readymade_product_id: Some(1),
        product_name: "Bedsheet Set (x10)".to_string(),
        quantity: "10".to_string(),
        quality: "Multiple Items".to_string(),
        amount: 12000.0,
    }
}

/// Builds a checkout customer form with sensible defaults.
#[must_use]
pub fn test_customer_info(name: &str, email: &str) -> CustomerInfo {
    CustomerInfo {
        name: name.to_string(),
        email: email.to_string(),
        phone: "9876543210".to_string(),
        address: "14 Mill Road".to_string(),
    }
}

/// Creates a test order (and its sale record) with the customer's email
/// derived from their name.
pub async fn create_test_order(
    db: &DatabaseConnection,
    customer_name: &str,
) -> Result<entities::order::Model> {
    let email = format!(
        "{}@example.com",
        customer_name.to_lowercase().replace(' ', ".")
    );
    order::create_order(db, test_order_draft(customer_name, &email)).await
}

/// Creates a test vendor with only the name filled in.
pub async fn create_test_vendor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::vendor::Model> {
    vendor::create_vendor(db, name, vendor::VendorDetails::default()).await
}

/// Creates a pending test payment against a vendor.
///
/// # Defaults
/// * `status`: Pending
/// * `description`: `"Test payment"`
pub async fn create_test_payment(
    db: &DatabaseConnection,
    vendor_id: i64,
    amount: f64,
) -> Result<entities::vendor_payment::Model> {
    let events = PaymentEvents::new();
    vendor_payment::create_payment(
        db,
        &events,
        vendor_payment::PaymentRequest {
            vendor_id,
            amount,
            payment_date: chrono::Utc::now(),
            status: entities::PaymentStatus::Pending,
            description: Some("Test payment".to_string()),
            payment_method: None,
            due_date: None,
            reference_number: None,
            bill_reference: None,
            notes: None,
        },
    )
    .await
}

/// Sets up a complete test environment with one order.
/// Returns (db, order) for common test scenarios.
pub async fn setup_with_order() -> Result<(DatabaseConnection, entities::order::Model)> {
    let db = setup_test_db().await?;
    let order = create_test_order(&db, "Asha Rao").await?;
    Ok((db, order))
}

/// Sets up a complete test environment with one vendor.
/// Returns (db, vendor) for payment-related tests.
pub async fn setup_with_vendor() -> Result<(DatabaseConnection, entities::vendor::Model)> {
    let db = setup_test_db().await?;
    let vendor = create_test_vendor(&db, "Ravi Textiles").await?;
    Ok((db, vendor))
}
