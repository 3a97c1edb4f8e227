//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust struct definitions without
//! hand-written SQL.

use crate::entities::{
    Admin, Customer, Employee, Enquiry, Fabric, Invoice, Order, ReadymadeProduct, Sale, Session,
    Vendor, VendorPayment,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions. Idempotent; existing
/// tables are left alone, so this runs on every startup.
///
/// # Errors
/// Returns an error if any table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    macro_rules! create_table {
        ($entity:expr) => {
            db.execute(
                builder.build(schema.create_table_from_entity($entity).if_not_exists()),
            )
            .await?;
        };
    }

    create_table!(Admin);
    create_table!(Session);
    create_table!(Customer);
    create_table!(Enquiry);
    create_table!(Fabric);
    create_table!(ReadymadeProduct);
    create_table!(Order);
    create_table!(Sale);
    create_table!(Invoice);
    create_table!(Vendor);
    create_table!(VendorPayment);
    create_table!(Employee);

    Ok(())
}
