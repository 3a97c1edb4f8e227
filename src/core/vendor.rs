//! Vendor registry business logic.
//!
//! Vendors are simple records; only the contact name is required. Updates
//! are partial by design so the admin form can send just the fields that
//! changed.

use crate::{
    entities::{Vendor, VendorColumn, VendorPayment, VendorPaymentColumn, vendor},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// The optional detail fields shared by vendor creation and update.
#[derive(Debug, Clone, Default)]
pub struct VendorDetails {
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub vendor_type: Option<String>,
    pub gstin: Option<String>,
    pub pan: Option<String>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub ifsc_code: Option<String>,
    pub notes: Option<String>,
}

/// Creates a vendor. The name must be non-empty; everything else is
/// optional.
pub async fn create_vendor(
    db: &DatabaseConnection,
    name: &str,
    details: VendorDetails,
) -> Result<vendor::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Vendor name is required".to_string(),
        });
    }

    let model = vendor::ActiveModel {
        name: Set(name.to_string()),
        company_name: Set(details.company_name),
        contact_person: Set(details.contact_person),
        email: Set(details.email),
        phone: Set(details.phone),
        address: Set(details.address),
        vendor_type: Set(details.vendor_type),
        gstin: Set(details.gstin),
        pan: Set(details.pan),
        bank_account: Set(details.bank_account),
        bank_name: Set(details.bank_name),
        ifsc_code: Set(details.ifsc_code),
        notes: Set(details.notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves all vendors, newest first.
pub async fn list_vendors(db: &DatabaseConnection) -> Result<Vec<vendor::Model>> {
    Vendor::find()
        .order_by_desc(VendorColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single vendor by id, or None when it does not exist.
pub async fn get_vendor(db: &DatabaseConnection, vendor_id: i64) -> Result<Option<vendor::Model>> {
    Vendor::find_by_id(vendor_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update: `name`, when given, replaces the stored name;
/// each detail field only overwrites when it is `Some`.
pub async fn update_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
    name: Option<&str>,
    details: VendorDetails,
) -> Result<vendor::Model> {
    let vendor = Vendor::find_by_id(vendor_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Vendor",
            id: vendor_id,
        })?;

    let mut active: vendor::ActiveModel = vendor.into();

    if let Some(name) = name {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                message: "Vendor name is required".to_string(),
            });
        }
        active.name = Set(name.to_string());
    }
    if details.company_name.is_some() {
        active.company_name = Set(details.company_name);
    }
    if details.contact_person.is_some() {
        active.contact_person = Set(details.contact_person);
    }
    if details.email.is_some() {
        active.email = Set(details.email);
    }
    if details.phone.is_some() {
        active.phone = Set(details.phone);
    }
    if details.address.is_some() {
        active.address = Set(details.address);
    }
    if details.vendor_type.is_some() {
        active.vendor_type = Set(details.vendor_type);
    }
    if details.gstin.is_some() {
        active.gstin = Set(details.gstin);
    }
    if details.pan.is_some() {
        active.pan = Set(details.pan);
    }
    if details.bank_account.is_some() {
        active.bank_account = Set(details.bank_account);
    }
    if details.bank_name.is_some() {
        active.bank_name = Set(details.bank_name);
    }
    if details.ifsc_code.is_some() {
        active.ifsc_code = Set(details.ifsc_code);
    }
    if details.notes.is_some() {
        active.notes = Set(details.notes);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a vendor and every payment recorded against it, atomically.
pub async fn delete_vendor(db: &DatabaseConnection, vendor_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let vendor = Vendor::find_by_id(vendor_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "Vendor",
            id: vendor_id,
        })?;

    VendorPayment::delete_many()
        .filter(VendorPaymentColumn::VendorId.eq(vendor_id))
        .exec(&txn)
        .await?;

    vendor.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
