//! Contact enquiry intake and admin review.
//!
//! An enquiry is persisted first, then acknowledged to the sender and
//! forwarded to the admin inbox. Mail delivery failure never loses the
//! enquiry; it is logged and the submission still succeeds.

use crate::{
    email::{Mailer, templates},
    entities::{Enquiry, enquiry},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields from the contact form.
#[derive(Debug, Clone)]
pub struct EnquiryForm {
    pub name: String,
    pub phone: String,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
}

/// Persists an enquiry and sends the acknowledgement and admin notification
/// emails.
pub async fn submit_enquiry(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    admin_email: &str,
    form: EnquiryForm,
) -> Result<enquiry::Model> {
    for (value, label) in [
        (&form.name, "name"),
        (&form.phone, "phone"),
        (&form.email, "email"),
        (&form.message, "message"),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                message: format!("Enquiry {label} is required"),
            });
        }
    }

    let model = enquiry::ActiveModel {
        name: Set(form.name),
        phone: Set(form.phone),
        company: Set(form.company),
        email: Set(form.email),
        message: Set(form.message),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let enquiry = model.insert(db).await?;

    if let Err(e) = mailer.send(&templates::enquiry_acknowledgement(&enquiry)) {
        tracing::warn!(enquiry_id = enquiry.id, error = %e, "enquiry acknowledgement not sent");
    }
    if let Err(e) = mailer.send(&templates::enquiry_notification(&enquiry, admin_email)) {
        tracing::warn!(enquiry_id = enquiry.id, error = %e, "enquiry notification not sent");
    }

    Ok(enquiry)
}

/// Retrieves all enquiries, newest first.
pub async fn list_enquiries(db: &DatabaseConnection) -> Result<Vec<enquiry::Model>> {
    Enquiry::find()
        .order_by_desc(enquiry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a reviewed enquiry.
pub async fn delete_enquiry(db: &DatabaseConnection, enquiry_id: i64) -> Result<()> {
    let enquiry = Enquiry::find_by_id(enquiry_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Enquiry",
            id: enquiry_id,
        })?;

    enquiry.delete(db).await?;
    Ok(())
}

/// Deletes a batch of enquiries, skipping ids that no longer exist. Returns
/// how many were removed.
pub async fn delete_enquiries(db: &DatabaseConnection, enquiry_ids: &[i64]) -> Result<u64> {
    let mut deleted = 0;
    for &enquiry_id in enquiry_ids {
        match delete_enquiry(db, enquiry_id).await {
            Ok(()) => deleted += 1,
            Err(Error::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(deleted)
}
