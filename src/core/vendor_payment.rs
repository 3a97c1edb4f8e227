//! Vendor payment business logic.
//!
//! A payment is created against a known vendor, carries a `VP-` document
//! number, and moves through statuses freely. The single observable event in
//! the lifecycle is the transition into Paid: saving a payment compares the
//! stored status against the incoming one and fires the paid notification
//! only on a genuine non-Paid to Paid change. Re-saving an already paid
//! payment never fires again.

use crate::{
    core::{document_number, events::PaymentEvents},
    entities::{PaymentStatus, Vendor, VendorPayment, VendorPaymentColumn, vendor_payment},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields supplied when recording a new payment obligation.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub vendor_id: i64,
    pub amount: f64,
    pub payment_date: DateTime<Utc>,
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub reference_number: Option<String>,
    pub bill_reference: Option<String>,
    pub notes: Option<String>,
}

/// Partial update applied by [`save_payment`]. `None` leaves the stored
/// value alone; `status` is compared against the stored status to detect the
/// paid transition.
#[derive(Debug, Clone, Default)]
pub struct PaymentUpdate {
    pub amount: Option<f64>,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Option<PaymentStatus>,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub reference_number: Option<String>,
    pub bill_reference: Option<String>,
    pub notes: Option<String>,
}

/// Records a payment against a vendor, assigning a `VP-YYYYMMDD-XXXXXXXX`
/// document number. The vendor must exist and the amount must be a positive
/// finite number.
pub async fn create_payment(
    db: &DatabaseConnection,
    events: &PaymentEvents,
    request: PaymentRequest,
) -> Result<vendor_payment::Model> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: request.amount,
        });
    }

    Vendor::find_by_id(request.vendor_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Vendor",
            id: request.vendor_id,
        })?;

    let model = vendor_payment::ActiveModel {
        vendor_id: Set(request.vendor_id),
        payment_number: Set(document_number("VP")),
        description: Set(request.description),
        amount: Set(request.amount),
        payment_method: Set(request.payment_method),
        payment_date: Set(request.payment_date),
        due_date: Set(request.due_date),
        status: Set(request.status),
        reference_number: Set(request.reference_number),
        bill_reference: Set(request.bill_reference),
        notes: Set(request.notes),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let payment = model.insert(db).await?;

    // A payment can be recorded as already paid; that still counts
    if payment.status == PaymentStatus::Paid {
        events.notify_paid();
    }

    Ok(payment)
}

/// Retrieves payments, newest first, optionally narrowed to one status.
pub async fn list_payments(
    db: &DatabaseConnection,
    status: Option<PaymentStatus>,
) -> Result<Vec<vendor_payment::Model>> {
    let mut query = VendorPayment::find().order_by_desc(VendorPaymentColumn::Id);
    if let Some(status) = status {
        query = query.filter(VendorPaymentColumn::Status.eq(status));
    }
    query.all(db).await.map_err(Into::into)
}

/// Retrieves a single payment by id, or None when it does not exist.
pub async fn get_payment(
    db: &DatabaseConnection,
    payment_id: i64,
) -> Result<Option<vendor_payment::Model>> {
    VendorPayment::find_by_id(payment_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every payment recorded against one vendor, newest first.
pub async fn payments_for_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
) -> Result<Vec<vendor_payment::Model>> {
    VendorPayment::find()
        .filter(VendorPaymentColumn::VendorId.eq(vendor_id))
        .order_by_desc(VendorPaymentColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Saves changes to a payment.
///
/// The stored status is read before anything is written; if it was not Paid
/// and the update makes it Paid, the paid notification fires exactly once
/// after the row is persisted. Every other combination, including Paid to
/// Paid re-saves and Paid back to Pending corrections, stays silent.
pub async fn save_payment(
    db: &DatabaseConnection,
    events: &PaymentEvents,
    payment_id: i64,
    update: PaymentUpdate,
) -> Result<vendor_payment::Model> {
    if let Some(amount) = update.amount {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
    }

    let payment = VendorPayment::find_by_id(payment_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Payment",
            id: payment_id,
        })?;

    let previous_status = payment.status;
    let mut active: vendor_payment::ActiveModel = payment.into();

    if let Some(amount) = update.amount {
        active.amount = Set(amount);
    }
    if let Some(payment_date) = update.payment_date {
        active.payment_date = Set(payment_date);
    }
    if let Some(status) = update.status {
        active.status = Set(status);
    }
    if update.description.is_some() {
        active.description = Set(update.description);
    }
    if update.payment_method.is_some() {
        active.payment_method = Set(update.payment_method);
    }
    if update.due_date.is_some() {
        active.due_date = Set(update.due_date);
    }
    if update.reference_number.is_some() {
        active.reference_number = Set(update.reference_number);
    }
    if update.bill_reference.is_some() {
        active.bill_reference = Set(update.bill_reference);
    }
    if update.notes.is_some() {
        active.notes = Set(update.notes);
    }

    let saved = active.update(db).await?;

    if previous_status != PaymentStatus::Paid && saved.status == PaymentStatus::Paid {
        events.notify_paid();
    }

    Ok(saved)
}

/// Deletes a payment record.
pub async fn delete_payment(db: &DatabaseConnection, payment_id: i64) -> Result<()> {
    let payment = VendorPayment::find_by_id(payment_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Payment",
            id: payment_id,
        })?;

    payment.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    fn request_for(vendor_id: i64, amount: f64) -> PaymentRequest {
        PaymentRequest {
            vendor_id,
            amount,
            payment_date: Utc::now(),
            status: PaymentStatus::Pending,
            description: Some("Yarn delivery".to_string()),
            payment_method: Some("Bank Transfer".to_string()),
            due_date: None,
            reference_number: None,
            bill_reference: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_payment_assigns_document_number() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();

        let payment = create_payment(&db, &events, request_for(vendor.id, 5000.0)).await?;

        assert!(payment.payment_number.starts_with("VP-"));
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(events.generation(), 0, "pending creation is silent");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_unknown_vendor() -> Result<()> {
        let db = setup_test_db().await?;
        let events = PaymentEvents::new();

        let result = create_payment(&db, &events, request_for(999, 100.0)).await;
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "Vendor",
                id: 999
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_rejects_bad_amounts() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();

        for amount in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let result = create_payment(&db, &events, request_for(vendor.id, amount)).await;
            assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_already_paid_payment_notifies() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();

        let mut request = request_for(vendor.id, 750.0);
        request.status = PaymentStatus::Paid;
        create_payment(&db, &events, request).await?;

        assert_eq!(events.generation(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_payments_status_filter() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();

        create_payment(&db, &events, request_for(vendor.id, 100.0)).await?;
        let mut paid = request_for(vendor.id, 200.0);
        paid.status = PaymentStatus::Paid;
        let paid = create_payment(&db, &events, paid).await?;

        let all = list_payments(&db, None).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, paid.id, "newest first");

        let only_paid = list_payments(&db, Some(PaymentStatus::Paid)).await?;
        assert_eq!(only_paid.len(), 1);
        assert_eq!(only_paid[0].id, paid.id);

        let overdue = list_payments(&db, Some(PaymentStatus::Overdue)).await?;
        assert!(overdue.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_save_payment_notifies_once_on_paid_transition() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();
        let payment = create_payment(&db, &events, request_for(vendor.id, 300.0)).await?;

        let update = PaymentUpdate {
            status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        let saved = save_payment(&db, &events, payment.id, update.clone()).await?;
        assert_eq!(saved.status, PaymentStatus::Paid);
        assert_eq!(events.generation(), 1);

        // Re-saving an already paid payment stays silent
        save_payment(&db, &events, payment.id, update).await?;
        assert_eq!(events.generation(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_payment_other_transitions_are_silent() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();
        let payment = create_payment(&db, &events, request_for(vendor.id, 300.0)).await?;

        // Pending -> Overdue
        save_payment(
            &db,
            &events,
            payment.id,
            PaymentUpdate {
                status: Some(PaymentStatus::Overdue),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(events.generation(), 0);

        // Overdue -> Paid fires
        save_payment(
            &db,
            &events,
            payment.id,
            PaymentUpdate {
                status: Some(PaymentStatus::Paid),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(events.generation(), 1);

        // Correcting Paid back to Pending is silent
        save_payment(
            &db,
            &events,
            payment.id,
            PaymentUpdate {
                status: Some(PaymentStatus::Pending),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(events.generation(), 1);

        // And flipping back to Paid fires again; it is a fresh transition
        save_payment(
            &db,
            &events,
            payment.id,
            PaymentUpdate {
                status: Some(PaymentStatus::Paid),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(events.generation(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_payment_partial_fields() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let events = PaymentEvents::new();
        let payment = create_payment(&db, &events, request_for(vendor.id, 300.0)).await?;

        let saved = save_payment(
            &db,
            &events,
            payment.id,
            PaymentUpdate {
                amount: Some(450.0),
                reference_number: Some("CHQ-0042".to_string()),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(saved.amount, 450.0);
        assert_eq!(saved.reference_number.as_deref(), Some("CHQ-0042"));
        assert_eq!(saved.status, PaymentStatus::Pending, "status untouched");
        assert_eq!(saved.description, payment.description);

        Ok(())
    }

    #[tokio::test]
    async fn test_payments_for_vendor_scoped() -> Result<()> {
        let db = setup_test_db().await?;
        let events = PaymentEvents::new();

        let a = create_test_vendor(&db, "Vendor A").await?;
        let b = create_test_vendor(&db, "Vendor B").await?;
        create_payment(&db, &events, request_for(a.id, 100.0)).await?;
        create_payment(&db, &events, request_for(a.id, 200.0)).await?;
        create_payment(&db, &events, request_for(b.id, 300.0)).await?;

        let for_a = payments_for_vendor(&db, a.id).await?;
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|p| p.vendor_id == a.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_payment() -> Result<()> {
        let (db, vendor) = setup_with_vendor().await?;
        let payment = create_test_payment(&db, vendor.id, 900.0).await?;

        delete_payment(&db, payment.id).await?;
        assert!(get_payment(&db, payment.id).await?.is_none());

        let result = delete_payment(&db, payment.id).await;
        assert!(matches!(result, Err(Error::NotFound { .. })));

        Ok(())
    }
}
