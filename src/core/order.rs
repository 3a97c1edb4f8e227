//! Order business logic - creation, listing, cancellation requests, and
//! deletion.
//!
//! Creating an order also writes its sale record inside the same database
//! transaction, so revenue analytics never drift from the order book.
//! Customers cannot delete orders; they can only flag them with a
//! cancellation request, and an admin approves the request by deleting the
//! order.

use crate::{
    core::cart::OrderDraft,
    entities::{Order, OrderColumn, OrderStatus, Sale, SaleColumn, order, sale},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Creates an order from a checkout draft and records its sale, atomically.
///
/// The sale mirrors the order amount and is tagged with a
/// `TXN-{order_id}-{unix_ts}` reference plus the weekday name the dashboard
/// groups on.
pub async fn create_order(db: &DatabaseConnection, draft: OrderDraft) -> Result<order::Model> {
    if !draft.amount.is_finite() || draft.amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: draft.amount,
        });
    }

    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let order_model = order::ActiveModel {
        customer_name: Set(Some(draft.customer_name)),
        customer_email: Set(Some(draft.customer_email)),
        customer_phone: Set(Some(draft.customer_phone)),
        customer_address: Set(Some(draft.customer_address)),
        readymade_product_id: Set(draft.readymade_product_id),
        product_name: Set(Some(draft.product_name)),
        quantity: Set(Some(draft.quantity)),
        quality: Set(Some(draft.quality)),
        amount: Set(Some(draft.amount)),
        status: Set(OrderStatus::Active),
        cancellation_requested: Set(false),
        created_at: Set(now),
        ..Default::default()
    };

    let order = order_model.insert(&txn).await?;

    let sale_model = sale::ActiveModel {
        date: Set(now),
        amount: Set(order.amount.unwrap_or(0.0)),
        day: Set(Some(now.format("%A").to_string())),
        transaction_id: Set(format!("TXN-{}-{}", order.id, now.timestamp())),
        order_id: Set(Some(order.id)),
        ..Default::default()
    };
    sale_model.insert(&txn).await?;

    txn.commit().await?;

    Ok(order)
}

/// Retrieves all orders for the admin dashboard.
///
/// Orders with a pending cancellation request sort to the top so they get
/// acted on; within each group, newest first.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(OrderColumn::CancellationRequested)
        .order_by_desc(OrderColumn::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single order by id, or None when it does not exist.
pub async fn get_order(db: &DatabaseConnection, order_id: i64) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Flags an order for cancellation on the customer's behalf.
///
/// The customer must present the exact email the order was placed with. An
/// unknown order id and a wrong email are distinct failures so the storefront
/// can tell the customer which one happened. The flag is idempotent; the
/// order itself is only removed when an admin approves by deleting it.
pub async fn request_cancellation(
    db: &DatabaseConnection,
    order_id: i64,
    email: &str,
) -> Result<order::Model> {
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if order.customer_email.as_deref() != Some(email) {
        return Err(Error::EmailMismatch { order_id });
    }

    let mut active: order::ActiveModel = order.into();
    active.cancellation_requested = Set(true);
    active.update(db).await.map_err(Into::into)
}

/// Marks an order as completed.
pub async fn complete_order(db: &DatabaseConnection, order_id: i64) -> Result<order::Model> {
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    let mut active: order::ActiveModel = order.into();
    active.status = Set(OrderStatus::Completed);
    active.update(db).await.map_err(Into::into)
}

/// Deletes an order together with its sale records, atomically.
///
/// Returns the deleted model so callers can report what was removed. This is
/// also how an admin approves a cancellation request.
pub async fn delete_order(db: &DatabaseConnection, order_id: i64) -> Result<order::Model> {
    let txn = db.begin().await?;

    let order = Order::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    Sale::delete_many()
        .filter(SaleColumn::OrderId.eq(order_id))
        .exec(&txn)
        .await?;

    order.clone().delete(&txn).await?;

    txn.commit().await?;

    Ok(order)
}

/// Deletes a batch of orders one at a time, skipping ids that no longer
/// exist. Returns how many were actually removed. Each order deletes
/// atomically on its own; the batch deliberately does not roll back as a
/// whole, so a failure partway leaves the earlier deletions in place.
pub async fn delete_orders(db: &DatabaseConnection, order_ids: &[i64]) -> Result<u64> {
    let mut deleted = 0;
    for &order_id in order_ids {
        match delete_order(db, order_id).await {
            Ok(_) => deleted += 1,
            Err(Error::OrderNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(deleted)
}
