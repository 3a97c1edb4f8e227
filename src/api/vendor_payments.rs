//! Vendor payment endpoints.

use super::AppState;
use crate::{
    core::vendor_payment::{self, PaymentRequest, PaymentUpdate},
    entities::{PaymentStatus, VendorPaymentModel},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub vendor_id: i64,
    pub amount: f64,
    /// Defaults to now so the form can omit it for same-day payments
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub reference_number: Option<String>,
    pub bill_reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdatePaymentRequest {
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

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub status: Option<PaymentStatus>,
}

pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<VendorPaymentModel>)> {
    let payment = vendor_payment::create_payment(
        &state.db,
        &state.events,
        PaymentRequest {
            vendor_id: request.vendor_id,
            amount: request.amount,
            payment_date: request.payment_date.unwrap_or_else(Utc::now),
            status: request.status,
            description: request.description,
            payment_method: request.payment_method,
            due_date: request.due_date,
            reference_number: request.reference_number,
            bill_reference: request.bill_reference,
            notes: request.notes,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<VendorPaymentModel>>> {
    vendor_payment::list_payments(&state.db, query.status)
        .await
        .map(Json)
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> Result<Json<VendorPaymentModel>> {
    vendor_payment::get_payment(&state.db, payment_id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound {
            entity: "Payment",
            id: payment_id,
        })
}

pub async fn for_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i64>,
) -> Result<Json<Vec<VendorPaymentModel>>> {
    vendor_payment::payments_for_vendor(&state.db, vendor_id)
        .await
        .map(Json)
}

pub async fn save_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<Json<VendorPaymentModel>> {
    vendor_payment::save_payment(
        &state.db,
        &state.events,
        payment_id,
        PaymentUpdate {
            amount: request.amount,
            payment_date: request.payment_date,
            status: request.status,
            description: request.description,
            payment_method: request.payment_method,
            due_date: request.due_date,
            reference_number: request.reference_number,
            bill_reference: request.bill_reference,
            notes: request.notes,
        },
    )
    .await
    .map(Json)
}

pub async fn delete_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<i64>,
) -> Result<Json<Value>> {
    vendor_payment::delete_payment(&state.db, payment_id).await?;
    Ok(Json(json!({ "message": "Payment deleted" })))
}
