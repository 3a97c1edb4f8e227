//! Invoice endpoints.

use super::AppState;
use crate::{
    core::invoice::{self, InvoiceRequest},
    entities::{InvoiceModel, InvoiceStatus},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

fn default_tax_rate() -> f64 {
    18.0
}

#[derive(Debug, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub order_id: i64,
    /// GST default when the form leaves the field blank
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    pub payment_method: Option<String>,
    /// Optional initial status; invoices start Pending when omitted
    pub payment_status: Option<InvoiceStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: InvoiceStatus,
}

pub async fn generate_invoice(
    State(state): State<AppState>,
    Json(request): Json<GenerateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceModel>)> {
    let generated = invoice::generate_invoice(
        &state.db,
        InvoiceRequest {
            order_id: request.order_id,
            tax_rate: request.tax_rate,
            payment_method: request.payment_method,
            payment_status: request.payment_status,
            due_date: request.due_date,
            notes: request.notes,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(generated)))
}

pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<InvoiceModel>>> {
    invoice::list_invoices(&state.db).await.map(Json)
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
) -> Result<Json<InvoiceModel>> {
    invoice::get_invoice(&state.db, invoice_id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound {
            entity: "Invoice",
            id: invoice_id,
        })
}

pub async fn for_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Option<InvoiceModel>>> {
    invoice::invoice_for_order(&state.db, order_id)
        .await
        .map(Json)
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<InvoiceModel>> {
    invoice::set_invoice_status(&state.db, invoice_id, request.status)
        .await
        .map(Json)
}
