//! Order endpoints.

use super::{AdminSession, AppState};
use crate::{
    core::{cart::OrderDraft, order},
    email::templates,
    entities::OrderModel,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Checkout payload, already aggregated by the cart. The `user_*` aliases
/// keep the older storefront payload spelling working unchanged.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(alias = "user_name")]
    pub customer_name: String,
    #[serde(alias = "user_email")]
    pub customer_email: String,
    #[serde(alias = "user_phone")]
    pub customer_phone: String,
    #[serde(alias = "user_address")]
    pub customer_address: String,
    pub readymade_product_id: Option<i64>,
    pub product_name: String,
    pub quantity: String,
    pub quality: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct CancellationRequest {
    pub email: String,
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderModel>)> {
    for (value, label) in [
        (&request.customer_name, "name"),
        (&request.customer_email, "email"),
        (&request.customer_phone, "phone"),
        (&request.customer_address, "address"),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                message: format!("Customer {label} is required"),
            });
        }
    }

    let draft = OrderDraft {
        customer_name: request.customer_name,
        customer_email: request.customer_email,
        customer_phone: request.customer_phone,
        customer_address: request.customer_address,
        readymade_product_id: request.readymade_product_id,
        product_name: request.product_name,
        quantity: request.quantity,
        quality: request.quality,
        amount: request.amount,
    };

    let order = order::create_order(&state.db, draft).await?;

    if let Some(message) = templates::order_confirmation(&order) {
        if let Err(e) = state.mailer.send(&message) {
            tracing::warn!(order_id = order.id, error = %e, "order confirmation not sent");
        }
    }

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderModel>>> {
    order::list_orders(&state.db).await.map(Json)
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderModel>> {
    order::get_order(&state.db, order_id)
        .await?
        .map(Json)
        .ok_or(Error::OrderNotFound { id: order_id })
}

pub async fn request_cancellation(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<CancellationRequest>,
) -> Result<Json<Value>> {
    let order = order::request_cancellation(&state.db, order_id, &request.email).await?;

    if let Some(message) = templates::cancellation_acknowledgement(&order) {
        if let Err(e) = state.mailer.send(&message) {
            tracing::warn!(order_id, error = %e, "cancellation acknowledgement not sent");
        }
    }

    Ok(Json(json!({
        "message": "Cancellation request submitted",
        "order_id": order.id,
    })))
}

pub async fn delete_order(
    AdminSession(_session): AdminSession,
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Value>> {
    let deleted = order::delete_order(&state.db, order_id).await?;
    Ok(Json(json!({
        "message": "Order deleted",
        "order_id": deleted.id,
    })))
}
