//! Admin dashboard endpoints: product and fabric management, employees,
//! billing overview, ad-hoc email, and enquiry review. All of these sit
//! behind the bearer-session middleware.

use super::AppState;
use crate::{
    config::catalogue::FabricSeed,
    core::{catalog, enquiry, order, staff},
    email::EmailMessage,
    entities::{EmployeeModel, EnquiryModel, FabricModel, ReadymadeProductModel},
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    pub price: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProductUpdateRequest {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    pub price: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct FabricRequest {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    pub image: Option<String>,
    pub file: Option<String>,
    pub category: Option<String>,
    pub features: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FabricUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub category: Option<String>,
    pub features: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub salary: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EmployeeUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub salary: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReadymadeProductModel>>> {
    catalog::list_products(&state.db).await.map(Json)
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ReadymadeProductModel>)> {
    let product = catalog::create_product(
        &state.db,
        &request.name,
        request.quantity,
        request.quality,
        request.price,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(request): Json<ProductUpdateRequest>,
) -> Result<Json<ReadymadeProductModel>> {
    catalog::update_product(
        &state.db,
        product_id,
        request.name,
        request.quantity,
        request.quality,
        request.price,
    )
    .await
    .map(Json)
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Value>> {
    catalog::delete_product(&state.db, product_id).await?;
    Ok(Json(json!({ "message": "Product deleted" })))
}

pub async fn list_fabrics(State(state): State<AppState>) -> Result<Json<Vec<FabricModel>>> {
    catalog::list_fabrics(&state.db).await.map(Json)
}

pub async fn create_fabric(
    State(state): State<AppState>,
    Json(request): Json<FabricRequest>,
) -> Result<(StatusCode, Json<FabricModel>)> {
    let fabric = catalog::create_fabric(
        &state.db,
        FabricSeed {
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
            quality: request.quality,
            image: request.image,
            file: request.file,
            category: request.category,
            features: request.features,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(fabric)))
}

pub async fn update_fabric(
    State(state): State<AppState>,
    Path(fabric_id): Path<i64>,
    Json(request): Json<FabricUpdateRequest>,
) -> Result<Json<FabricModel>> {
    catalog::update_fabric(
        &state.db,
        fabric_id,
        request.name,
        request.description,
        request.price,
        request.category,
        request.features,
    )
    .await
    .map(Json)
}

pub async fn delete_fabric(
    State(state): State<AppState>,
    Path(fabric_id): Path<i64>,
) -> Result<Json<Value>> {
    catalog::delete_fabric(&state.db, fabric_id).await?;
    Ok(Json(json!({ "message": "Fabric deleted" })))
}

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeModel>>> {
    staff::list_employees(&state.db).await.map(Json)
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeModel>)> {
    let employee = staff::create_employee(
        &state.db,
        &request.name,
        request.email,
        request.phone,
        request.position,
        request.salary,
        None,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(request): Json<EmployeeUpdateRequest>,
) -> Result<Json<EmployeeModel>> {
    staff::update_employee(
        &state.db,
        employee_id,
        request.name,
        request.email,
        request.phone,
        request.position,
        request.salary,
    )
    .await
    .map(Json)
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<Value>> {
    staff::delete_employee(&state.db, employee_id).await?;
    Ok(Json(json!({ "message": "Employee deleted" })))
}

/// Billing overview: a static subscription block plus usage stats computed
/// from the live order book.
pub async fn billing(State(state): State<AppState>) -> Result<Json<Value>> {
    let orders = order::list_orders(&state.db).await?;
    let total_orders = orders.len();
    let total_revenue: f64 = orders.iter().filter_map(|o| o.amount).sum();

    Ok(Json(json!({
        "subscription_plan": "Premium Enterprise",
        "next_billing_date": "2026-02-01",
        "amount_due": 0,
        "payment_method": "Visa ending in 4242",
        "invoices": [
            { "id": "INV-001", "date": "2026-01-01", "amount": 2999, "status": "Paid" },
            { "id": "INV-002", "date": "2025-12-01", "amount": 2999, "status": "Paid" },
        ],
        "usage_stats": {
            "total_orders_processed": total_orders,
            "total_revenue_processed": total_revenue,
        }
    })))
}

pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<Value>> {
    state.mailer.send(&EmailMessage {
        to: request.to_email,
        subject: request.subject,
        body: request.body,
    })?;

    Ok(Json(json!({ "message": "Email sent" })))
}

pub async fn list_enquiries(State(state): State<AppState>) -> Result<Json<Vec<EnquiryModel>>> {
    enquiry::list_enquiries(&state.db).await.map(Json)
}

pub async fn delete_enquiry(
    State(state): State<AppState>,
    Path(enquiry_id): Path<i64>,
) -> Result<Json<Value>> {
    enquiry::delete_enquiry(&state.db, enquiry_id).await?;
    Ok(Json(json!({ "message": "Enquiry deleted" })))
}
