//! Authentication and account endpoints.
//!
//! Admin logins mint a persisted session token the admin routes verify on
//! every call. Customer logins return a one-shot token the storefront keeps
//! client-side only; nothing server-side ever checks it.

use super::AppState;
use crate::{
    core::{account, enquiry},
    entities::CustomerModel,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomerRegistration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub phone: String,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn admin_register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<Value>)> {
    let admin = account::register_admin(&state.db, &credentials.email, &credentials.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Admin registered", "email": admin.email })),
    ))
}

pub async fn admin_login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>> {
    let session = account::login_admin(
        &state.db,
        &credentials.email,
        &credentials.password,
        state.config.session_ttl_minutes,
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token: session.token,
        token_type: "bearer",
    }))
}

pub async fn customer_register(
    State(state): State<AppState>,
    Json(registration): Json<CustomerRegistration>,
) -> Result<(StatusCode, Json<CustomerModel>)> {
    let customer = account::register_customer(
        &state.db,
        &registration.name,
        &registration.phone,
        &registration.email,
        &registration.password,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn customer_login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>> {
    account::login_customer(&state.db, &credentials.email, &credentials.password).await?;

    // One-shot token, never persisted or verified server-side
    Ok(Json(TokenResponse {
        access_token: uuid::Uuid::new_v4().to_string(),
        token_type: "bearer",
    }))
}

pub async fn submit_enquiry(
    State(state): State<AppState>,
    Json(request): Json<EnquiryRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let enquiry = enquiry::submit_enquiry(
        &state.db,
        state.mailer.as_ref(),
        &state.config.admin_email,
        enquiry::EnquiryForm {
            name: request.name,
            phone: request.phone,
            company: request.company,
            email: request.email,
            message: request.message,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Enquiry submitted", "id": enquiry.id })),
    ))
}
