//! Vendor registry endpoints.

use super::AppState;
use crate::{
    core::vendor::{self, VendorDetails},
    entities::VendorModel,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, Default)]
pub struct VendorRequest {
    pub name: Option<String>,
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

impl VendorRequest {
    fn details(&self) -> VendorDetails {
        VendorDetails {
            company_name: self.company_name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            vendor_type: self.vendor_type.clone(),
            gstin: self.gstin.clone(),
            pan: self.pan.clone(),
            bank_account: self.bank_account.clone(),
            bank_name: self.bank_name.clone(),
            ifsc_code: self.ifsc_code.clone(),
            notes: self.notes.clone(),
        }
    }
}

pub async fn create_vendor(
    State(state): State<AppState>,
    Json(request): Json<VendorRequest>,
) -> Result<(StatusCode, Json<VendorModel>)> {
    let name = request.name.as_deref().ok_or_else(|| Error::Validation {
        message: "Vendor name is required".to_string(),
    })?;

    let vendor = vendor::create_vendor(&state.db, name, request.details()).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

pub async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<VendorModel>>> {
    vendor::list_vendors(&state.db).await.map(Json)
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i64>,
) -> Result<Json<VendorModel>> {
    vendor::get_vendor(&state.db, vendor_id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound {
            entity: "Vendor",
            id: vendor_id,
        })
}

pub async fn update_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i64>,
    Json(request): Json<VendorRequest>,
) -> Result<Json<VendorModel>> {
    vendor::update_vendor(
        &state.db,
        vendor_id,
        request.name.as_deref(),
        request.details(),
    )
    .await
    .map(Json)
}

pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i64>,
) -> Result<Json<Value>> {
    vendor::delete_vendor(&state.db, vendor_id).await?;
    Ok(Json(json!({ "message": "Vendor deleted" })))
}
