//! Sales and analytics endpoints.

use super::AppState;
use crate::{
    core::sales::{self, SalesAnalytics},
    entities::SaleModel,
    errors::Result,
};
use axum::{Json, extract::State};

pub async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<SaleModel>>> {
    sales::list_sales(&state.db).await.map(Json)
}

pub async fn analytics(State(state): State<AppState>) -> Result<Json<SalesAnalytics>> {
    sales::sales_analytics(&state.db).await.map(Json)
}
