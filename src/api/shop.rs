//! Public storefront endpoints: readymade products and the fabric
//! catalogue.
//!
//! Listings are normalized for display: missing quantity and quality get
//! their defaults, a missing price renders as 0, and every product carries
//! the stock photo the storefront shows. The catalogue endpoint renames
//! fields (`title`, `desc`) because that is what the product page consumes.

use super::AppState;
use crate::{
    core::catalog,
    entities::ReadymadeProductModel,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

const PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=400";

/// A readymade product as the shop page renders it.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub quality: String,
    pub price: i32,
    pub image: &'static str,
}

impl From<ReadymadeProductModel> for ProductListing {
    fn from(model: ReadymadeProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            quality: model.quality,
            price: model.price.unwrap_or(0),
            image: PRODUCT_IMAGE,
        }
    }
}

/// A fabric as the marketing "Products" page consumes it.
#[derive(Debug, Serialize)]
pub struct CatalogueItem {
    pub id: i64,
    pub title: String,
    pub desc: String,
    pub category: Option<String>,
    pub features: Vec<String>,
    pub image: Option<String>,
    pub file: Option<String>,
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductListing>>> {
    let products = catalog::list_products(&state.db).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductListing>> {
    catalog::get_product(&state.db, product_id)
        .await?
        .map(|p| Json(p.into()))
        .ok_or(Error::NotFound {
            entity: "Product",
            id: product_id,
        })
}

pub async fn catalogue(State(state): State<AppState>) -> Result<Json<Vec<CatalogueItem>>> {
    let fabrics = catalog::catalogue(&state.db).await?;
    Ok(Json(
        fabrics
            .into_iter()
            .map(|f| CatalogueItem {
                id: f.id,
                title: f.name,
                desc: f.description,
                category: f.category,
                features: f.features,
                image: f.image,
                file: f.file,
            })
            .collect(),
    ))
}
