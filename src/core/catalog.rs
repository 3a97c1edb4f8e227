//! Catalogue business logic - bulk fabrics and readymade shop products.
//!
//! Fabrics feed the marketing site's product pages; readymade products feed
//! the cart-based shop. Both are seeded from config.toml on first run and
//! maintained through the admin dashboard afterwards. A table that already
//! has rows is never re-seeded.

use crate::{
    config::catalogue::CatalogueConfig,
    entities::{Fabric, ReadymadeProduct, fabric, readymade_product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Default unit description when a product is created without one.
const DEFAULT_QUANTITY: &str = "1 unit";
/// Default quality grade when a product is created without one.
const DEFAULT_QUALITY: &str = "Standard";

/// A fabric as the marketing site renders it, with the stored
/// comma-separated feature string split into a list.
#[derive(Debug, Clone, Serialize)]
pub struct FabricView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub quantity: Option<String>,
    pub quality: Option<String>,
    pub image: Option<String>,
    pub file: Option<String>,
    pub category: Option<String>,
    pub features: Vec<String>,
}

impl From<fabric::Model> for FabricView {
    fn from(model: fabric::Model) -> Self {
        let features = model
            .features
            .as_deref()
            .map(split_features)
            .unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
            quality: model.quality,
            image: model.image,
            file: model.file,
            category: model.category,
            features,
        }
    }
}

fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect()
}

/// Retrieves every readymade product in insertion order.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<readymade_product::Model>> {
    ReadymadeProduct::find()
        .order_by_asc(readymade_product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single readymade product, or None when it does not exist.
pub async fn get_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<readymade_product::Model>> {
    ReadymadeProduct::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a readymade product. Missing quantity and quality fall back to
/// `"1 unit"` and `"Standard"` so every listing renders.
pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    quantity: Option<String>,
    quality: Option<String>,
    price: Option<i32>,
) -> Result<readymade_product::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Product name is required".to_string(),
        });
    }

    let model = readymade_product::ActiveModel {
        name: Set(name.to_string()),
        quantity: Set(quantity.unwrap_or_else(|| DEFAULT_QUANTITY.to_string())),
        quality: Set(quality.unwrap_or_else(|| DEFAULT_QUALITY.to_string())),
        price: Set(price),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Partially updates a readymade product; `None` fields stay as stored.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: Option<String>,
    quantity: Option<String>,
    quality: Option<String>,
    price: Option<i32>,
) -> Result<readymade_product::Model> {
    let product = ReadymadeProduct::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    let mut active: readymade_product::ActiveModel = product.into();
    if let Some(name) = name {
        active.name = Set(name);
    }
    if let Some(quantity) = quantity {
        active.quantity = Set(quantity);
    }
    if let Some(quality) = quality {
        active.quality = Set(quality);
    }
    if price.is_some() {
        active.price = Set(price);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a readymade product.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = ReadymadeProduct::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    product.delete(db).await?;
    Ok(())
}

/// Retrieves every fabric in insertion order.
pub async fn list_fabrics(db: &DatabaseConnection) -> Result<Vec<fabric::Model>> {
    Fabric::find()
        .order_by_asc(fabric::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the fabric catalogue as the marketing site renders it.
pub async fn catalogue(db: &DatabaseConnection) -> Result<Vec<FabricView>> {
    let fabrics = list_fabrics(db).await?;
    Ok(fabrics.into_iter().map(FabricView::from).collect())
}

/// Creates a fabric catalogue entry.
pub async fn create_fabric(
    db: &DatabaseConnection,
    seed: crate::config::catalogue::FabricSeed,
) -> Result<fabric::Model> {
    if seed.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Fabric name is required".to_string(),
        });
    }

    let model = fabric::ActiveModel {
        name: Set(seed.name),
        description: Set(seed.description),
        price: Set(seed.price),
        quantity: Set(seed.quantity),
        quality: Set(seed.quality),
        image: Set(seed.image),
        file: Set(seed.file),
        category: Set(seed.category),
        features: Set(seed.features),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Partially updates a fabric; `None` fields stay as stored except the
/// required name/description/price trio which only overwrite when given.
pub async fn update_fabric(
    db: &DatabaseConnection,
    fabric_id: i64,
    name: Option<String>,
    description: Option<String>,
    price: Option<i32>,
    category: Option<String>,
    features: Option<String>,
) -> Result<fabric::Model> {
    let fabric = Fabric::find_by_id(fabric_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Fabric",
            id: fabric_id,
        })?;

    let mut active: fabric::ActiveModel = fabric.into();
    if let Some(name) = name {
        active.name = Set(name);
    }
    if let Some(description) = description {
        active.description = Set(description);
    }
    if let Some(price) = price {
        active.price = Set(price);
    }
    if category.is_some() {
        active.category = Set(category);
    }
    if features.is_some() {
        active.features = Set(features);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes a fabric catalogue entry.
pub async fn delete_fabric(db: &DatabaseConnection, fabric_id: i64) -> Result<()> {
    let fabric = Fabric::find_by_id(fabric_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Fabric",
            id: fabric_id,
        })?;

    fabric.delete(db).await?;
    Ok(())
}

/// Seeds the catalogue tables from config.toml data. Each table is seeded
/// only while empty, so admin edits survive restarts.
pub async fn seed_catalogue(db: &DatabaseConnection, config: &CatalogueConfig) -> Result<()> {
    if Fabric::find().count(db).await? == 0 {
        for seed in &config.fabrics {
            create_fabric(db, seed.clone()).await?;
        }
    }

    if ReadymadeProduct::find().count(db).await? == 0 {
        for seed in &config.readymade_products {
            create_product(
                db,
                &seed.name,
                Some(seed.quantity.clone()),
                Some(seed.quality.clone()),
                seed.price,
            )
            .await?;
        }
    }

    Ok(())
}
