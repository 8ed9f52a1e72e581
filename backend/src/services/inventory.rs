//! Inventory operations over products and locations
//!
//! Each public method is one unit of work: it parses its loosely-typed
//! input, runs inside a single transaction and either commits every change
//! or none of them.
//!
//! Mutating transactions open with their write. SQLite only upgrades a
//! deferred transaction to a writer on its first write, and an upgrade after
//! a read can fail outright under WAL instead of waiting on the busy
//! timeout. Uniqueness and location references are therefore left to the
//! schema constraints, which the store classifies into typed errors.

use serde::Deserialize;
use shared::{
    optional_name, parse_id, parse_optional_id, parse_optional_quantity, parse_quantity,
    validate_name, InventoryOverview, Location, LocationInventory, Product, ProductSummary,
    StockAdjustment, MAX_QUANTITY,
};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::store::{self, Entity, NewProduct, ProductChanges, StoreError};

/// Inventory service for managing products, locations and stock levels
#[derive(Clone)]
pub struct InventoryService {
    db: SqlitePool,
}

/// Input for adding a product
///
/// The stock form posts `prod_name`, `prod_quantity` and `loc_id`.
#[derive(Debug, Default, Deserialize)]
pub struct AddProductInput {
    #[serde(alias = "prod_name")]
    pub name: Option<String>,
    #[serde(alias = "prod_quantity")]
    pub quantity: Option<String>,
    #[serde(alias = "loc_id")]
    pub location_id: Option<String>,
}

/// Input for editing a product; blank fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct EditProductInput {
    #[serde(alias = "prod_id")]
    pub id: Option<String>,
    #[serde(alias = "prod_name")]
    pub name: Option<String>,
    #[serde(alias = "prod_quantity")]
    pub quantity: Option<String>,
    #[serde(alias = "loc_id")]
    pub location_id: Option<String>,
}

/// Input for adding a location
#[derive(Debug, Default, Deserialize)]
pub struct AddLocationInput {
    #[serde(alias = "location_name")]
    pub name: Option<String>,
}

/// Input for renaming a location
#[derive(Debug, Default, Deserialize)]
pub struct EditLocationInput {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Add a product, optionally assigning it to an existing location
    pub async fn add_product(&self, input: AddProductInput) -> AppResult<Product> {
        let name = validate_name(input.name.as_deref())
            .map_err(|msg| AppError::validation("name", msg))?;
        let quantity = input
            .quantity
            .as_deref()
            .ok_or("Quantity is required")
            .and_then(parse_quantity)
            .map_err(|msg| AppError::validation("quantity", msg))?;
        let location_id = parse_optional_id(input.location_id.as_deref())
            .map_err(|msg| AppError::validation("location_id", msg))?;

        let mut tx = self.db.begin().await?;
        let product = store::create_product(
            &mut tx,
            &NewProduct {
                name,
                quantity,
                location_id,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = product.id,
            quantity = product.quantity,
            location_id = ?product.location_id,
            "Product created"
        );
        Ok(product)
    }

    /// Add a storage location
    pub async fn add_location(&self, input: AddLocationInput) -> AppResult<Location> {
        let name = validate_name(input.name.as_deref())
            .map_err(|msg| AppError::validation("name", msg))?;

        let mut tx = self.db.begin().await?;
        let location = store::create_location(&mut tx, name).await?;
        tx.commit().await?;

        tracing::info!(location_id = location.id, "Location created");
        Ok(location)
    }

    /// Delete a product; deleting an unknown product succeeds without effect
    pub async fn delete_product(&self, product_id: i64) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        match store::delete_product(&mut tx, product_id).await {
            Ok(()) => {
                tx.commit().await?;
                tracing::info!(product_id, "Product deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(product_id, "Delete of unknown product ignored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a location that no product references
    pub async fn delete_location(&self, location_id: i64) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        match store::delete_location(&mut tx, location_id).await {
            Ok(()) => {
                tx.commit().await?;
                tracing::info!(location_id, "Location deleted");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(location_id, "Delete of unknown location ignored");
                Ok(())
            }
            Err(e) => {
                if matches!(e, StoreError::InUse(_)) {
                    tracing::warn!(location_id, "Refusing to delete location in use");
                }
                Err(e.into())
            }
        }
    }

    /// Move a product's stock up or down by one unit
    pub async fn adjust_quantity(
        &self,
        product_id: i64,
        adjustment: StockAdjustment,
    ) -> AppResult<Product> {
        let mut tx = self.db.begin().await?;

        let updated = store::apply_quantity_delta(&mut tx, product_id, adjustment.delta()).await?;
        if updated.is_none() {
            // Nothing changed: tell a missing product apart from a refused bound
            if !store::product_exists(&mut tx, product_id).await? {
                return Err(AppError::NotFound(Entity::Product.to_string()));
            }
            return match adjustment {
                StockAdjustment::Reduce => {
                    tracing::debug!(product_id, "Stock already at zero");
                    Err(AppError::InsufficientStock(product_id))
                }
                StockAdjustment::Add => {
                    tracing::warn!(product_id, "Stock already at the quantity limit");
                    Err(AppError::Validation {
                        field: "quantity".to_string(),
                        message: format!("Quantity cannot exceed {}", MAX_QUANTITY),
                    })
                }
            };
        }

        let product = store::get_product(&mut tx, product_id).await?;
        tx.commit().await?;

        tracing::info!(
            product_id,
            adjustment = adjustment.as_str(),
            quantity = product.quantity,
            "Stock adjusted"
        );
        Ok(product)
    }

    /// Edit any subset of a product's name, quantity and location
    pub async fn edit_product(&self, input: EditProductInput) -> AppResult<Product> {
        let product_id =
            parse_id(input.id.as_deref()).map_err(|msg| AppError::validation("id", msg))?;
        let changes = ProductChanges {
            name: optional_name(input.name.as_deref()),
            quantity: parse_optional_quantity(input.quantity.as_deref())
                .map_err(|msg| AppError::validation("quantity", msg))?,
            location_id: parse_optional_id(input.location_id.as_deref())
                .map_err(|msg| AppError::validation("location_id", msg))?,
        };

        let mut tx = self.db.begin().await?;
        let product = store::update_product(&mut tx, product_id, &changes).await?;
        tx.commit().await?;

        tracing::info!(
            product_id,
            quantity = product.quantity,
            location_id = ?product.location_id,
            "Product updated"
        );
        Ok(product)
    }

    /// Rename a location
    pub async fn edit_location(&self, input: EditLocationInput) -> AppResult<Location> {
        let location_id =
            parse_id(input.id.as_deref()).map_err(|msg| AppError::validation("id", msg))?;
        let name = validate_name(input.name.as_deref())
            .map_err(|msg| AppError::validation("name", msg))?;

        let mut tx = self.db.begin().await?;
        store::rename_location(&mut tx, location_id, name).await?;
        let location = store::get_location(&mut tx, location_id).await?;

        tx.commit().await?;

        tracing::info!(location_id, "Location renamed");
        Ok(location)
    }

    /// Products stored at a location, with every location for UI population
    pub async fn list_by_location(&self, location_id: i64) -> AppResult<LocationInventory> {
        let mut conn = self.db.acquire().await?;

        let location = store::get_location(&mut conn, location_id).await?;
        let products = store::list_products_by_location(&mut conn, location_id).await?;
        let locations = store::list_locations(&mut conn).await?;

        Ok(LocationInventory {
            location,
            products,
            locations,
        })
    }

    /// Compact product records for one location, as used by dynamic UI refresh
    pub async fn products_at_location(
        &self,
        location_id: Option<&str>,
    ) -> AppResult<Vec<ProductSummary>> {
        let location_id = parse_optional_id(location_id)
            .map_err(|msg| AppError::validation("location_id", msg))?
            .ok_or_else(|| AppError::validation("location_id", "Location ID is required"))?;

        let mut conn = self.db.acquire().await?;
        let products = store::list_products_by_location(&mut conn, location_id).await?;

        Ok(products.into_iter().map(ProductSummary::from).collect())
    }

    /// Every product and every location
    pub async fn overview(&self) -> AppResult<InventoryOverview> {
        let mut conn = self.db.acquire().await?;

        let products = store::list_products(&mut conn).await?;
        let locations = store::list_locations(&mut conn).await?;

        Ok(InventoryOverview {
            products,
            locations,
        })
    }

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let mut conn = self.db.acquire().await?;
        Ok(store::list_locations(&mut conn).await?)
    }

    pub async fn get_product(&self, product_id: i64) -> AppResult<Product> {
        let mut conn = self.db.acquire().await?;
        Ok(store::get_product(&mut conn, product_id).await?)
    }

    pub async fn get_location(&self, location_id: i64) -> AppResult<Location> {
        let mut conn = self.db.acquire().await?;
        Ok(store::get_location(&mut conn, location_id).await?)
    }
}
