// ABOUTME: Product catalog trait and a static in-memory catalog of reference supplements
// ABOUTME: Supports exact barcode lookup and case-insensitive substring name search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use vitamin_core::constants::defaults::DEMO_BARCODE;
use vitamin_core::errors::AppResult;
use vitamin_core::models::{Nutrient, Product, ProductNutrientProfile};

/// Source of supplement products
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Exact identifier lookup
    ///
    /// The identifier is a barcode, or the catalog key of a product sold
    /// without one.
    async fn find_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>>;

    /// First product whose name contains `query`, ignoring case
    ///
    /// Blank queries match nothing.
    async fn search_by_name(&self, query: &str) -> AppResult<Option<Product>>;
}

/// Catalog key of the reference One A Day product, which has no barcode
pub const ONE_A_DAY_KEY: &str = "one a day";

/// In-memory catalog
///
/// Products are keyed by barcode when they have one, otherwise by a catalog
/// key (the lowercased name unless one is given).
pub struct StaticProductCatalog {
    products: RwLock<HashMap<String, Product>>,
}

impl StaticProductCatalog {
    /// Empty catalog
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Catalog seeded with the reference multivitamins
    #[must_use]
    pub fn new() -> Self {
        let products = reference_products().into_iter().collect();
        Self {
            products: RwLock::new(products),
        }
    }

    /// Add or replace a product
    pub async fn insert(&self, product: Product) {
        let key = catalog_key(&product);
        self.products.write().await.insert(key, product);
    }

    /// Add or replace a product under an explicit catalog key
    pub async fn insert_keyed(&self, key: impl Into<String>, product: Product) {
        self.products.write().await.insert(key.into(), product);
    }

    /// Number of products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether the catalog is empty
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl Default for StaticProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for StaticProductCatalog {
    async fn find_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>> {
        let barcode = barcode.trim();
        let found = self.products.read().await.get(barcode).cloned();
        debug!(barcode, found = found.is_some(), "Catalog barcode lookup");
        Ok(found)
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Option<Product>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }
        let products = self.products.read().await;
        // Deterministic pick when several names match
        let mut matches: Vec<&Product> = products
            .values()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        let found = matches.first().map(|product| (*product).clone());
        debug!(query, found = found.is_some(), "Catalog name search");
        Ok(found)
    }
}

fn catalog_key(product: &Product) -> String {
    product
        .barcode
        .clone()
        .unwrap_or_else(|| product.name.to_lowercase())
}

/// Reference products (vitamin content only) with their catalog keys
fn reference_products() -> Vec<(String, Product)> {
    use Nutrient::{
        Biotin, Folate, Niacin, PantothenicAcid, Riboflavin, Thiamin, VitaminA, VitaminB12,
        VitaminB6, VitaminC, VitaminD, VitaminE, VitaminK,
    };

    let centrum = ProductNutrientProfile::new()
        .with(VitaminA, "3500 IU")
        .with(VitaminC, "90 mg")
        .with(VitaminD, "1000 IU")
        .with(VitaminE, "45 IU")
        .with(VitaminK, "25 mcg")
        .with(Thiamin, "1.5 mg")
        .with(Riboflavin, "1.7 mg")
        .with(Niacin, "20 mg")
        .with(VitaminB6, "2 mg")
        .with(Folate, "400 mcg")
        .with(VitaminB12, "25 mcg")
        .with(Biotin, "40 mcg")
        .with(PantothenicAcid, "10 mg");

    let one_a_day = ProductNutrientProfile::new()
        .with(VitaminA, "2333 IU")
        .with(VitaminC, "75 mg")
        .with(VitaminD, "1000 IU")
        .with(VitaminE, "30 IU")
        .with(VitaminK, "25 mcg")
        .with(Thiamin, "1.5 mg")
        .with(Riboflavin, "1.7 mg")
        .with(Niacin, "20 mg")
        .with(VitaminB6, "2 mg")
        .with(Folate, "400 mcg")
        .with(VitaminB12, "6 mcg")
        .with(Biotin, "40 mcg")
        .with(PantothenicAcid, "10 mg");

    vec![
        (
            DEMO_BARCODE.to_owned(),
            Product::new("Centrum Adult Multivitamin", centrum).with_barcode(DEMO_BARCODE),
        ),
        (
            ONE_A_DAY_KEY.to_owned(),
            Product::new("One A Day Women's Multivitamin", one_a_day),
        ),
    ]
}
