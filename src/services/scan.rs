// ABOUTME: Scan flow combining product lookup, label reading, and nutrient evaluation
// ABOUTME: Barcode first, then name search; label data overrides or stands in for catalog data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::profile_store::{require_profile, ProfileStore};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use vitamin_core::constants::defaults::SCANNED_LABEL_PRODUCT_NAME;
use vitamin_core::errors::{AppError, AppResult, ErrorCode};
use vitamin_core::models::{NutrientVerdict, OverallVerdict, Product, ProductNutrientProfile};
use vitamin_intelligence::{evaluate, resolve, VerdictCounts};
use vitamin_providers::{BarcodeDecoder, LabelImage, LabelReader, ProductCatalog};

/// What the user supplied for one scan
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    /// Barcode typed or decoded by the caller
    pub barcode: Option<String>,
    /// Raw photo to decode a barcode from when no barcode is given
    pub barcode_image: Option<Vec<u8>>,
    /// Product name query
    pub query: Option<String>,
    /// Label photo for the label reader
    pub label_image: Option<LabelImage>,
    /// Label amounts already extracted (takes precedence over `label_image`)
    pub label_vitamins: Option<ProductNutrientProfile>,
}

impl ScanRequest {
    /// Look up by barcode
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Decode the barcode from a photo
    #[must_use]
    pub fn with_barcode_image(mut self, image: Vec<u8>) -> Self {
        self.barcode_image = Some(image);
        self
    }

    /// Search by product name
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Read amounts from a label photo
    #[must_use]
    pub fn with_label_image(mut self, image: LabelImage) -> Self {
        self.label_image = Some(image);
        self
    }

    /// Use already-extracted label amounts
    #[must_use]
    pub fn with_label_vitamins(mut self, vitamins: ProductNutrientProfile) -> Self {
        self.label_vitamins = Some(vitamins);
        self
    }
}

/// Evaluation of one product for the saved profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Unique report identifier
    pub report_id: Uuid,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Product name (or a placeholder for label-only scans)
    pub product_name: String,
    /// Barcode of the matched product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Recommendation set used, e.g. `female_19-30`
    pub demographic_key: String,
    /// Per-nutrient verdicts in canonical order
    pub verdicts: Vec<NutrientVerdict>,
    /// Status tally
    pub counts: VerdictCounts,
    /// Summary verdict
    pub overall: OverallVerdict,
    /// Summary message
    pub message: String,
}

/// Result of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Product (or label data) was found and evaluated
    Evaluated(Box<ScanReport>),
    /// Nothing matched and no label data was available
    NotFound,
}

/// Orchestrates the scan flow over injected collaborators
pub struct ScanService {
    catalog: Arc<dyn ProductCatalog>,
    profiles: Arc<dyn ProfileStore>,
    label_reader: Option<Arc<dyn LabelReader>>,
    barcode_decoder: Option<Arc<dyn BarcodeDecoder>>,
}

impl ScanService {
    /// Service over a catalog and profile store
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductCatalog>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            catalog,
            profiles,
            label_reader: None,
            barcode_decoder: None,
        }
    }

    /// Enable label photos
    #[must_use]
    pub fn with_label_reader(mut self, reader: Arc<dyn LabelReader>) -> Self {
        self.label_reader = Some(reader);
        self
    }

    /// Enable barcode photos
    #[must_use]
    pub fn with_barcode_decoder(mut self, decoder: Arc<dyn BarcodeDecoder>) -> Self {
        self.barcode_decoder = Some(decoder);
        self
    }

    /// Run a scan for the saved profile
    ///
    /// # Errors
    ///
    /// Fails when no profile is saved, or when a collaborator fails.
    pub async fn scan(&self, request: ScanRequest) -> AppResult<ScanOutcome> {
        let profile = require_profile(self.profiles.as_ref()).await?;
        let key = profile.demographic_key();
        let set = resolve(&key);

        let catalog_product = self.lookup(&request).await?;
        let label_vitamins = self.read_label(&request).await?;

        let Some(product) = merge(catalog_product, label_vitamins) else {
            info!("No product matched the scan");
            return Ok(ScanOutcome::NotFound);
        };

        let evaluation = evaluate(&product, set);
        info!(
            product = %product.name,
            demographic = %key,
            overall = %evaluation.overall,
            "Scan evaluated"
        );
        Ok(ScanOutcome::Evaluated(Box::new(ScanReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            product_name: product.name,
            barcode: product.barcode,
            demographic_key: set.key().to_string(),
            verdicts: evaluation.verdicts,
            counts: evaluation.counts,
            overall: evaluation.overall,
            message: evaluation.overall.message().to_owned(),
        })))
    }

    async fn lookup(&self, request: &ScanRequest) -> AppResult<Option<Product>> {
        let barcode = match (&request.barcode, &request.barcode_image, &self.barcode_decoder) {
            (Some(barcode), _, _) => Some(barcode.clone()),
            (None, Some(image), Some(decoder)) => decoder.decode(image).await,
            _ => None,
        };

        if let Some(barcode) = barcode.filter(|code| !code.trim().is_empty()) {
            let found = self
                .catalog
                .find_by_barcode(&barcode)
                .await
                .map_err(|error| collaborator_error("product catalog", error))?;
            if let Some(product) = found {
                return Ok(Some(product));
            }
            debug!(barcode = %barcode, "Barcode not in catalog");
        }

        match request.query.as_deref() {
            Some(query) => self
                .catalog
                .search_by_name(query)
                .await
                .map_err(|error| collaborator_error("product catalog", error)),
            None => Ok(None),
        }
    }

    async fn read_label(&self, request: &ScanRequest) -> AppResult<Option<ProductNutrientProfile>> {
        if let Some(vitamins) = &request.label_vitamins {
            return Ok(Some(vitamins.clone()));
        }
        match (&request.label_image, &self.label_reader) {
            (Some(image), Some(reader)) => reader
                .read_label(image)
                .await
                .map(Some)
                .map_err(|error| collaborator_error("label reader", error)),
            (Some(_), None) => {
                debug!("Label image supplied but no label reader configured");
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Report a collaborator failure as an external-service error, keeping the cause
fn collaborator_error(service: &str, error: AppError) -> AppError {
    if error.code == ErrorCode::ExternalServiceError {
        return error;
    }
    AppError::external_service(service, error.message.clone()).with_source(error)
}

/// Combine catalog and label data
///
/// Label entries override catalog entries for the same nutrient. Label-only
/// results are laid over a template listing every nutrient at zero. `None`
/// when there is neither a product nor any label entry.
#[must_use]
pub fn merge(product: Option<Product>, label: Option<ProductNutrientProfile>) -> Option<Product> {
    let label = label.filter(|vitamins| !vitamins.is_empty());
    match (product, label) {
        (Some(mut product), Some(label)) => {
            product.vitamins = product.vitamins.overlaid_with(&label);
            Some(product)
        }
        (Some(product), None) => Some(product),
        (None, Some(label)) => Some(Product::new(
            SCANNED_LABEL_PRODUCT_NAME,
            ProductNutrientProfile::baseline_template().overlaid_with(&label),
        )),
        (None, None) => None,
    }
}
