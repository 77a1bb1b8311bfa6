// ABOUTME: Product check command for vitamin-scanner
// ABOUTME: Builds a scan request from flags and files, runs the scan service, and renders the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use vitamin_providers::{decode_label_response, FixedBarcodeDecoder, StaticProductCatalog};
use vitamin_scanner::errors::{AppError, AppResult};
use vitamin_scanner::formatters::{format_report, OutputFormat};
use vitamin_scanner::profile_store::ProfileStore;
use vitamin_scanner::services::{ScanOutcome, ScanRequest, ScanService};

/// Flags accepted by `check`
pub struct CheckInputs {
    pub barcode: Option<String>,
    pub barcode_image: Option<PathBuf>,
    pub search: Option<String>,
    pub label_json: Option<PathBuf>,
}

/// Run a scan and render the report
pub async fn run(
    store: Arc<dyn ProfileStore>,
    inputs: CheckInputs,
    format: OutputFormat,
) -> AppResult<String> {
    let request = build_request(&inputs).await?;

    let service = ScanService::new(Arc::new(StaticProductCatalog::new()), store)
        .with_barcode_decoder(Arc::new(FixedBarcodeDecoder::default()));

    match service.scan(request).await? {
        ScanOutcome::Evaluated(report) => format_report(&report, format),
        ScanOutcome::NotFound => {
            let lookup = inputs
                .barcode
                .or(inputs.search)
                .unwrap_or_else(|| "label".to_owned());
            Err(AppError::not_found("Product").with_resource_id(lookup))
        }
    }
}

async fn build_request(inputs: &CheckInputs) -> AppResult<ScanRequest> {
    if inputs.barcode.is_none()
        && inputs.barcode_image.is_none()
        && inputs.search.is_none()
        && inputs.label_json.is_none()
    {
        return Err(AppError::invalid_input(
            "provide --barcode, --barcode-image, --search, or --label-json",
        ));
    }

    let mut request = ScanRequest::default();
    if let Some(barcode) = &inputs.barcode {
        request = request.with_barcode(barcode.trim());
    }
    if let Some(path) = &inputs.barcode_image {
        request = request.with_barcode_image(fs::read(path).await?);
    }
    if let Some(query) = &inputs.search {
        request = request.with_query(query.as_str());
    }
    if let Some(path) = &inputs.label_json {
        let payload = fs::read_to_string(path).await?;
        request = request.with_label_vitamins(decode_label_response(&payload));
    }
    Ok(request)
}
