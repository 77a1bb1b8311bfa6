// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, profile fixtures, and scan service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitamin_scanner`

use std::sync::{Arc, Once};
use vitamin_providers::StaticProductCatalog;
use vitamin_scanner::models::{
    Nutrient, Product, ProductNutrientProfile, ReproductiveStatus, Sex, UserProfile,
};
use vitamin_scanner::profile_store::{MemoryProfileStore, ProfileStore};
use vitamin_scanner::services::ScanService;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Validated profile
pub fn profile(age: f64, sex: Sex, status: ReproductiveStatus) -> UserProfile {
    UserProfile::new(age, sex, status).unwrap()
}

/// Female, 25, not pregnant or lactating
pub fn adult_woman() -> UserProfile {
    profile(25.0, Sex::Female, ReproductiveStatus::None)
}

/// Product listing the given amounts
pub fn product(entries: &[(Nutrient, &str)]) -> Product {
    let vitamins = entries
        .iter()
        .fold(ProductNutrientProfile::new(), |vitamins, (nutrient, amount)| {
            vitamins.with(*nutrient, *amount)
        });
    Product::new("Test Supplement", vitamins)
}

/// Memory profile store already holding `profile`
pub async fn store_with(profile: &UserProfile) -> Arc<MemoryProfileStore> {
    let store = Arc::new(MemoryProfileStore::new());
    store.save(profile).await.unwrap();
    store
}

/// Scan service over the reference catalog and a saved profile
pub async fn scan_service_for(profile: &UserProfile) -> ScanService {
    init_test_logging();
    ScanService::new(Arc::new(StaticProductCatalog::new()), store_with(profile).await)
}
