// ABOUTME: Main library entry point for the Vitamin Scanner
// ABOUTME: Wires configuration, logging, profile storage, the scan service, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitamin Scanner
//!
//! Checks whether a supplement's vitamin content meets, falls short of, or
//! exceeds the recommended daily intake for a user's age, sex, and
//! pregnancy/lactation status.
//!
//! ## Architecture
//!
//! - **vitamin-core**: errors, constants, and domain models
//! - **vitamin-intelligence**: recommendation table, unit normalization,
//!   comparator, and aggregator
//! - **vitamin-providers**: product catalog, label reader, barcode decoder
//! - this crate: configuration, logging, profile store, scan service, and
//!   formatters behind the `vitamin-scanner` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitamin_scanner::profile_store::{MemoryProfileStore, ProfileStore};
//! use vitamin_scanner::services::{ScanOutcome, ScanRequest, ScanService};
//! use vitamin_scanner::models::{ReproductiveStatus, Sex, UserProfile};
//! use vitamin_scanner::errors::AppResult;
//! use vitamin_providers::StaticProductCatalog;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let profiles = Arc::new(MemoryProfileStore::new());
//!     profiles
//!         .save(&UserProfile::new(25.0, Sex::Female, ReproductiveStatus::None)?)
//!         .await?;
//!
//!     let service = ScanService::new(Arc::new(StaticProductCatalog::new()), profiles);
//!     if let ScanOutcome::Evaluated(report) =
//!         service.scan(ScanRequest::default().with_barcode("123456789")).await?
//!     {
//!         println!("{}: {}", report.product_name, report.message);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Output formatting (text and JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Profile persistence between invocations
pub mod profile_store;

/// Scan orchestration
pub mod services;

// Re-export core modules so callers need only this crate
pub use vitamin_core::{constants, errors, models};
