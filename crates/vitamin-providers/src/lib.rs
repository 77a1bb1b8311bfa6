// ABOUTME: Collaborators that supply product data to the Vitamin Scanner
// ABOUTME: Product catalog, label reader, and barcode decoder traits with offline implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Product data collaborators.
//!
//! Each capability is an async trait so the scan flow can be driven by real
//! services or by canned inputs in tests.

/// Barcode decoding from label photos
pub mod barcode;
/// Product lookup by barcode or name
pub mod catalog;
/// Vitamin extraction from label images
pub mod label_reader;

pub use barcode::{BarcodeDecoder, FixedBarcodeDecoder};
pub use catalog::{ProductCatalog, StaticProductCatalog, ONE_A_DAY_KEY};
pub use label_reader::{decode_label_response, CannedLabelReader, LabelImage, LabelReader};
