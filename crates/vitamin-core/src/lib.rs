// ABOUTME: Core types and constants for the Vitamin Scanner supplement checker
// ABOUTME: Foundation crate with error handling, nutrient vocabulary, and verdict models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitamin Core
//!
//! Foundation crate providing shared types and constants for the Vitamin
//! Scanner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Comparison policy thresholds, unit factors, and defaults
//! - **models**: Nutrient vocabulary, amounts, demographics, products, and verdicts

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrients, demographics, products, verdicts)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
