// ABOUTME: Domain service layer orchestrating collaborators and the comparison engine
// ABOUTME: Provides the scan flow shared by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Scan flow: product lookup, label merge, evaluation
pub mod scan;

pub use scan::{ScanOutcome, ScanReport, ScanRequest, ScanService};
