// ABOUTME: Configuration module for the scanner CLI
// ABOUTME: Environment-only configuration for profile location and output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! Settings come from environment variables only; there is no config file.

/// Environment-driven scanner settings
pub mod environment;

pub use environment::ScannerConfig;
