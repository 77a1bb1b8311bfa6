// ABOUTME: Output format abstraction for scan reports, recommendation targets, and profiles
// ABOUTME: Supports human-readable text (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: aligned table for terminals (default)
//! - **JSON**: pretty-printed `serde_json` output for scripting

use crate::services::scan::ScanReport;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use vitamin_core::errors::{AppError, AppResult};
use vitamin_core::models::{ReproductiveStatus, UserProfile};
use vitamin_intelligence::RecommendationSet;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(FormatError {
                message: format!("unknown output format '{other}' (expected text or json)"),
            }),
        }
    }
}

/// Error type for format selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Format error: {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
}

fn to_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data).map_err(AppError::from)
}

/// Render a scan report
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_report(report: &ScanReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(report_text(report)),
    }
}

/// Render the targets for one demographic
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_targets(set: &RecommendationSet, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(set),
        OutputFormat::Text => Ok(targets_text(set)),
    }
}

/// Render a saved profile
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_profile(profile: &UserProfile, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(profile),
        OutputFormat::Text => Ok(profile_text(profile)),
    }
}

fn report_text(report: &ScanReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.product_name);
    if let Some(barcode) = &report.barcode {
        let _ = writeln!(out, "Barcode: {barcode}");
    }
    let _ = writeln!(out, "Profile: {}", report.demographic_key);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<18} {:<14} {:<24} {:<14} STATUS",
        "NUTRIENT", "PRODUCT", "RECOMMENDED", "UPPER LIMIT"
    );
    for verdict in &report.verdicts {
        let _ = writeln!(
            out,
            "{:<18} {:<14} {:<24} {:<14} {} ({})",
            verdict.nutrient.display_name(),
            verdict.product_amount,
            verdict.recommended_amount,
            verdict.upper_limit.as_deref().unwrap_or("-"),
            verdict.status_text,
            verdict.status,
        );
    }
    let _ = writeln!(out);
    let _ = write!(out, "Overall: {} - {}", report.overall, report.message);
    out
}

fn targets_text(set: &RecommendationSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Daily targets for {}", set.key());
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<18} {:<14} UPPER LIMIT", "NUTRIENT", "AMOUNT");
    for target in set.targets() {
        let _ = writeln!(
            out,
            "{:<18} {:<14} {}",
            target.nutrient.display_name(),
            target.amount,
            target.upper_limit.as_deref().unwrap_or("-"),
        );
    }
    out.trim_end().to_owned()
}

fn profile_text(profile: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Age: {}", profile.age_years);
    let _ = writeln!(out, "Sex: {}", profile.sex.as_str());
    let status = match profile.reproductive_status {
        ReproductiveStatus::None => "none",
        ReproductiveStatus::Pregnant => "pregnant",
        ReproductiveStatus::Lactating => "lactating",
    };
    let _ = writeln!(out, "Status: {status}");
    if let Some(updated_at) = profile.updated_at {
        let _ = writeln!(out, "Updated: {}", updated_at.format("%Y-%m-%d %H:%M UTC"));
    }
    let _ = write!(out, "Recommendation set: {}", profile.demographic_key());
    out
}
