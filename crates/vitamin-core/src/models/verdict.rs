// ABOUTME: Per-nutrient and overall verdict types produced by the comparison engine
// ABOUTME: Ephemeral results computed fresh per evaluation and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::Nutrient;
use crate::constants::phrases;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one nutrient against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// Within the recommended band
    Adequate,
    /// Missing or below the recommended band
    Deficient,
    /// Above the upper limit or far above the target
    Excessive,
    /// Product and target units cannot be reconciled
    Indeterminate,
}

impl VerdictStatus {
    /// Short label for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adequate => "adequate",
            Self::Deficient => "deficient",
            Self::Excessive => "excessive",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing one product entry against one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientVerdict {
    /// Canonical nutrient
    pub nutrient: Nutrient,
    /// Raw product amount (`"0"` when the product does not list it)
    pub product_amount: String,
    /// Raw recommended amount
    pub recommended_amount: String,
    /// Raw upper limit, when one is established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<String>,
    /// Classification
    pub status: VerdictStatus,
    /// Human-readable status phrase
    pub status_text: String,
}

/// Summary verdict for one product/profile pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallVerdict {
    /// Good match
    Good,
    /// Something exceeds recommended levels
    Caution,
    /// Too many shortfalls
    Poor,
}

impl OverallVerdict {
    /// Message shown to the user
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Good => phrases::OVERALL_GOOD,
            Self::Caution => phrases::OVERALL_CAUTION,
            Self::Poor => phrases::OVERALL_POOR,
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Caution => "caution",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for OverallVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
