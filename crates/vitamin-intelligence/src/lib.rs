// ABOUTME: Nutrient comparison engine for the Vitamin Scanner
// ABOUTME: Recommendation tables, unit normalization, per-nutrient verdicts, and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitamin Intelligence
//!
//! Pure, synchronous evaluation of a supplement's label against dietary
//! reference intakes for a demographic.
//!
//! - [`recommendation_table`]: static DRI data keyed by demographic
//! - [`units`]: amount parsing and normalization to micrograms
//! - [`comparator`]: per-nutrient classification
//! - [`aggregator`]: overall verdict
//! - [`evaluation`]: comparator and aggregator in one call

/// Overall verdict from per-nutrient verdicts
pub mod aggregator;
/// Per-nutrient classification
pub mod comparator;
/// Combined evaluation
pub mod evaluation;
/// Dietary reference intake table
pub mod recommendation_table;
/// Amount parsing and unit normalization
pub mod units;

pub use aggregator::{aggregate, VerdictCounts};
pub use comparator::{classify, compare, compare_nutrient};
pub use evaluation::{evaluate, Evaluation};
pub use recommendation_table::{
    demographic_keys, resolve, resolve_str, NutrientTarget, RecommendationSet,
};
pub use units::{parse_amount, parse_micrograms, to_micrograms, NormalizationError};
