// ABOUTME: One-call evaluation of a product against a recommendation set
// ABOUTME: Combines the comparator and aggregator into a single verdict bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::VerdictCounts;
use crate::comparator::compare;
use crate::recommendation_table::RecommendationSet;
use serde::Serialize;
use tracing::debug;
use vitamin_core::models::{NutrientVerdict, OverallVerdict, Product};

/// Verdicts for one product and one demographic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Per-nutrient verdicts in canonical order
    pub verdicts: Vec<NutrientVerdict>,
    /// Summary verdict
    pub overall: OverallVerdict,
    /// Status tally behind the summary
    pub counts: VerdictCounts,
}

impl Evaluation {
    /// Split into verdicts and summary
    #[must_use]
    pub fn into_parts(self) -> (Vec<NutrientVerdict>, OverallVerdict) {
        (self.verdicts, self.overall)
    }
}

/// Evaluate a product against a recommendation set
#[must_use]
pub fn evaluate(product: &Product, set: &RecommendationSet) -> Evaluation {
    let verdicts = compare(&product.vitamins, set);
    let counts = VerdictCounts::tally(&verdicts);
    let overall = counts.overall();

    debug!(
        product = %product.name,
        demographic = %set.key(),
        adequate = counts.adequate,
        deficient = counts.deficient,
        excessive = counts.excessive,
        indeterminate = counts.indeterminate,
        overall = %overall,
        "Product evaluated"
    );

    Evaluation {
        verdicts,
        overall,
        counts,
    }
}
