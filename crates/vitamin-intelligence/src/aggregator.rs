// ABOUTME: Reduces per-nutrient verdicts into a single overall verdict
// ABOUTME: Any excess dominates; otherwise too many shortfalls make a poor match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vitamin_core::constants::policy::POOR_DEFICIENCY_COUNT;
use vitamin_core::models::{NutrientVerdict, OverallVerdict, VerdictStatus};

/// Tally of verdict statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictCounts {
    /// Adequate verdicts
    pub adequate: usize,
    /// Deficient verdicts
    pub deficient: usize,
    /// Excessive verdicts
    pub excessive: usize,
    /// Indeterminate verdicts
    pub indeterminate: usize,
}

impl VerdictCounts {
    /// Count statuses across verdicts
    #[must_use]
    pub fn tally(verdicts: &[NutrientVerdict]) -> Self {
        verdicts.iter().fold(Self::default(), |mut counts, verdict| {
            match verdict.status {
                VerdictStatus::Adequate => counts.adequate += 1,
                VerdictStatus::Deficient => counts.deficient += 1,
                VerdictStatus::Excessive => counts.excessive += 1,
                VerdictStatus::Indeterminate => counts.indeterminate += 1,
            }
            counts
        })
    }

    /// Overall verdict implied by these counts
    #[must_use]
    pub const fn overall(&self) -> OverallVerdict {
        if self.excessive > 0 {
            OverallVerdict::Caution
        } else if self.deficient > POOR_DEFICIENCY_COUNT {
            OverallVerdict::Poor
        } else {
            OverallVerdict::Good
        }
    }
}

/// Summarize a verdict list
///
/// Indeterminate verdicts count as neither deficient nor excessive. An empty
/// list is a good match.
#[must_use]
pub fn aggregate(verdicts: &[NutrientVerdict]) -> OverallVerdict {
    VerdictCounts::tally(verdicts).overall()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitamin_core::models::Nutrient;

    fn verdicts(statuses: &[VerdictStatus]) -> Vec<NutrientVerdict> {
        statuses
            .iter()
            .zip(Nutrient::ALL)
            .map(|(status, nutrient)| NutrientVerdict {
                nutrient,
                product_amount: "0".to_owned(),
                recommended_amount: "1 mg".to_owned(),
                upper_limit: None,
                status: *status,
                status_text: String::new(),
            })
            .collect()
    }

    use VerdictStatus::{Adequate, Deficient, Excessive, Indeterminate};

    #[test]
    fn test_empty_is_good() {
        assert_eq!(aggregate(&[]), OverallVerdict::Good);
    }

    #[test]
    fn test_excess_dominates_deficiency() {
        let list = verdicts(&[Deficient, Deficient, Deficient, Deficient, Excessive]);
        assert_eq!(aggregate(&list), OverallVerdict::Caution);
    }

    #[test]
    fn test_deficiency_threshold() {
        assert_eq!(aggregate(&verdicts(&[Deficient, Deficient, Adequate])), OverallVerdict::Good);
        assert_eq!(
            aggregate(&verdicts(&[Deficient, Deficient, Deficient])),
            OverallVerdict::Poor
        );
    }

    #[test]
    fn test_indeterminate_counts_as_neither() {
        let list = verdicts(&[Indeterminate, Indeterminate, Indeterminate, Deficient]);
        assert_eq!(aggregate(&list), OverallVerdict::Good);
        assert_eq!(VerdictCounts::tally(&list).indeterminate, 3);
    }

    #[test]
    fn test_overall_messages() {
        assert_eq!(
            OverallVerdict::Good.message(),
            "This supplement is a good match for your needs"
        );
        assert_eq!(
            OverallVerdict::Caution.message(),
            "Caution: Some vitamins exceed recommended levels"
        );
        assert_eq!(
            OverallVerdict::Poor.message(),
            "This supplement may not meet your nutritional needs"
        );
    }
}
