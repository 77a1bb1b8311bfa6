// ABOUTME: Per-nutrient comparison of product amounts against recommendation targets
// ABOUTME: Classifies each canonical nutrient as adequate, deficient, excessive, or indeterminate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::recommendation_table::{NutrientTarget, RecommendationSet};
use crate::units::{parse_amount, to_micrograms};
use tracing::debug;
use vitamin_core::constants::phrases;
use vitamin_core::constants::policy::{DEFICIENT_RATIO, EXCESSIVE_RATIO};
use vitamin_core::models::{NutrientVerdict, ProductNutrientProfile, VerdictStatus};

/// Amount recorded for nutrients the product does not list
const ABSENT_AMOUNT: &str = "0";

/// Compare every target in `set` against the product's listed amounts
///
/// Verdicts come back in canonical nutrient order, one per target. Product
/// entries with no matching target are ignored.
#[must_use]
pub fn compare(profile: &ProductNutrientProfile, set: &RecommendationSet) -> Vec<NutrientVerdict> {
    set.targets()
        .map(|target| compare_nutrient(profile.get(target.nutrient), target))
        .collect()
}

/// Compare one product amount (absent means `"0"`) against its target
#[must_use]
pub fn compare_nutrient(product_amount: Option<&str>, target: &NutrientTarget) -> NutrientVerdict {
    let raw = product_amount.unwrap_or(ABSENT_AMOUNT);
    let nutrient = target.nutrient;

    let product = to_micrograms(&parse_amount(raw), nutrient);
    let recommended = to_micrograms(&parse_amount(&target.amount), nutrient);
    // An upper limit that cannot be normalized is treated as absent
    let upper_limit = target
        .upper_limit
        .as_deref()
        .and_then(|limit| to_micrograms(&parse_amount(limit), nutrient).ok())
        .filter(|limit| *limit > 0.0);

    let (status, status_text) = match (product, recommended) {
        (Ok(product), Ok(recommended)) => classify(product, recommended, upper_limit),
        (Ok(product), Err(_)) if product <= 0.0 => {
            (VerdictStatus::Deficient, phrases::NOT_PROVIDED)
        }
        (product, recommended) => {
            debug!(
                nutrient = %nutrient,
                product = raw,
                recommended = %target.amount,
                product_error = ?product.err(),
                target_error = ?recommended.err(),
                "Units not comparable"
            );
            (VerdictStatus::Indeterminate, phrases::UNITS_NOT_COMPARABLE)
        }
    };

    NutrientVerdict {
        nutrient,
        product_amount: raw.to_owned(),
        recommended_amount: target.amount.clone(),
        upper_limit: target.upper_limit.clone(),
        status,
        status_text: status_text.to_owned(),
    }
}

/// Classify normalized amounts (all in micrograms)
///
/// Rules apply in order, first match wins:
/// 1. nothing provided is deficient
/// 2. above the upper limit is excessive
/// 3. under 80% of the target is deficient
/// 4. over twice the target is excessive
/// 5. anything else is adequate
#[must_use]
pub fn classify(product: f64, recommended: f64, upper_limit: Option<f64>) -> (VerdictStatus, &'static str) {
    if product <= 0.0 {
        return (VerdictStatus::Deficient, phrases::NOT_PROVIDED);
    }
    if upper_limit.is_some_and(|limit| product > limit) {
        return (VerdictStatus::Excessive, phrases::ABOVE_SAFE_LIMIT);
    }
    if product < recommended * DEFICIENT_RATIO {
        return (VerdictStatus::Deficient, phrases::BELOW_RECOMMENDED);
    }
    if product > recommended * EXCESSIVE_RATIO {
        return (VerdictStatus::Excessive, phrases::MUCH_HIGHER);
    }
    (VerdictStatus::Adequate, phrases::MEETS_NEEDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation_table::resolve_str;
    use vitamin_core::models::Nutrient;

    fn target(nutrient: Nutrient, amount: &str, upper_limit: Option<&str>) -> NutrientTarget {
        NutrientTarget {
            nutrient,
            amount: amount.to_owned(),
            upper_limit: upper_limit.map(str::to_owned),
        }
    }

    #[test]
    fn test_classify_rule_order() {
        assert_eq!(classify(0.0, 100.0, Some(50.0)).0, VerdictStatus::Deficient);
        assert_eq!(classify(300.0, 100.0, Some(250.0)).1, phrases::ABOVE_SAFE_LIMIT);
        assert_eq!(classify(79.0, 100.0, None).1, phrases::BELOW_RECOMMENDED);
        assert_eq!(classify(201.0, 100.0, None).1, phrases::MUCH_HIGHER);
        assert_eq!(classify(100.0, 100.0, None).1, phrases::MEETS_NEEDS);
    }

    #[test]
    fn test_classify_boundaries_are_adequate() {
        assert_eq!(classify(80.0, 100.0, None).0, VerdictStatus::Adequate);
        assert_eq!(classify(200.0, 100.0, None).0, VerdictStatus::Adequate);
        assert_eq!(classify(250.0, 100.0, Some(250.0)).0, VerdictStatus::Excessive);
        assert_eq!(classify(150.0, 100.0, Some(150.0)).0, VerdictStatus::Adequate);
    }

    #[test]
    fn test_upper_limit_checked_before_deficiency() {
        // Degenerate target whose limit sits below the deficiency threshold
        assert_eq!(classify(60.0, 100.0, Some(50.0)).1, phrases::ABOVE_SAFE_LIMIT);
    }

    #[test]
    fn test_absent_amount_is_not_provided() {
        let verdict = compare_nutrient(None, &target(Nutrient::Biotin, "30 mcg", None));
        assert_eq!(verdict.product_amount, "0");
        assert_eq!(verdict.status, VerdictStatus::Deficient);
        assert_eq!(verdict.status_text, "Not provided");
    }

    #[test]
    fn test_mixed_units_compare_after_normalization() {
        // 1 mg against 700 mcg: 1000 mcg is adequate
        let verdict = compare_nutrient(Some("1 mg"), &target(Nutrient::VitaminA, "700 mcg", Some("3000 mcg")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);

        // 1000 IU vitamin D against 600 IU
        let verdict = compare_nutrient(Some("1000 IU"), &target(Nutrient::VitaminD, "600 IU", Some("4000 IU")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);

        // 25 mcg vitamin D against 600 IU (15 mcg)
        let verdict = compare_nutrient(Some("25 mcg"), &target(Nutrient::VitaminD, "600 IU", Some("4000 IU")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);
    }

    #[test]
    fn test_irreconcilable_units_are_indeterminate() {
        let verdict = compare_nutrient(Some("100 IU"), &target(Nutrient::Niacin, "14 mg", Some("35 mg")));
        assert_eq!(verdict.status, VerdictStatus::Indeterminate);
        assert_eq!(verdict.status_text, "Units not comparable");

        let verdict = compare_nutrient(Some("50"), &target(Nutrient::Biotin, "30 mcg", None));
        assert_eq!(verdict.status, VerdictStatus::Indeterminate);
    }

    #[test]
    fn test_dotted_and_fused_label_units_compare() {
        let verdict = compare_nutrient(Some("1000 I.U."), &target(Nutrient::VitaminD, "600 IU", Some("4000 IU")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);

        let verdict = compare_nutrient(Some("400mcgDFE"), &target(Nutrient::Folate, "400 mcg", Some("1000 mcg")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);
    }

    #[test]
    fn test_zero_in_any_unit_is_not_provided() {
        let verdict = compare_nutrient(Some("0 IU"), &target(Nutrient::Niacin, "14 mg", Some("35 mg")));
        assert_eq!(verdict.status_text, "Not provided");
    }

    #[test]
    fn test_unparseable_upper_limit_is_ignored() {
        let verdict = compare_nutrient(Some("150 mg"), &target(Nutrient::VitaminC, "75 mg", Some("n/a")));
        assert_eq!(verdict.status, VerdictStatus::Adequate);
    }

    #[test]
    fn test_verdict_carries_raw_strings() {
        let verdict = compare_nutrient(Some("3000 mg"), &target(Nutrient::VitaminC, "75 mg", Some("2000 mg")));
        assert_eq!(verdict.product_amount, "3000 mg");
        assert_eq!(verdict.recommended_amount, "75 mg");
        assert_eq!(verdict.upper_limit.as_deref(), Some("2000 mg"));
        assert_eq!(verdict.status_text, "Above safe limit");
    }

    #[test]
    fn test_compare_covers_every_target_and_ignores_extras() {
        let set = resolve_str("female_19-30");
        let profile = ProductNutrientProfile::new().with(Nutrient::VitaminC, "75 mg");
        let verdicts = compare(&profile, set);
        assert_eq!(verdicts.len(), set.len());
        assert_eq!(verdicts[0].nutrient, Nutrient::VitaminA);
        assert_eq!(verdicts[1].status, VerdictStatus::Adequate);
        assert!(verdicts[2..].iter().all(|v| v.status_text == "Not provided"));
    }
}
