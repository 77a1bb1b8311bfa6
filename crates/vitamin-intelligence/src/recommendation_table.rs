// ABOUTME: Static Dietary Reference Intake table keyed by life stage, sex, and reproductive status
// ABOUTME: Resolves demographic keys to recommendation sets with a never-fail default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Table
//!
//! Recommended Dietary Allowances (or Adequate Intakes where no RDA exists)
//! and Tolerable Upper Intake Levels for the canonical vitamins.
//!
//! # Scientific References
//!
//! - Institute of Medicine (2006). *Dietary Reference Intakes: The Essential
//!   Guide to Nutrient Requirements*. National Academies Press.
//!   <https://doi.org/10.17226/11537>
//! - Institute of Medicine (2011). *Dietary Reference Intakes for Calcium and
//!   Vitamin D*. National Academies Press. <https://doi.org/10.17226/13050>

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;
use tracing::warn;
use vitamin_core::constants::defaults::FALLBACK_DEMOGRAPHIC_KEY;
use vitamin_core::models::{DemographicKey, LifeStage, Nutrient, ReproductiveStatus, Sex};

/// One table row: `(amount, upper_limit)` per nutrient in canonical order
type Row = [(&'static str, Option<&'static str>); 14];

/// Target intake for one nutrient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientTarget {
    /// Canonical nutrient
    pub nutrient: Nutrient,
    /// Recommended daily amount (RDA or AI)
    pub amount: String,
    /// Tolerable upper intake level, when established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<String>,
}

/// Targets for every canonical nutrient for one demographic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    key: DemographicKey,
    targets: BTreeMap<Nutrient, NutrientTarget>,
}

impl RecommendationSet {
    fn from_row(key: DemographicKey, row: &Row) -> Self {
        let targets = Nutrient::ALL
            .into_iter()
            .zip(row.iter())
            .map(|(nutrient, (amount, upper_limit))| {
                let target = NutrientTarget {
                    nutrient,
                    amount: (*amount).to_owned(),
                    upper_limit: upper_limit.map(str::to_owned),
                };
                (nutrient, target)
            })
            .collect();
        Self { key, targets }
    }

    /// Demographic this set belongs to
    #[must_use]
    pub const fn key(&self) -> DemographicKey {
        self.key
    }

    /// Target for a nutrient
    #[must_use]
    pub fn target(&self, nutrient: Nutrient) -> Option<&NutrientTarget> {
        self.targets.get(&nutrient)
    }

    /// Targets in canonical nutrient order
    pub fn targets(&self) -> impl Iterator<Item = &NutrientTarget> {
        self.targets.values()
    }

    /// Number of targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the set defines no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

// Rows list, in order: Vitamin A, C, D, E, K, Thiamin, Riboflavin, Niacin,
// Vitamin B6, Folate, Vitamin B12, Pantothenic Acid, Biotin, Choline.

const INFANT_0_6_MONTHS: Row = [
    ("400 mcg", Some("600 mcg")),
    ("40 mg", None),
    ("400 IU", Some("1000 IU")),
    ("4 mg", None),
    ("2 mcg", None),
    ("0.2 mg", None),
    ("0.3 mg", None),
    ("2 mg", None),
    ("0.1 mg", None),
    ("65 mcg", None),
    ("0.4 mcg", None),
    ("1.7 mg", None),
    ("5 mcg", None),
    ("125 mg", None),
];

const INFANT_7_12_MONTHS: Row = [
    ("500 mcg", Some("600 mcg")),
    ("50 mg", None),
    ("400 IU", Some("1500 IU")),
    ("5 mg", None),
    ("2.5 mcg", None),
    ("0.3 mg", None),
    ("0.4 mg", None),
    ("4 mg", None),
    ("0.3 mg", None),
    ("80 mcg", None),
    ("0.5 mcg", None),
    ("1.8 mg", None),
    ("6 mcg", None),
    ("150 mg", None),
];

const CHILD_1_3: Row = [
    ("300 mcg", Some("600 mcg")),
    ("15 mg", Some("400 mg")),
    ("600 IU", Some("2500 IU")),
    ("6 mg", Some("200 mg")),
    ("30 mcg", None),
    ("0.5 mg", None),
    ("0.5 mg", None),
    ("6 mg", Some("10 mg")),
    ("0.5 mg", Some("30 mg")),
    ("150 mcg", Some("300 mcg")),
    ("0.9 mcg", None),
    ("2 mg", None),
    ("8 mcg", None),
    ("200 mg", Some("1000 mg")),
];

const CHILD_4_8: Row = [
    ("400 mcg", Some("900 mcg")),
    ("25 mg", Some("650 mg")),
    ("600 IU", Some("3000 IU")),
    ("7 mg", Some("300 mg")),
    ("55 mcg", None),
    ("0.6 mg", None),
    ("0.6 mg", None),
    ("8 mg", Some("15 mg")),
    ("0.6 mg", Some("40 mg")),
    ("200 mcg", Some("400 mcg")),
    ("1.2 mcg", None),
    ("3 mg", None),
    ("12 mcg", None),
    ("250 mg", Some("1000 mg")),
];

const CHILD_9_13: Row = [
    ("600 mcg", Some("1700 mcg")),
    ("45 mg", Some("1200 mg")),
    ("600 IU", Some("4000 IU")),
    ("11 mg", Some("600 mg")),
    ("60 mcg", None),
    ("0.9 mg", None),
    ("0.9 mg", None),
    ("12 mg", Some("20 mg")),
    ("1 mg", Some("60 mg")),
    ("300 mcg", Some("600 mcg")),
    ("1.8 mcg", None),
    ("4 mg", None),
    ("20 mcg", None),
    ("375 mg", Some("2000 mg")),
];

const MALE_14_18: Row = [
    ("900 mcg", Some("2800 mcg")),
    ("75 mg", Some("1800 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("800 mg")),
    ("75 mcg", None),
    ("1.2 mg", None),
    ("1.3 mg", None),
    ("16 mg", Some("30 mg")),
    ("1.3 mg", Some("80 mg")),
    ("400 mcg", Some("800 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("25 mcg", None),
    ("550 mg", Some("3000 mg")),
];

const MALE_19_50: Row = [
    ("900 mcg", Some("3000 mcg")),
    ("90 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("120 mcg", None),
    ("1.2 mg", None),
    ("1.3 mg", None),
    ("16 mg", Some("35 mg")),
    ("1.3 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("550 mg", Some("3500 mg")),
];

const MALE_51_70: Row = [
    ("900 mcg", Some("3000 mcg")),
    ("90 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("120 mcg", None),
    ("1.2 mg", None),
    ("1.3 mg", None),
    ("16 mg", Some("35 mg")),
    ("1.7 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("550 mg", Some("3500 mg")),
];

const MALE_70_PLUS: Row = [
    ("900 mcg", Some("3000 mcg")),
    ("90 mg", Some("2000 mg")),
    ("800 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("120 mcg", None),
    ("1.2 mg", None),
    ("1.3 mg", None),
    ("16 mg", Some("35 mg")),
    ("1.7 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("550 mg", Some("3500 mg")),
];

const FEMALE_14_18: Row = [
    ("700 mcg", Some("2800 mcg")),
    ("65 mg", Some("1800 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("800 mg")),
    ("75 mcg", None),
    ("1 mg", None),
    ("1 mg", None),
    ("14 mg", Some("30 mg")),
    ("1.2 mg", Some("80 mg")),
    ("400 mcg", Some("800 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("25 mcg", None),
    ("400 mg", Some("3000 mg")),
];

const FEMALE_19_50: Row = [
    ("700 mcg", Some("3000 mcg")),
    ("75 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("90 mcg", None),
    ("1.1 mg", None),
    ("1.1 mg", None),
    ("14 mg", Some("35 mg")),
    ("1.3 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("425 mg", Some("3500 mg")),
];

const FEMALE_51_70: Row = [
    ("700 mcg", Some("3000 mcg")),
    ("75 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("90 mcg", None),
    ("1.1 mg", None),
    ("1.1 mg", None),
    ("14 mg", Some("35 mg")),
    ("1.5 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("425 mg", Some("3500 mg")),
];

const FEMALE_70_PLUS: Row = [
    ("700 mcg", Some("3000 mcg")),
    ("75 mg", Some("2000 mg")),
    ("800 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("90 mcg", None),
    ("1.1 mg", None),
    ("1.1 mg", None),
    ("14 mg", Some("35 mg")),
    ("1.5 mg", Some("100 mg")),
    ("400 mcg", Some("1000 mcg")),
    ("2.4 mcg", None),
    ("5 mg", None),
    ("30 mcg", None),
    ("425 mg", Some("3500 mg")),
];

const PREGNANT_14_18: Row = [
    ("750 mcg", Some("2800 mcg")),
    ("80 mg", Some("1800 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("800 mg")),
    ("75 mcg", None),
    ("1.4 mg", None),
    ("1.4 mg", None),
    ("18 mg", Some("30 mg")),
    ("1.9 mg", Some("80 mg")),
    ("600 mcg", Some("800 mcg")),
    ("2.6 mcg", None),
    ("6 mg", None),
    ("30 mcg", None),
    ("450 mg", Some("3000 mg")),
];

const PREGNANT_19_50: Row = [
    ("770 mcg", Some("3000 mcg")),
    ("85 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("15 mg", Some("1000 mg")),
    ("90 mcg", None),
    ("1.4 mg", None),
    ("1.4 mg", None),
    ("18 mg", Some("35 mg")),
    ("1.9 mg", Some("100 mg")),
    ("600 mcg", Some("1000 mcg")),
    ("2.6 mcg", None),
    ("6 mg", None),
    ("30 mcg", None),
    ("450 mg", Some("3500 mg")),
];

const LACTATING_14_18: Row = [
    ("1200 mcg", Some("2800 mcg")),
    ("115 mg", Some("1800 mg")),
    ("600 IU", Some("4000 IU")),
    ("19 mg", Some("800 mg")),
    ("75 mcg", None),
    ("1.4 mg", None),
    ("1.6 mg", None),
    ("17 mg", Some("30 mg")),
    ("2 mg", Some("80 mg")),
    ("500 mcg", Some("800 mcg")),
    ("2.8 mcg", None),
    ("7 mg", None),
    ("35 mcg", None),
    ("550 mg", Some("3000 mg")),
];

const LACTATING_19_50: Row = [
    ("1300 mcg", Some("3000 mcg")),
    ("120 mg", Some("2000 mg")),
    ("600 IU", Some("4000 IU")),
    ("19 mg", Some("1000 mg")),
    ("90 mcg", None),
    ("1.4 mg", None),
    ("1.6 mg", None),
    ("17 mg", Some("35 mg")),
    ("2 mg", Some("100 mg")),
    ("500 mcg", Some("1000 mcg")),
    ("2.8 mcg", None),
    ("7 mg", None),
    ("35 mcg", None),
    ("550 mg", Some("3500 mg")),
];

/// Table row for a consistent key, `None` for combinations with no set
const fn row_for(key: DemographicKey) -> Option<&'static Row> {
    use LifeStage::{
        Adult, Child, InfantOlder, InfantYoung, MiddleAge, Preteen, Senior, Teen, Toddler,
        YoungAdult,
    };
    use ReproductiveStatus::{Lactating, None as Standard, Pregnant};

    let row = match (key.life_stage, key.sex, key.status) {
        (InfantYoung, _, Standard) => &INFANT_0_6_MONTHS,
        (InfantOlder, _, Standard) => &INFANT_7_12_MONTHS,
        (Toddler, _, Standard) => &CHILD_1_3,
        (Child, _, Standard) => &CHILD_4_8,
        (Preteen, _, Standard) => &CHILD_9_13,
        (Teen, Sex::Male, Standard) => &MALE_14_18,
        (YoungAdult | Adult, Sex::Male, Standard) => &MALE_19_50,
        (MiddleAge, Sex::Male, Standard) => &MALE_51_70,
        (Senior, Sex::Male, Standard) => &MALE_70_PLUS,
        (Teen, Sex::Female, Standard) => &FEMALE_14_18,
        (YoungAdult | Adult, Sex::Female, Standard) => &FEMALE_19_50,
        (MiddleAge, Sex::Female, Standard) => &FEMALE_51_70,
        (Senior, Sex::Female, Standard) => &FEMALE_70_PLUS,
        (Teen, Sex::Female, Pregnant) => &PREGNANT_14_18,
        (YoungAdult | Adult, Sex::Female, Pregnant) => &PREGNANT_19_50,
        (Teen, Sex::Female, Lactating) => &LACTATING_14_18,
        (YoungAdult | Adult, Sex::Female, Lactating) => &LACTATING_19_50,
        _ => return None,
    };
    Some(row)
}

/// Every demographic key that has its own recommendation set
#[must_use]
pub fn demographic_keys() -> Vec<DemographicKey> {
    let statuses = [
        ReproductiveStatus::None,
        ReproductiveStatus::Pregnant,
        ReproductiveStatus::Lactating,
    ];
    LifeStage::ALL
        .into_iter()
        .flat_map(move |stage| {
            [Sex::Male, Sex::Female].into_iter().flat_map(move |sex| {
                statuses
                    .into_iter()
                    .map(move |status| DemographicKey::new(stage, sex, status))
            })
        })
        .filter(DemographicKey::is_consistent)
        .collect()
}

struct RecommendationTable {
    sets: HashMap<DemographicKey, RecommendationSet>,
    fallback: RecommendationSet,
}

static TABLE: LazyLock<RecommendationTable> = LazyLock::new(|| {
    let sets = demographic_keys()
        .into_iter()
        .filter_map(|key| row_for(key).map(|row| (key, RecommendationSet::from_row(key, row))))
        .collect();
    RecommendationTable {
        sets,
        fallback: RecommendationSet::from_row(DemographicKey::fallback(), &FEMALE_19_50),
    }
});

/// Resolve a demographic key to its recommendation set
///
/// Keys without a set of their own (a pregnant male, a lactating infant)
/// resolve to the default `female_19-30` set rather than failing.
#[must_use]
pub fn resolve(key: &DemographicKey) -> &'static RecommendationSet {
    let table = &*TABLE;
    table.sets.get(key).unwrap_or_else(|| {
        warn!(
            key = %key,
            fallback = FALLBACK_DEMOGRAPHIC_KEY,
            "No recommendation set for demographic, using default"
        );
        &table.fallback
    })
}

/// Resolve a key in its canonical string form (e.g. `female_19-30`)
///
/// Unparseable keys resolve to the default set.
#[must_use]
pub fn resolve_str(key: &str) -> &'static RecommendationSet {
    match key.parse::<DemographicKey>() {
        Ok(parsed) => resolve(&parsed),
        Err(error) => {
            warn!(
                key,
                %error,
                fallback = FALLBACK_DEMOGRAPHIC_KEY,
                "Unrecognized demographic key, using default"
            );
            &TABLE.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_key_count() {
        // 10 bands x 2 sexes + 3 pregnancy bands + 3 lactation bands
        assert_eq!(demographic_keys().len(), 26);
    }

    #[test]
    fn test_every_consistent_key_has_a_row() {
        for key in demographic_keys() {
            assert!(row_for(key).is_some(), "missing row for {key}");
        }
    }

    #[test]
    fn test_female_19_30_vitamin_c() {
        let set = resolve_str("female_19-30");
        let target = set.target(Nutrient::VitaminC).unwrap();
        assert_eq!(target.amount, "75 mg");
        assert_eq!(target.upper_limit.as_deref(), Some("2000 mg"));
    }

    #[test]
    fn test_male_19_30_niacin() {
        let set = resolve(&DemographicKey::standard(LifeStage::YoungAdult, Sex::Male));
        let target = set.target(Nutrient::Niacin).unwrap();
        assert_eq!(target.amount, "16 mg");
        assert_eq!(target.upper_limit.as_deref(), Some("35 mg"));
    }

    #[test]
    fn test_inconsistent_key_falls_back() {
        let pregnant_male =
            DemographicKey::new(LifeStage::YoungAdult, Sex::Male, ReproductiveStatus::Pregnant);
        assert_eq!(resolve(&pregnant_male).key(), DemographicKey::fallback());
        assert_eq!(resolve_str("female_19-50").key(), DemographicKey::fallback());
        assert_eq!(
            resolve_str("not-a-key").key().to_string(),
            FALLBACK_DEMOGRAPHIC_KEY
        );
    }

    #[test]
    fn test_targets_iterate_in_canonical_order() {
        let set = resolve(&DemographicKey::fallback());
        let order: Vec<Nutrient> = set.targets().map(|t| t.nutrient).collect();
        assert_eq!(order, Nutrient::ALL.to_vec());
    }
}
