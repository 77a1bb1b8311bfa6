// ABOUTME: Product nutrient profiles from catalog records or label OCR extractions
// ABOUTME: Canonical-keyed raw amount strings with override merging and a zero baseline template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Raw amount text used for every nutrient in the baseline template
const BASELINE_AMOUNT: &str = "0 mcg";

/// Mapping from canonical nutrient to the raw amount text printed on a label
///
/// Absent nutrients are treated as zero by the comparator. Serializes as a
/// JSON object keyed by label name, e.g. `{"Vitamin C": "90 mg"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductNutrientProfile {
    amounts: BTreeMap<Nutrient, String>,
}

impl ProductNutrientProfile {
    /// Empty profile (every nutrient absent)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from label-name/amount pairs
    ///
    /// Names are normalized onto the canonical vocabulary; anything outside
    /// it (minerals, fillers) is skipped.
    pub fn from_labels<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut profile = Self::new();
        for (label, amount) in entries {
            let label = label.as_ref();
            match Nutrient::from_label(label) {
                Some(nutrient) => {
                    profile.amounts.insert(nutrient, amount.into());
                }
                None => debug!(label, "Skipping non-canonical label entry"),
            }
        }
        profile
    }

    /// Template listing every canonical nutrient with a zero amount
    #[must_use]
    pub fn baseline_template() -> Self {
        Self {
            amounts: Nutrient::ALL
                .into_iter()
                .map(|nutrient| (nutrient, BASELINE_AMOUNT.to_owned()))
                .collect(),
        }
    }

    /// Set the raw amount for a nutrient
    pub fn insert(&mut self, nutrient: Nutrient, amount: impl Into<String>) {
        self.amounts.insert(nutrient, amount.into());
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: impl Into<String>) -> Self {
        self.insert(nutrient, amount);
        self
    }

    /// Raw amount text for a nutrient, if listed
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<&str> {
        self.amounts.get(&nutrient).map(String::as_str)
    }

    /// Return a copy of this profile with `overrides` applied on top
    ///
    /// Entries in `overrides` take precedence for the same nutrient.
    #[must_use]
    pub fn overlaid_with(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        for (nutrient, amount) in &overrides.amounts {
            merged.amounts.insert(*nutrient, amount.clone());
        }
        merged
    }

    /// Listed nutrients in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &str)> {
        self.amounts
            .iter()
            .map(|(nutrient, amount)| (*nutrient, amount.as_str()))
    }

    /// Number of listed nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Whether no nutrient is listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// A supplement product with its label profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,
    /// Barcode or catalog key, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Vitamin amounts from the label
    pub vitamins: ProductNutrientProfile,
}

impl Product {
    /// Create a product
    #[must_use]
    pub fn new(name: impl Into<String>, vitamins: ProductNutrientProfile) -> Self {
        Self {
            name: name.into(),
            barcode: None,
            vitamins,
        }
    }

    /// Attach a barcode
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_skips_minerals() {
        let profile = ProductNutrientProfile::from_labels([
            ("Vitamin C", "90 mg"),
            ("Calcium", "200 mg"),
            ("Folic Acid", "400 mcg"),
        ]);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get(Nutrient::Folate), Some("400 mcg"));
        assert_eq!(profile.get(Nutrient::VitaminD), None);
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let base = ProductNutrientProfile::new()
            .with(Nutrient::VitaminC, "90 mg")
            .with(Nutrient::Biotin, "40 mcg");
        let ocr = ProductNutrientProfile::new().with(Nutrient::VitaminC, "250 mg");

        let merged = base.overlaid_with(&ocr);
        assert_eq!(merged.get(Nutrient::VitaminC), Some("250 mg"));
        assert_eq!(merged.get(Nutrient::Biotin), Some("40 mcg"));
    }

    #[test]
    fn test_baseline_template_lists_every_nutrient() {
        let template = ProductNutrientProfile::baseline_template();
        assert_eq!(template.len(), Nutrient::ALL.len());
        assert!(template.iter().all(|(_, amount)| amount == BASELINE_AMOUNT));
    }

    #[test]
    fn test_serializes_as_label_keyed_object() {
        let profile = ProductNutrientProfile::new().with(Nutrient::VitaminB12, "25 mcg");
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"Vitamin B12":"25 mcg"}"#);
    }
}
