// ABOUTME: Canonical vitamin vocabulary shared by recommendation tables and product profiles
// ABOUTME: Fixed nutrient order plus alias normalization for label-derived names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vitamin from the canonical vocabulary
///
/// Variant order is the canonical evaluation order; `Ord` follows it, so
/// ordered maps keyed by `Nutrient` iterate canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    /// Vitamin A (retinol activity equivalents)
    #[serde(rename = "Vitamin A")]
    VitaminA,
    /// Vitamin C (ascorbic acid)
    #[serde(rename = "Vitamin C")]
    VitaminC,
    /// Vitamin D (calciferol)
    #[serde(rename = "Vitamin D")]
    VitaminD,
    /// Vitamin E (alpha-tocopherol)
    #[serde(rename = "Vitamin E")]
    VitaminE,
    /// Vitamin K (phylloquinone)
    #[serde(rename = "Vitamin K")]
    VitaminK,
    /// Thiamin (vitamin B1)
    #[serde(rename = "Thiamin")]
    Thiamin,
    /// Riboflavin (vitamin B2)
    #[serde(rename = "Riboflavin")]
    Riboflavin,
    /// Niacin (vitamin B3)
    #[serde(rename = "Niacin")]
    Niacin,
    /// Vitamin B6 (pyridoxine)
    #[serde(rename = "Vitamin B6")]
    VitaminB6,
    /// Folate (vitamin B9)
    #[serde(rename = "Folate")]
    Folate,
    /// Vitamin B12 (cobalamin)
    #[serde(rename = "Vitamin B12")]
    VitaminB12,
    /// Pantothenic acid (vitamin B5)
    #[serde(rename = "Pantothenic Acid")]
    PantothenicAcid,
    /// Biotin (vitamin B7)
    #[serde(rename = "Biotin")]
    Biotin,
    /// Choline
    #[serde(rename = "Choline")]
    Choline,
}

impl Nutrient {
    /// Every canonical nutrient, in evaluation order
    pub const ALL: [Self; 14] = [
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::Thiamin,
        Self::Riboflavin,
        Self::Niacin,
        Self::VitaminB6,
        Self::Folate,
        Self::VitaminB12,
        Self::PantothenicAcid,
        Self::Biotin,
        Self::Choline,
    ];

    /// Label name as printed on supplement facts panels
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::VitaminA => "Vitamin A",
            Self::VitaminC => "Vitamin C",
            Self::VitaminD => "Vitamin D",
            Self::VitaminE => "Vitamin E",
            Self::VitaminK => "Vitamin K",
            Self::Thiamin => "Thiamin",
            Self::Riboflavin => "Riboflavin",
            Self::Niacin => "Niacin",
            Self::VitaminB6 => "Vitamin B6",
            Self::Folate => "Folate",
            Self::VitaminB12 => "Vitamin B12",
            Self::PantothenicAcid => "Pantothenic Acid",
            Self::Biotin => "Biotin",
            Self::Choline => "Choline",
        }
    }

    /// Alternative names found on labels and in OCR output
    const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::VitaminA => &["vitamin a", "retinol", "retinyl palmitate", "beta carotene"],
            Self::VitaminC => &["vitamin c", "ascorbic acid", "ascorbate"],
            Self::VitaminD => &[
                "vitamin d",
                "vitamin d3",
                "vitamin d2",
                "cholecalciferol",
                "ergocalciferol",
            ],
            Self::VitaminE => &["vitamin e", "alpha tocopherol", "tocopherol"],
            Self::VitaminK => &["vitamin k", "vitamin k1", "vitamin k2", "phylloquinone"],
            Self::Thiamin => &["thiamin", "thiamine", "vitamin b1"],
            Self::Riboflavin => &["riboflavin", "vitamin b2"],
            Self::Niacin => &["niacin", "niacinamide", "vitamin b3", "nicotinamide"],
            Self::VitaminB6 => &["vitamin b6", "pyridoxine"],
            Self::Folate => &["folate", "folic acid", "vitamin b9", "folacin"],
            Self::VitaminB12 => &["vitamin b12", "cobalamin", "cyanocobalamin", "methylcobalamin"],
            Self::PantothenicAcid => &["pantothenic acid", "vitamin b5", "pantothenate"],
            Self::Biotin => &["biotin", "vitamin b7", "vitamin h"],
            Self::Choline => &["choline"],
        }
    }

    /// Map a label-derived name onto the canonical vocabulary
    ///
    /// Matching ignores case, surrounding whitespace, hyphens, and any
    /// parenthetical form annotation such as "(as cholecalciferol)".
    /// Returns `None` for names outside the vocabulary (minerals, fillers).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        if normalized.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|nutrient| nutrient.aliases().contains(&normalized.as_str()))
    }
}

/// Lowercase, drop parentheticals, and collapse separators to single spaces
fn normalize_label(label: &str) -> String {
    let mut depth = 0_u32;
    let mut cleaned = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            '-' | '_' | ',' | '.' if depth == 0 => cleaned.push(' '),
            _ if depth == 0 => cleaned.extend(ch.to_lowercase()),
            _ => {}
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a name is not in the canonical vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown nutrient: {0}")]
pub struct UnknownNutrient(pub String);

impl FromStr for Nutrient {
    type Err = UnknownNutrient;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownNutrient(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip_through_from_label() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_label(nutrient.display_name()), Some(nutrient));
        }
    }

    #[test]
    fn test_aliases_and_annotations_normalize() {
        assert_eq!(
            Nutrient::from_label("Vitamin D3 (as cholecalciferol)"),
            Some(Nutrient::VitaminD)
        );
        assert_eq!(Nutrient::from_label("  FOLIC ACID "), Some(Nutrient::Folate));
        assert_eq!(Nutrient::from_label("vitamin-b12"), Some(Nutrient::VitaminB12));
        assert_eq!(Nutrient::from_label("Vitamin B1"), Some(Nutrient::Thiamin));
    }

    #[test]
    fn test_minerals_are_not_canonical() {
        assert_eq!(Nutrient::from_label("Calcium"), None);
        assert_eq!(Nutrient::from_label("Iron"), None);
        assert_eq!(Nutrient::from_label(""), None);
        assert!("Zinc".parse::<Nutrient>().is_err());
    }

    #[test]
    fn test_ord_follows_canonical_order() {
        let mut shuffled = vec![Nutrient::Choline, Nutrient::VitaminA, Nutrient::Niacin];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Nutrient::VitaminA, Nutrient::Niacin, Nutrient::Choline]
        );
    }

    #[test]
    fn test_serde_uses_label_names() {
        let json = serde_json::to_string(&Nutrient::PantothenicAcid).unwrap();
        assert_eq!(json, "\"Pantothenic Acid\"");
    }
}
