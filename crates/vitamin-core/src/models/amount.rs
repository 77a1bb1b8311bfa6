// ABOUTME: Parsed nutrient quantity types (magnitude plus closed unit set)
// ABOUTME: Produced by the amount parser and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit printed next to a vitamin amount on a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountUnit {
    /// Micrograms (mcg, µg, ug) - the normalization base
    Micrograms,
    /// Milligrams
    Milligrams,
    /// Grams
    Grams,
    /// International Units (nutrient-specific biological activity)
    InternationalUnits,
}

impl AmountUnit {
    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Micrograms => "mcg",
            Self::Milligrams => "mg",
            Self::Grams => "g",
            Self::InternationalUnits => "IU",
        }
    }
}

/// A parsed, immutable nutrient quantity
///
/// `unit` is `None` when the source text carried no recognizable unit.
/// Unparseable text parses to a zero magnitude without a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    magnitude: f64,
    unit: Option<AmountUnit>,
}

impl NutrientAmount {
    /// Create an amount; negative or non-finite magnitudes collapse to zero
    #[must_use]
    pub fn new(magnitude: f64, unit: Option<AmountUnit>) -> Self {
        let magnitude = if magnitude.is_finite() && magnitude > 0.0 {
            magnitude
        } else {
            0.0
        };
        Self { magnitude, unit }
    }

    /// The "absent nutrient" amount
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            magnitude: 0.0,
            unit: None,
        }
    }

    /// Numeric magnitude in the parsed unit
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Parsed unit, if any
    #[must_use]
    pub const fn unit(&self) -> Option<AmountUnit> {
        self.unit
    }

    /// Whether the amount is zero (absent, unparseable, or literally 0)
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude <= 0.0
    }
}

impl fmt::Display for NutrientAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.magnitude, unit.abbreviation()),
            None => write!(f, "{}", self.magnitude),
        }
    }
}
