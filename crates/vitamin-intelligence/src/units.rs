// ABOUTME: Unit-aware parsing of label amount text and normalization to micrograms
// ABOUTME: Mass units convert directly; IU converts only for nutrients with a defined factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;
use vitamin_core::constants::units::{
    MCG_PER_G, MCG_PER_MG, VITAMIN_A_MCG_PER_IU, VITAMIN_D_MCG_PER_IU, VITAMIN_E_MCG_PER_IU,
};
use vitamin_core::models::{AmountUnit, Nutrient, NutrientAmount};

/// Leading number (optional thousands separators and decimals) then an optional unit word
static AMOUNT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?|\.\d+)\s*([A-Za-zµμ.]+)?").ok()
});

/// Form qualifiers printed directly after the unit (`"400mcgDFE"`, `"16 mgNE"`)
const UNIT_QUALIFIERS: [&str; 4] = ["dfe", "rae", "ne", "ate"];

/// Why an amount could not be expressed in micrograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// Non-zero amount printed without a recognizable unit
    #[error("amount has no recognizable unit")]
    MissingUnit,
    /// IU amount for a nutrient without a defined IU conversion
    #[error("no IU conversion defined for {0}")]
    NoIuConversion(Nutrient),
}

/// Parse label text such as `"700 mcg"`, `"1,000 IU"` or `"1.5mg"`
///
/// Unit matching is case- and spacing-tolerant and ignores trailing
/// qualifiers (`"mcg RAE"`, `"mg NE"`). Unparseable or empty text yields a
/// zero amount rather than an error; an unrecognized unit word yields the
/// magnitude without a unit.
#[must_use]
pub fn parse_amount(text: &str) -> NutrientAmount {
    let Some(pattern) = AMOUNT_PATTERN.as_ref() else {
        return NutrientAmount::zero();
    };
    let Some(captures) = pattern.captures(text) else {
        if !text.trim().is_empty() {
            debug!(text, "Unparseable amount treated as zero");
        }
        return NutrientAmount::zero();
    };

    let magnitude = captures
        .get(1)
        .map(|m| m.as_str().replace(',', ""))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(0.0);
    let unit = captures.get(2).and_then(|m| parse_unit(m.as_str()));

    NutrientAmount::new(magnitude, unit)
}

/// Map a unit word onto the closed unit set
///
/// Dots are ignored (`"I.U."`, `"mg."`) and a qualifier fused onto the unit
/// is dropped.
fn parse_unit(token: &str) -> Option<AmountUnit> {
    let word: String = token
        .chars()
        .filter(|ch| *ch != '.')
        .flat_map(char::to_lowercase)
        .collect();

    let unit = unit_from_word(&word).or_else(|| {
        UNIT_QUALIFIERS
            .iter()
            .filter_map(|qualifier| word.strip_suffix(qualifier))
            .find_map(unit_from_word)
    });
    if unit.is_none() && !word.is_empty() {
        debug!(unit = %word, "Unrecognized amount unit");
    }
    unit
}

fn unit_from_word(word: &str) -> Option<AmountUnit> {
    match word {
        "mcg" | "µg" | "μg" | "ug" | "microgram" | "micrograms" => Some(AmountUnit::Micrograms),
        "mg" | "milligram" | "milligrams" => Some(AmountUnit::Milligrams),
        "g" | "gram" | "grams" => Some(AmountUnit::Grams),
        "iu" => Some(AmountUnit::InternationalUnits),
        _ => None,
    }
}

/// Micrograms per IU for nutrients whose IU has a defined mass equivalent
#[must_use]
pub const fn iu_factor(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::VitaminA => Some(VITAMIN_A_MCG_PER_IU),
        Nutrient::VitaminD => Some(VITAMIN_D_MCG_PER_IU),
        Nutrient::VitaminE => Some(VITAMIN_E_MCG_PER_IU),
        _ => None,
    }
}

/// Express an amount of `nutrient` in micrograms
///
/// Zero amounts normalize to zero whatever their unit.
///
/// # Errors
///
/// Returns an error when a non-zero amount has no unit, or is in IU for a
/// nutrient without a defined IU conversion.
pub fn to_micrograms(amount: &NutrientAmount, nutrient: Nutrient) -> Result<f64, NormalizationError> {
    if amount.is_zero() {
        return Ok(0.0);
    }
    let factor = match amount.unit() {
        None => return Err(NormalizationError::MissingUnit),
        Some(AmountUnit::Micrograms) => 1.0,
        Some(AmountUnit::Milligrams) => MCG_PER_MG,
        Some(AmountUnit::Grams) => MCG_PER_G,
        Some(AmountUnit::InternationalUnits) => {
            iu_factor(nutrient).ok_or(NormalizationError::NoIuConversion(nutrient))?
        }
    };
    Ok(amount.magnitude() * factor)
}

/// Parse and normalize in one step
///
/// # Errors
///
/// See [`to_micrograms`].
pub fn parse_micrograms(text: &str, nutrient: Nutrient) -> Result<f64, NormalizationError> {
    to_micrograms(&parse_amount(text), nutrient)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_common_label_forms() {
        let amount = parse_amount("700 mcg");
        assert!(approx(amount.magnitude(), 700.0));
        assert_eq!(amount.unit(), Some(AmountUnit::Micrograms));

        let amount = parse_amount("1000 IU");
        assert_eq!(amount.unit(), Some(AmountUnit::InternationalUnits));

        let amount = parse_amount("1.5mg");
        assert!(approx(amount.magnitude(), 1.5));
        assert_eq!(amount.unit(), Some(AmountUnit::Milligrams));
    }

    #[test]
    fn test_parse_is_case_and_spacing_tolerant() {
        assert_eq!(parse_amount("  25   MCG").unit(), Some(AmountUnit::Micrograms));
        assert_eq!(parse_amount("700 µg").unit(), Some(AmountUnit::Micrograms));
        assert_eq!(parse_amount("700 μg").unit(), Some(AmountUnit::Micrograms));
        assert_eq!(parse_amount("45 iu").unit(), Some(AmountUnit::InternationalUnits));
        assert_eq!(parse_amount("2 G").unit(), Some(AmountUnit::Grams));
    }

    #[test]
    fn test_parse_ignores_qualifiers_and_thousands_separators() {
        let amount = parse_amount("900 mcg RAE");
        assert_eq!(amount.unit(), Some(AmountUnit::Micrograms));

        let amount = parse_amount("1,000 IU");
        assert!(approx(amount.magnitude(), 1000.0));

        let amount = parse_amount(".5 mg");
        assert!(approx(amount.magnitude(), 0.5));
    }

    #[test]
    fn test_parse_dotted_and_fused_units() {
        let amount = parse_amount("1000 I.U.");
        assert!(approx(amount.magnitude(), 1000.0));
        assert_eq!(amount.unit(), Some(AmountUnit::InternationalUnits));

        assert_eq!(parse_amount("400mcgDFE").unit(), Some(AmountUnit::Micrograms));
        assert_eq!(parse_amount("16 mgNE").unit(), Some(AmountUnit::Milligrams));
        assert_eq!(parse_amount("90 mg.").unit(), Some(AmountUnit::Milligrams));
        assert!(approx(parse_amount("2.5 mcg").magnitude(), 2.5));
    }

    #[test]
    fn test_parse_fails_closed() {
        assert!(parse_amount("").is_zero());
        assert!(parse_amount("n/a").is_zero());
        assert!(parse_amount("mg 50").is_zero());
        assert_eq!(parse_amount("garbage").unit(), None);
    }

    #[test]
    fn test_unknown_unit_keeps_magnitude() {
        let amount = parse_amount("3 tablets");
        assert!(approx(amount.magnitude(), 3.0));
        assert_eq!(amount.unit(), None);
    }

    #[test]
    fn test_mass_normalization() {
        assert!(approx(parse_micrograms("2 g", Nutrient::Choline).unwrap(), 2_000_000.0));
        assert!(approx(parse_micrograms("90 mg", Nutrient::VitaminC).unwrap(), 90_000.0));
        assert!(approx(parse_micrograms("25 mcg", Nutrient::VitaminB12).unwrap(), 25.0));
    }

    #[test]
    fn test_iu_normalization_per_nutrient() {
        assert!(approx(parse_micrograms("1000 IU", Nutrient::VitaminD).unwrap(), 25.0));
        assert!(approx(parse_micrograms("3500 IU", Nutrient::VitaminA).unwrap(), 1050.0));
        assert!(approx(parse_micrograms("30 IU", Nutrient::VitaminE).unwrap(), 13_500.0));
        assert_eq!(
            parse_micrograms("100 IU", Nutrient::Niacin),
            Err(NormalizationError::NoIuConversion(Nutrient::Niacin))
        );
    }

    #[test]
    fn test_zero_normalizes_regardless_of_unit() {
        assert_eq!(parse_micrograms("0 IU", Nutrient::Biotin), Ok(0.0));
        assert_eq!(parse_micrograms("0", Nutrient::Biotin), Ok(0.0));
    }

    #[test]
    fn test_unitless_amount_cannot_normalize() {
        assert_eq!(
            parse_micrograms("50", Nutrient::Biotin),
            Err(NormalizationError::MissingUnit)
        );
    }
}
