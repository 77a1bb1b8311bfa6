// ABOUTME: Demographic lookup keys (life-stage band x sex x reproductive status) and user profiles
// ABOUTME: Maps fractional ages onto DRI life-stage bands with a never-fail fallback key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::life_stage;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Oldest age accepted when a profile is entered
const MAX_PROFILE_AGE_YEARS: f64 = 130.0;

/// Biological sex used for intake recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Lowercase key segment
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "sex must be 'male' or 'female', got '{other}'"
            ))),
        }
    }
}

/// Pregnancy or lactation modifier on a recommendation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReproductiveStatus {
    /// Standard recommendations
    #[default]
    None,
    /// Pregnancy recommendations
    Pregnant,
    /// Lactation recommendations
    Lactating,
}

impl ReproductiveStatus {
    /// Key suffix, empty for the standard status
    #[must_use]
    pub const fn key_suffix(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Pregnant => "_pregnant",
            Self::Lactating => "_lactating",
        }
    }
}

/// DRI life-stage band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// 0 to 6 months
    InfantYoung,
    /// 7 to 12 months
    InfantOlder,
    /// 1 to 3 years
    Toddler,
    /// 4 to 8 years
    Child,
    /// 9 to 13 years
    Preteen,
    /// 14 to 18 years
    Teen,
    /// 19 to 30 years
    YoungAdult,
    /// 31 to 50 years
    Adult,
    /// 51 to 70 years
    MiddleAge,
    /// Over 70 years
    Senior,
}

impl LifeStage {
    /// Every band, youngest first
    pub const ALL: [Self; 10] = [
        Self::InfantYoung,
        Self::InfantOlder,
        Self::Toddler,
        Self::Child,
        Self::Preteen,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::MiddleAge,
        Self::Senior,
    ];

    /// Map a (possibly fractional) age in years onto its band
    ///
    /// Returns `None` for negative or non-finite ages.
    #[must_use]
    pub fn from_age(age_years: f64) -> Option<Self> {
        if !age_years.is_finite() || age_years < 0.0 {
            return None;
        }
        let stage = if age_years < life_stage::INFANT_YOUNG_MAX {
            Self::InfantYoung
        } else if age_years < life_stage::INFANT_OLDER_MAX {
            Self::InfantOlder
        } else if age_years < life_stage::TODDLER_MAX {
            Self::Toddler
        } else if age_years < life_stage::CHILD_MAX {
            Self::Child
        } else if age_years < life_stage::PRETEEN_MAX {
            Self::Preteen
        } else if age_years < life_stage::TEEN_MAX {
            Self::Teen
        } else if age_years < life_stage::YOUNG_ADULT_MAX {
            Self::YoungAdult
        } else if age_years < life_stage::ADULT_MAX {
            Self::Adult
        } else if age_years < life_stage::MIDDLE_AGE_MAX {
            Self::MiddleAge
        } else {
            Self::Senior
        };
        Some(stage)
    }

    /// Band label used in demographic keys
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InfantYoung => "0-0.5",
            Self::InfantOlder => "0.5-1",
            Self::Toddler => "1-3",
            Self::Child => "4-8",
            Self::Preteen => "9-13",
            Self::Teen => "14-18",
            Self::YoungAdult => "19-30",
            Self::Adult => "31-50",
            Self::MiddleAge => "51-70",
            Self::Senior => "70+",
        }
    }

    /// Whether pregnancy and lactation bands exist for this stage (ages 14-50)
    #[must_use]
    pub const fn is_reproductive(&self) -> bool {
        matches!(self, Self::Teen | Self::YoungAdult | Self::Adult)
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.label() == label)
    }
}

/// Composite lookup key for a recommendation set
///
/// Serializes in its canonical string form, e.g. `"female_31-50_pregnant"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DemographicKey {
    /// Life-stage band
    pub life_stage: LifeStage,
    /// Biological sex
    pub sex: Sex,
    /// Pregnancy/lactation modifier
    pub status: ReproductiveStatus,
}

impl DemographicKey {
    /// Construct a key without consistency checks
    #[must_use]
    pub const fn new(life_stage: LifeStage, sex: Sex, status: ReproductiveStatus) -> Self {
        Self {
            life_stage,
            sex,
            status,
        }
    }

    /// Standard (non-pregnant, non-lactating) key
    #[must_use]
    pub const fn standard(life_stage: LifeStage, sex: Sex) -> Self {
        Self::new(life_stage, sex, ReproductiveStatus::None)
    }

    /// Designated default key (`female_19-30`)
    #[must_use]
    pub const fn fallback() -> Self {
        Self::standard(LifeStage::YoungAdult, Sex::Female)
    }

    /// Whether a recommendation set exists for this combination
    ///
    /// Pregnancy and lactation apply only to females aged 14-50.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        match self.status {
            ReproductiveStatus::None => true,
            ReproductiveStatus::Pregnant | ReproductiveStatus::Lactating => {
                matches!(self.sex, Sex::Female) && self.life_stage.is_reproductive()
            }
        }
    }

    /// Build the lookup key for a user profile
    ///
    /// Unusable ages fall back to the default key. A pregnancy or lactation
    /// flag outside the female 14-50 range is dropped in favour of the
    /// standard band for that sex.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        let Some(life_stage) = LifeStage::from_age(profile.age_years) else {
            warn!(
                age_years = profile.age_years,
                "Profile age outside any life-stage band, using default demographic"
            );
            return Self::fallback();
        };

        let key = Self::new(life_stage, profile.sex, profile.reproductive_status);
        if key.is_consistent() {
            key
        } else {
            Self::standard(life_stage, profile.sex)
        }
    }
}

impl Default for DemographicKey {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for DemographicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}{}",
            self.sex.as_str(),
            self.life_stage.label(),
            self.status.key_suffix()
        )
    }
}

impl FromStr for DemographicKey {
    type Err = AppError;

    /// Parse the canonical `{sex}_{band}[_{status}]` form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::invalid_format(format!("unrecognized demographic key '{s}'"));
        let mut parts = s.trim().split('_');
        let sex = match parts.next() {
            Some("male") => Sex::Male,
            Some("female") => Sex::Female,
            _ => return Err(invalid()),
        };
        let life_stage = parts
            .next()
            .and_then(LifeStage::from_label)
            .ok_or_else(invalid)?;
        let status = match parts.next() {
            None => ReproductiveStatus::None,
            Some("pregnant") => ReproductiveStatus::Pregnant,
            Some("lactating") => ReproductiveStatus::Lactating,
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(life_stage, sex, status))
    }
}

impl Serialize for DemographicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DemographicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(|error: AppError| D::Error::custom(error.message))
    }
}

/// User-entered profile that recommendations are keyed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years (fractional for infants)
    #[serde(rename = "age")]
    pub age_years: f64,
    /// Biological sex
    pub sex: Sex,
    /// Pregnancy/lactation status
    #[serde(default)]
    pub reproductive_status: ReproductiveStatus,
    /// When the profile was last saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Create a validated profile from form input
    ///
    /// # Errors
    ///
    /// Returns an error if the age is negative, non-finite, or implausibly large
    pub fn new(age_years: f64, sex: Sex, reproductive_status: ReproductiveStatus) -> AppResult<Self> {
        if !age_years.is_finite() || !(0.0..=MAX_PROFILE_AGE_YEARS).contains(&age_years) {
            return Err(AppError::invalid_input(format!(
                "Age must be between 0 and {MAX_PROFILE_AGE_YEARS} years"
            )));
        }
        Ok(Self {
            age_years,
            sex,
            reproductive_status,
            updated_at: None,
        })
    }

    /// Stamp the profile with the current time
    #[must_use]
    pub fn touched(mut self) -> Self {
        self.updated_at = Some(Utc::now());
        self
    }

    /// Demographic key for this profile
    #[must_use]
    pub fn demographic_key(&self) -> DemographicKey {
        DemographicKey::from_profile(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::defaults::FALLBACK_DEMOGRAPHIC_KEY;
    use crate::errors::ErrorCode;

    fn profile(age: f64, sex: Sex, status: ReproductiveStatus) -> UserProfile {
        UserProfile {
            age_years: age,
            sex,
            reproductive_status: status,
            updated_at: None,
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(LifeStage::from_age(0.0), Some(LifeStage::InfantYoung));
        assert_eq!(LifeStage::from_age(0.5), Some(LifeStage::InfantOlder));
        assert_eq!(LifeStage::from_age(1.0), Some(LifeStage::Toddler));
        assert_eq!(LifeStage::from_age(3.99), Some(LifeStage::Toddler));
        assert_eq!(LifeStage::from_age(4.0), Some(LifeStage::Child));
        assert_eq!(LifeStage::from_age(9.0), Some(LifeStage::Preteen));
        assert_eq!(LifeStage::from_age(14.0), Some(LifeStage::Teen));
        assert_eq!(LifeStage::from_age(18.9), Some(LifeStage::Teen));
        assert_eq!(LifeStage::from_age(19.0), Some(LifeStage::YoungAdult));
        assert_eq!(LifeStage::from_age(30.5), Some(LifeStage::YoungAdult));
        assert_eq!(LifeStage::from_age(31.0), Some(LifeStage::Adult));
        assert_eq!(LifeStage::from_age(51.0), Some(LifeStage::MiddleAge));
        assert_eq!(LifeStage::from_age(70.0), Some(LifeStage::Senior));
        assert_eq!(LifeStage::from_age(104.0), Some(LifeStage::Senior));
    }

    #[test]
    fn test_invalid_ages_have_no_band() {
        assert_eq!(LifeStage::from_age(-1.0), None);
        assert_eq!(LifeStage::from_age(f64::NAN), None);
        assert_eq!(LifeStage::from_age(f64::INFINITY), None);
    }

    #[test]
    fn test_female_25_maps_to_female_19_30() {
        let key = DemographicKey::from_profile(&profile(25.0, Sex::Female, ReproductiveStatus::None));
        assert_eq!(key.to_string(), "female_19-30");
    }

    #[test]
    fn test_pregnancy_applies_only_to_reproductive_females() {
        let pregnant = profile(32.0, Sex::Female, ReproductiveStatus::Pregnant);
        assert_eq!(pregnant.demographic_key().to_string(), "female_31-50_pregnant");

        let teen = profile(16.0, Sex::Female, ReproductiveStatus::Lactating);
        assert_eq!(teen.demographic_key().to_string(), "female_14-18_lactating");

        let older = profile(55.0, Sex::Female, ReproductiveStatus::Pregnant);
        assert_eq!(older.demographic_key().to_string(), "female_51-70");

        let child = profile(10.0, Sex::Female, ReproductiveStatus::Pregnant);
        assert_eq!(child.demographic_key().to_string(), "female_9-13");

        let male = profile(30.0, Sex::Male, ReproductiveStatus::Pregnant);
        assert_eq!(male.demographic_key().to_string(), "male_19-30");
    }

    #[test]
    fn test_invalid_age_uses_fallback_key() {
        let key = DemographicKey::from_profile(&profile(-3.0, Sex::Male, ReproductiveStatus::None));
        assert_eq!(key, DemographicKey::fallback());
    }

    #[test]
    fn test_key_string_round_trip() {
        for stage in LifeStage::ALL {
            for sex in [Sex::Male, Sex::Female] {
                let key = DemographicKey::standard(stage, sex);
                assert_eq!(key.to_string().parse::<DemographicKey>().unwrap(), key);
            }
        }
        let key: DemographicKey = "female_19-30_pregnant".parse().unwrap();
        assert_eq!(key.status, ReproductiveStatus::Pregnant);
    }

    #[test]
    fn test_fallback_key_matches_configured_default() {
        assert_eq!(
            DemographicKey::fallback().to_string(),
            FALLBACK_DEMOGRAPHIC_KEY
        );
    }

    #[test]
    fn test_key_serializes_as_canonical_string() {
        let key: DemographicKey = "female_14-18_lactating".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"female_14-18_lactating\"");
        assert_eq!(serde_json::from_str::<DemographicKey>(&json).unwrap(), key);
        assert!(serde_json::from_str::<DemographicKey>("\"female_19-50\"").is_err());
    }

    #[test]
    fn test_malformed_key_strings_are_rejected() {
        assert_eq!(
            "female_19-50".parse::<DemographicKey>().unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert!("female_19-50".parse::<DemographicKey>().is_err());
        assert!("other_19-30".parse::<DemographicKey>().is_err());
        assert!("female_19-30_pregnant_extra".parse::<DemographicKey>().is_err());
        assert!("".parse::<DemographicKey>().is_err());
    }

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new(25.0, Sex::Female, ReproductiveStatus::None).is_ok());
        assert!(UserProfile::new(-1.0, Sex::Female, ReproductiveStatus::None).is_err());
        assert!(UserProfile::new(200.0, Sex::Male, ReproductiveStatus::None).is_err());
        assert!(UserProfile::new(f64::NAN, Sex::Male, ReproductiveStatus::None).is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let parsed: UserProfile =
            serde_json::from_str(r#"{"age": 25, "sex": "female"}"#).unwrap();
        assert_eq!(parsed.reproductive_status, ReproductiveStatus::None);
        assert!(parsed.updated_at.is_none());
    }
}
