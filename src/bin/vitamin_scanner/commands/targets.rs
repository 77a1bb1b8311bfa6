// ABOUTME: Target listing command for vitamin-scanner
// ABOUTME: Resolves a demographic from flags, a key, or the saved profile and prints its targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::status_from_flags;
use vitamin_intelligence::{resolve, resolve_str};
use vitamin_scanner::errors::AppResult;
use vitamin_scanner::formatters::{format_targets, OutputFormat};
use vitamin_scanner::models::{Sex, UserProfile};
use vitamin_scanner::profile_store::{require_profile, ProfileStore};

/// Which demographic to show
pub enum Selection {
    /// Ad-hoc profile from flags
    Profile {
        age: f64,
        sex: Sex,
        pregnant: bool,
        lactating: bool,
    },
    /// Canonical key string
    Key(String),
    /// The saved profile
    Saved,
}

/// Render targets for the selected demographic
pub async fn show(
    store: &dyn ProfileStore,
    selection: Selection,
    format: OutputFormat,
) -> AppResult<String> {
    let set = match selection {
        Selection::Profile {
            age,
            sex,
            pregnant,
            lactating,
        } => {
            let profile = UserProfile::new(age, sex, status_from_flags(pregnant, lactating))?;
            resolve(&profile.demographic_key())
        }
        Selection::Key(key) => resolve_str(&key),
        Selection::Saved => resolve(&require_profile(store).await?.demographic_key()),
    };
    format_targets(set, format)
}
