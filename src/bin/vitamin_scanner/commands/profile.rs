// ABOUTME: Profile commands for vitamin-scanner
// ABOUTME: Saves, shows, and clears the profile recommendations are keyed on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::status_from_flags;
use tracing::warn;
use vitamin_scanner::errors::AppResult;
use vitamin_scanner::formatters::{format_profile, OutputFormat};
use vitamin_scanner::models::{Sex, UserProfile};
use vitamin_scanner::profile_store::{require_profile, ProfileStore};

/// Validate and save a profile
pub async fn set(
    store: &dyn ProfileStore,
    age: f64,
    sex: Sex,
    pregnant: bool,
    lactating: bool,
    format: OutputFormat,
) -> AppResult<String> {
    let status = status_from_flags(pregnant, lactating);
    let profile = UserProfile::new(age, sex, status)?.touched();

    let key = profile.demographic_key();
    if key.status != status {
        warn!(
            demographic = %key,
            "Pregnancy/lactation applies to females aged 14-50 only; using standard targets"
        );
    }

    store.save(&profile).await?;
    format_profile(&profile, format)
}

/// Render the saved profile
pub async fn show(store: &dyn ProfileStore, format: OutputFormat) -> AppResult<String> {
    let profile = require_profile(store).await?;
    format_profile(&profile, format)
}

/// Delete the saved profile
pub async fn clear(store: &dyn ProfileStore) -> AppResult<String> {
    store.clear().await?;
    Ok("Profile cleared".to_owned())
}
