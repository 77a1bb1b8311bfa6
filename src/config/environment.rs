// ABOUTME: Environment configuration for the scanner CLI
// ABOUTME: Resolves the profile file location and default output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::formatters::OutputFormat;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use vitamin_core::constants::{defaults, env_config};
use vitamin_core::errors::{AppError, AppResult};

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Where the user profile is stored
    pub profile_path: PathBuf,
    /// Default output format for reports
    pub output_format: OutputFormat,
}

impl ScannerConfig {
    /// Load configuration from environment variables
    ///
    /// - `VITAMIN_SCANNER_PROFILE_PATH`: profile file (default
    ///   `<config dir>/vitamin-scanner/profile.json`)
    /// - `VITAMIN_SCANNER_OUTPUT`: `text` or `json` (default `text`)
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the output format is not recognized
    /// or no profile location can be determined.
    pub fn from_env() -> AppResult<Self> {
        let profile_path = match env::var(env_config::PROFILE_PATH) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_profile_path()?,
        };

        let output_format = env_var_or(env_config::OUTPUT_FORMAT, OutputFormat::Text.as_str())
            .parse::<OutputFormat>()
            .map_err(|error| {
                AppError::config(format!("{}: {}", env_config::OUTPUT_FORMAT, error.message))
            })?;

        debug!(profile_path = %profile_path.display(), %output_format, "Configuration loaded");
        Ok(Self {
            profile_path,
            output_format,
        })
    }
}

/// `<config dir>/vitamin-scanner/profile.json`
///
/// # Errors
///
/// Returns a configuration error on platforms without a user config directory
pub fn default_profile_path() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(defaults::APP_DIR_NAME).join(defaults::PROFILE_FILE_NAME))
        .ok_or_else(|| {
            AppError::config(format!(
                "no user configuration directory; set {}",
                env_config::PROFILE_PATH
            ))
        })
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
