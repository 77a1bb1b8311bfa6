// ABOUTME: Minimal key-value persistence for the user profile between CLI invocations
// ABOUTME: In-memory store for tests and a JSON file store under the user config directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use vitamin_core::constants::defaults::PROFILE_STORAGE_KEY;
use vitamin_core::errors::{AppError, AppResult};
use vitamin_core::models::UserProfile;

/// Where the current user profile lives
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Saved profile, if any
    async fn load(&self) -> AppResult<Option<UserProfile>>;

    /// Replace the saved profile
    async fn save(&self, profile: &UserProfile) -> AppResult<()>;

    /// Forget the saved profile (no-op when nothing is saved)
    async fn clear(&self) -> AppResult<()>;
}

/// Load the saved profile or fail with a "profile required" error
///
/// # Errors
///
/// Returns a missing-field error when no profile has been saved, or the
/// store's own error when loading fails.
pub async fn require_profile(store: &dyn ProfileStore) -> AppResult<UserProfile> {
    store.load().await?.ok_or_else(|| {
        AppError::missing_field("profile")
            .with_details(serde_json::json!({ "hint": "run `vitamin-scanner profile set` first" }))
    })
}

/// Process-local store holding the serialized profile under one key
#[derive(Default)]
pub struct MemoryProfileStore {
    entries: DashMap<String, String>,
}

impl MemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> AppResult<Option<UserProfile>> {
        self.entries
            .get(PROFILE_STORAGE_KEY)
            .map(|raw| serde_json::from_str(raw.value()))
            .transpose()
            .map_err(AppError::from)
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let raw = serde_json::to_string(profile)?;
        self.entries.insert(PROFILE_STORAGE_KEY.to_owned(), raw);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.entries.remove(PROFILE_STORAGE_KEY);
        Ok(())
    }
}

/// Profile kept as a JSON document on disk
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn load(&self) -> AppResult<Option<UserProfile>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved profile");
                return Ok(None);
            }
            Err(error) => return Err(AppError::from(error).with_resource_id(self.path.display().to_string())),
        };
        let profile = serde_json::from_str(&raw)
            .map_err(|error| AppError::from(error).with_resource_id(self.path.display().to_string()))?;
        Ok(Some(profile))
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, raw).await?;
        info!(path = %self.path.display(), "Profile saved");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Profile cleared");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
