// SPDX-License-Identifier: MPL-2.0

use crate::api::SortOrder;
use crate::config::{APP_ID, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE};
use crate::query::{QuerySelector, SelectorError, SortKey};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_base_url: String,
    /// Posts per page; 0 asks the server for everything
    pub page_size: u64,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Wire name of the initial sort key, `None` for server order
    pub default_sort_by: Option<String>,
    pub default_sort_order: SortOrder,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE.into(),
            log_filter: "info".to_string(),
            default_sort_by: Some(SortKey::Id.name().to_string()),
            default_sort_order: SortOrder::Desc,
        }
    }
}

impl AppSettings {
    /// Get the settings file path (~/.config/io.github.postdesk.Postdesk/settings.json)
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push(APP_ID);
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    /// Initial query selector described by these settings
    pub fn selector(&self) -> Result<QuerySelector, SelectorError> {
        let sort_by = self
            .default_sort_by
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;

        Ok(QuerySelector {
            sort_by,
            sort_order: self.default_sort_order,
            ..QuerySelector::new(self.page_size)
        })
    }
}
