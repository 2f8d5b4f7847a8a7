//! Configuration management for the lab reporter
//!
//! Provides explicit configuration structures for the two output sinks.
//! Configuration is constructed once at process start and passed into the
//! sink constructors; it is never read ambiently inside the validator or
//! exporter.

use crate::constants::{report, sheets};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable holding the spreadsheet identifier
pub const ENV_SPREADSHEET_ID: &str = "LAB_REPORTER_SPREADSHEET_ID";

/// Environment variable holding the target sheet (tab) name
pub const ENV_SHEET_NAME: &str = "LAB_REPORTER_SHEET_NAME";

/// Environment variable holding the service-account access token
pub const ENV_ACCESS_TOKEN: &str = "LAB_REPORTER_ACCESS_TOKEN";

/// Configuration for the remote spreadsheet store sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetStoreConfig {
    /// Base URL of the Sheets values API
    pub api_base_url: String,

    /// Identifier of the pre-existing shared spreadsheet
    pub spreadsheet_id: String,

    /// Name of the sheet (tab) rows are appended to
    pub sheet_name: String,

    /// Pre-obtained bearer token for the store; acquiring it is a setup
    /// concern outside this crate
    #[serde(default, skip_serializing)]
    pub access_token: String,
}

impl Default for SheetStoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: sheets::DEFAULT_API_BASE_URL.to_string(),
            spreadsheet_id: String::new(),
            sheet_name: "Results".to_string(),
            access_token: String::new(),
        }
    }
}

impl SheetStoreConfig {
    /// Create a store configuration for a spreadsheet and sheet name
    pub fn new(spreadsheet_id: impl Into<String>, sheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
            ..Self::default()
        }
    }

    /// Set the access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Override the API base URL (useful for test servers)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Load the store configuration from environment variables
    ///
    /// Sink credentials are the only configuration this crate reads from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let spreadsheet_id = require_env(ENV_SPREADSHEET_ID)?;
        let sheet_name = require_env(ENV_SHEET_NAME)?;
        let access_token = require_env(ENV_ACCESS_TOKEN)?;

        debug!("Loaded sheet store configuration from environment");
        Ok(Self::new(spreadsheet_id, sheet_name).with_access_token(access_token))
    }

    /// Validate that the configuration is complete enough to reach the store
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(Error::configuration("Sheets API base URL cannot be empty"));
        }
        if self.spreadsheet_id.trim().is_empty() {
            return Err(Error::configuration("Spreadsheet ID cannot be empty"));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(Error::configuration("Sheet name cannot be empty"));
        }
        if self.access_token.trim().is_empty() {
            return Err(Error::configuration("Access token cannot be empty"));
        }
        Ok(())
    }
}

/// Configuration for the rendered report document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output filename offered to the user for download
    pub filename: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            filename: report::FILENAME.to_string(),
        }
    }
}

impl ReportConfig {
    /// Override the report filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}

/// Top-level configuration for the lab reporter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabConfig {
    /// Remote spreadsheet store settings
    pub sheet_store: SheetStoreConfig,

    /// Report document settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl LabConfig {
    /// Load configuration from a JSON file
    ///
    /// The access token is deliberately not persisted in the file; combine
    /// with [`SheetStoreConfig::from_env`] or
    /// [`SheetStoreConfig::with_access_token`] to supply it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file: {}", path.display()),
                e,
            )
        })?;

        let config: Self = serde_json::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the access token on the store configuration
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.sheet_store.access_token = token.into();
        self
    }
}

fn require_env(name: &'static str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::configuration(format!("Environment variable {} is not set", name)))
}
