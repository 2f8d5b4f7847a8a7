//! Tabular store sink for appending submission rows
//!
//! The store is an external collaborator with one narrow operation:
//! appending an ordered sequence of 10-column rows to a named, pre-existing
//! sheet. [`RowSink`] is the seam; [`SheetsClient`] implements it against a
//! Sheets-style values-append HTTP endpoint, and [`MemoryRowSink`] keeps
//! rows in process for tests and offline hosts.
//!
//! The append is a single blocking call with no timeout or retry policy;
//! failure is reported to the caller and never retried here.

use crate::app::services::exporter::Row;
use crate::config::SheetStoreConfig;
use crate::constants::sheets::VALUE_INPUT_OPTION;
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// A sink that durably appends rows to a tabular store
pub trait RowSink {
    /// Append rows to the store, preserving their order
    fn append_rows(&mut self, rows: &[Row]) -> Result<()>;
}

/// JSON body of a values-append request
#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    values: &'a [Row],
}

/// HTTP client for a Sheets-style values-append endpoint
///
/// Authentication uses a pre-obtained bearer token from
/// [`SheetStoreConfig`]; acquiring the token (service-account exchange) is a
/// process-start setup concern outside this client.
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    config: SheetStoreConfig,
}

impl SheetsClient {
    /// Create a client for a validated store configuration
    pub fn new(config: SheetStoreConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            config,
        })
    }

    /// The values-append URL for the configured spreadsheet and sheet
    fn append_url(&self) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}:append?valueInputOption={}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.spreadsheet_id,
            self.config.sheet_name,
            VALUE_INPUT_OPTION
        )
    }
}

impl RowSink for SheetsClient {
    fn append_rows(&mut self, rows: &[Row]) -> Result<()> {
        if rows.is_empty() {
            debug!("No rows to append, skipping store call");
            return Ok(());
        }

        let url = self.append_url();
        debug!("Appending {} row(s) to {}", rows.len(), url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&AppendRequest { values: rows })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::store_rejected(status.as_u16(), body));
        }

        info!(
            "Appended {} row(s) to sheet '{}'",
            rows.len(),
            self.config.sheet_name
        );
        Ok(())
    }
}

/// In-process sink that collects rows in memory
///
/// Used by tests and by hosts running without remote store credentials.
#[derive(Debug, Default)]
pub struct MemoryRowSink {
    rows: Vec<Row>,
}

impl MemoryRowSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows appended so far, in append order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl RowSink for MemoryRowSink {
    fn append_rows(&mut self, rows: &[Row]) -> Result<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row(parameter: &str) -> Row {
        Row([
            "L-100".to_string(),
            "S-7".to_string(),
            "Wheat flour batch".to_string(),
            parameter.to_string(),
            "2024-03-05".to_string(),
            String::new(),
            "AOAC 925.10".to_string(),
            "12.4%".to_string(),
            String::new(),
            "%".to_string(),
        ])
    }

    #[test]
    fn test_append_url_shape() {
        let config = SheetStoreConfig::new("sheet-id-123", "Results")
            .with_access_token("token")
            .with_api_base_url("https://example.test/v4/");
        let client = SheetsClient::new(config).unwrap();

        assert_eq!(
            client.append_url(),
            "https://example.test/v4/spreadsheets/sheet-id-123/values/Results:append?valueInputOption=RAW"
        );
    }

    #[test]
    fn test_client_rejects_incomplete_config() {
        let config = SheetStoreConfig::new("", "Results").with_access_token("token");
        assert!(SheetsClient::new(config).is_err());
    }

    #[test]
    fn test_append_request_body_shape() {
        let rows = vec![create_test_row("Moisture")];
        let json = serde_json::to_value(AppendRequest { values: &rows }).unwrap();

        let values = json["values"].as_array().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0][3], "Moisture");
        assert_eq!(values[0].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_memory_sink_preserves_append_order() {
        let mut sink = MemoryRowSink::new();
        sink.append_rows(&[create_test_row("Moisture"), create_test_row("Ash")])
            .unwrap();
        sink.append_rows(&[create_test_row("Sodium")]).unwrap();

        let parameters: Vec<&str> = sink.rows().iter().map(|r| r.columns()[3].as_str()).collect();
        assert_eq!(parameters, vec!["Moisture", "Ash", "Sodium"]);
    }
}
