//! Lab Reporter Library
//!
//! A Rust library implementing the core of a laboratory results entry system:
//! one user submission is collected into a record set, validated against
//! required-field rules, and exported to two independent sinks — a shared
//! spreadsheet (one flat row per measured parameter) and a formatted `.docx`
//! report for download.
//!
//! This library provides tools for:
//! - Modelling a submission as a header record plus an ordered set of
//!   parameter measurement records drawn from a fixed catalog
//! - Validating submissions with first-failure-wins required-field rules
//! - Mapping a validated submission into spreadsheet rows and a structured
//!   heading + table document, with a single canonical date format
//! - Appending rows to a remote tabular store and rendering the document,
//!   with the two sinks failing independently
//! - Comprehensive error handling surfaced as user-displayable messages

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod exporter;
        pub mod pipeline;
        pub mod report_renderer;
        pub mod sheet_store;
        pub mod validator;
    }
}

// Re-export commonly used types
pub use app::models::{HeaderRecord, Parameter, ParameterRecord, SubmissionRecord};
pub use app::services::pipeline::{SubmissionOutcome, SubmissionPipeline};
pub use config::LabConfig;

/// Result type alias for the lab reporter
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for submission processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required header field is empty or all-whitespace
    #[error("Missing required header field: {field}")]
    MissingHeaderField { field: &'static str },

    /// Submission contains no parameter records
    #[error("No parameters selected: choose at least one parameter before submitting")]
    NoParametersSelected,

    /// A selected parameter is missing one of its required fields
    #[error("Incomplete record for parameter '{parameter}': missing {field}")]
    IncompleteParameterRecord {
        parameter: String,
        field: &'static str,
    },

    /// Parameter name is not in the fixed catalog
    #[error("Unknown parameter '{name}': not in the parameter catalog")]
    UnknownParameter { name: String },

    /// The same parameter was selected more than once
    #[error("Duplicate parameter '{name}': each parameter may be selected at most once")]
    DuplicateParameter { name: String },

    /// Spreadsheet store append failed at the transport level
    #[error("Spreadsheet store append failed: {message}")]
    StoreAppend {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Spreadsheet store rejected the append request
    #[error("Spreadsheet store rejected append (HTTP {status}): {message}")]
    StoreRejected { status: u16, message: String },

    /// Report document rendering failed
    #[error("Report rendering failed: {message}")]
    ReportRendering { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a missing header field error
    pub fn missing_header_field(field: &'static str) -> Self {
        Self::MissingHeaderField { field }
    }

    /// Create an incomplete parameter record error naming the offending parameter
    pub fn incomplete_parameter(parameter: impl Into<String>, field: &'static str) -> Self {
        Self::IncompleteParameterRecord {
            parameter: parameter.into(),
            field,
        }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Create a duplicate parameter error
    pub fn duplicate_parameter(name: impl Into<String>) -> Self {
        Self::DuplicateParameter { name: name.into() }
    }

    /// Create a store append error without a transport source
    pub fn store_append(message: impl Into<String>) -> Self {
        Self::StoreAppend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store rejection error from an HTTP status and response body
    pub fn store_rejected(status: u16, message: impl Into<String>) -> Self {
        Self::StoreRejected {
            status,
            message: message.into(),
        }
    }

    /// Create a report rendering error
    pub fn report_rendering(message: impl Into<String>) -> Self {
        Self::ReportRendering {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// True for user-correctable validation failures that block export entirely
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingHeaderField { .. }
                | Self::NoParametersSelected
                | Self::IncompleteParameterRecord { .. }
                | Self::UnknownParameter { .. }
                | Self::DuplicateParameter { .. }
        )
    }

    /// True for remote-store failures, which do not block the report path
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreAppend { .. } | Self::StoreRejected { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::StoreAppend {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}
