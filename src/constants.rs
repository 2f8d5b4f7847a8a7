//! Application constants for the lab reporter
//!
//! This module contains the fixed report text, document layout constants,
//! and spreadsheet wire-format constants used throughout the application.

// =============================================================================
// Canonical Date Format
// =============================================================================

/// Canonical date format for both sinks: 4-digit year, 2-digit month,
/// 2-digit day, hyphen-separated. Locale-independent by construction.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Parameter Catalog
// =============================================================================

/// Number of parameters in the fixed catalog
pub const PARAMETER_COUNT: usize = 13;

// =============================================================================
// Report Document Layout
// =============================================================================

/// Fixed text and layout of the generated report document
pub mod report {
    /// Top-level heading of the report
    pub const HEADING: &str = "Lab Results Report";

    /// Style identifier for the report heading paragraph
    pub const HEADING_STYLE_ID: &str = "Heading1";

    /// Display name for the report heading style
    pub const HEADING_STYLE_NAME: &str = "Heading 1";

    /// Literal prefix of the lab number paragraph
    pub const LAB_NUMBER_PREFIX: &str = "Lab Number: ";

    /// Literal prefix of the sample number paragraph
    pub const SAMPLE_NUMBER_PREFIX: &str = "Sample Number: ";

    /// Literal prefix of the sample description paragraph
    pub const SAMPLE_DESCRIPTION_PREFIX: &str = "Sample Description: ";

    /// Label paragraph introducing the results table
    pub const SUMMARY_LABEL: &str = "Summary of Results:";

    /// Fixed header row of the results table, in column order
    pub const TABLE_COLUMNS: [&str; 7] = [
        "Parameter",
        "Date Started",
        "Environmental Conditions",
        "Method Used",
        "Results",
        "Uncertainty",
        "Unit",
    ];

    /// Fixed output filename for the downloadable report
    pub const FILENAME: &str = "Lab_Report.docx";

    /// MIME type of the downloadable report
    pub const MIME_TYPE: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
}

// =============================================================================
// Spreadsheet Store Wire Format
// =============================================================================

/// Constants for the remote tabular store append endpoint
pub mod sheets {
    /// Default base URL of the Sheets values API
    pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com/v4";

    /// Value input option: values are stored as-is, never locale-parsed
    pub const VALUE_INPUT_OPTION: &str = "RAW";

    /// Number of columns in one appended spreadsheet row
    pub const ROW_WIDTH: usize = 10;
}
